//! Read-only user record store.
//!
//! The store is built once at startup and never mutated afterwards, so a
//! single instance can be shared across worker threads without locking. Every
//! lookup is a linear scan over the records in insertion order.

use super::{CityAliases, LookupError, UserRecord};

/// Fixed, ordered collection of user records with name and city lookups.
///
/// # Examples
/// ```
/// use user_directory::domain::RecordStore;
///
/// let store = RecordStore::seeded();
/// let (index, user) = store.find_by_name("MUSTOFA").expect("seeded user");
/// assert_eq!(index, 1);
/// assert_eq!(user.first_name(), "Hadi");
///
/// let jakarta = store.find_by_city("jakarta").expect("alias resolves");
/// assert_eq!(jakarta.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    aliases: CityAliases,
}

impl RecordStore {
    /// Build a store over `records` with the default alias table.
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self::with_aliases(records, CityAliases::default())
    }

    /// Build a store with an explicit alias table.
    pub fn with_aliases(records: Vec<UserRecord>, aliases: CityAliases) -> Self {
        Self { records, aliases }
    }

    /// The store the service runs with.
    pub fn seeded() -> Self {
        Self::new(vec![
            UserRecord::new("Hasbi", "Qohar", "JKT"),
            UserRecord::new("Hadi", "Mustofa", "MDN"),
            UserRecord::new("Haqi", "Muttaqin", "MDN"),
        ])
    }

    /// Every record in insertion order.
    pub fn list_all(&self) -> &[UserRecord] {
        &self.records
    }

    /// First record whose first or last name equals `name`, ignoring case,
    /// together with its position.
    ///
    /// # Errors
    /// [`LookupError::UserNotFound`] carrying `name` as given when nothing
    /// matches.
    pub fn find_by_name(&self, name: &str) -> Result<(usize, &UserRecord), LookupError> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.answers_to(&needle))
            .ok_or_else(|| LookupError::user_not_found(name))
    }

    /// Records whose city code matches `city`, ignoring case, in insertion
    /// order.
    ///
    /// A record matches when its code equals the input. Only when that
    /// comparison fails is the input treated as an alias and compared against
    /// the alias target.
    ///
    /// # Errors
    /// [`LookupError::UserByCityNotFound`] carrying `city` as given when no
    /// record matches.
    pub fn find_by_city(&self, city: &str) -> Result<Vec<&UserRecord>, LookupError> {
        let input = city.to_lowercase();
        let alias_target = self.aliases.resolve(&input);
        let matches: Vec<&UserRecord> = self
            .records
            .iter()
            .filter(|record| {
                let code = record.city_key();
                if code == input {
                    true
                } else {
                    alias_target.is_some_and(|target| code == target)
                }
            })
            .collect();

        if matches.is_empty() {
            return Err(LookupError::user_by_city_not_found(city));
        }
        Ok(matches)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
