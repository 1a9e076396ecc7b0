//! Driving port for user directory queries.
//!
//! HTTP handlers call this port to list and filter users. Production backs it
//! with [`RecordStore`]; tests can substitute a mock.

use crate::domain::{LookupError, RecordStore, UserRecord};

/// Domain use-case port for reading the user directory.
///
/// Implementations must be safe to share across worker threads and must not
/// mutate state while answering.
#[cfg_attr(test, mockall::automock)]
pub trait UserLookup: Send + Sync {
    /// Every user in directory order.
    fn list_users(&self) -> Vec<UserRecord>;

    /// The first user whose first or last name matches `name`, ignoring case.
    fn find_user(&self, name: &str) -> Result<UserRecord, LookupError>;

    /// Users living in `city`, given as a city code or a known alias.
    fn users_in_city(&self, city: &str) -> Result<Vec<UserRecord>, LookupError>;
}

impl UserLookup for RecordStore {
    fn list_users(&self) -> Vec<UserRecord> {
        self.list_all().to_vec()
    }

    fn find_user(&self, name: &str) -> Result<UserRecord, LookupError> {
        self.find_by_name(name).map(|(_, user)| user.clone())
    }

    fn users_in_city(&self, city: &str) -> Result<Vec<UserRecord>, LookupError> {
        self.find_by_city(city)
            .map(|users| users.into_iter().cloned().collect())
    }
}
