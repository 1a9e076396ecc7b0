//! User record model.

use serde::{Deserialize, Serialize};

/// A single directory entry: first name, last name and short city code.
///
/// Records are immutable once built. Serialised field names are lower-case
/// (`firstname`, `lastname`, `city`) to match the public JSON contract.
///
/// # Examples
/// ```
/// use user_directory::domain::UserRecord;
///
/// let user = UserRecord::new("Hasbi", "Qohar", "JKT");
/// assert_eq!(user.first_name(), "Hasbi");
/// assert_eq!(
///     serde_json::to_string(&user).expect("serialise record"),
///     r#"{"firstname":"Hasbi","lastname":"Qohar","city":"JKT"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    #[serde(rename = "firstname")]
    first_name: String,
    #[serde(rename = "lastname")]
    last_name: String,
    city: String,
}

impl UserRecord {
    /// Build a record from its three parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Short city code such as `JKT`.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Whether either name equals `needle`, which must already be lower-cased.
    pub(crate) fn answers_to(&self, needle: &str) -> bool {
        self.first_name.to_lowercase() == needle || self.last_name.to_lowercase() == needle
    }

    /// Lower-cased city code used for comparisons.
    pub(crate) fn city_key(&self) -> String {
        self.city.to_lowercase()
    }
}
