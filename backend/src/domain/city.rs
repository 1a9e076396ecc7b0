//! City alias table.
//!
//! Maps full city names to the short codes stored on [`super::UserRecord`].
//! Keys and targets are held lower-cased; callers pass lower-cased input.

use std::collections::BTreeMap;

/// Alias-to-code mapping consulted when a city filter does not match a record
/// code directly.
///
/// The default table is `jakarta -> jkt` and `madiun -> mdn`.
///
/// # Examples
/// ```
/// use user_directory::domain::CityAliases;
///
/// let aliases = CityAliases::default().with_alias("Surabaya", "SBY");
/// assert_eq!(aliases.resolve("jakarta"), Some("jkt"));
/// assert_eq!(aliases.resolve("surabaya"), Some("sby"));
/// assert_eq!(aliases.resolve("bandung"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityAliases {
    by_alias: BTreeMap<String, String>,
}

impl CityAliases {
    /// An alias table with no entries.
    pub fn empty() -> Self {
        Self {
            by_alias: BTreeMap::new(),
        }
    }

    /// Add or replace an alias. Both sides are lower-cased on insert.
    pub fn with_alias(mut self, alias: impl AsRef<str>, code: impl AsRef<str>) -> Self {
        self.by_alias.insert(
            alias.as_ref().to_lowercase(),
            code.as_ref().to_lowercase(),
        );
        self
    }

    /// Resolve a lower-cased alias to its lower-cased city code.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.by_alias.get(alias).map(String::as_str)
    }

    /// Number of aliases in the table.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

impl Default for CityAliases {
    fn default() -> Self {
        Self::empty()
            .with_alias("jakarta", "jkt")
            .with_alias("madiun", "mdn")
    }
}
