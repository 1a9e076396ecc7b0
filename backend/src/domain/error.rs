//! Domain-level lookup errors.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the domain only names the failure and its subject.

use super::macros::define_domain_error;

/// Stable machine-readable category for a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The requested record or records do not exist.
    NotFound,
}

define_domain_error! {
    /// Failures returned by [`super::RecordStore`] lookups.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::{ErrorCode, LookupError};
    ///
    /// let err = LookupError::user_by_city_not_found("atlantis");
    /// assert_eq!(err.code(), ErrorCode::NotFound);
    /// assert_eq!(err.subject(), "atlantis");
    /// assert_eq!(err.to_string(), "User from atlantis city not found");
    /// ```
    pub enum LookupError {
        /// No record's first or last name matches.
        UserNotFound {
            /// Name as supplied by the caller.
            name: String
        } => "User {name} not found",
        /// No record lives in the requested city, directly or by alias.
        UserByCityNotFound {
            /// City as supplied by the caller.
            city: String
        } => "User from {city} city not found",
    }
}

impl LookupError {
    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound { .. } | Self::UserByCityNotFound { .. } => ErrorCode::NotFound,
        }
    }

    /// The caller input that produced no match.
    pub fn subject(&self) -> &str {
        match self {
            Self::UserNotFound { name } => name,
            Self::UserByCityNotFound { city } => city,
        }
    }
}
