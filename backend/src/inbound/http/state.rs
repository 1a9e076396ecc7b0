//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the [`UserLookup`] port and remain testable against doubles.

use std::sync::Arc;

use crate::domain::ports::UserLookup;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_directory::domain::RecordStore;
/// use user_directory::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(RecordStore::seeded()));
/// assert_eq!(state.users.list_users().len(), 3);
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Read-only user directory.
    pub users: Arc<dyn UserLookup>,
}

impl HttpState {
    /// Construct state around a directory implementation.
    pub fn new(users: Arc<dyn UserLookup>) -> Self {
        Self { users }
    }
}
