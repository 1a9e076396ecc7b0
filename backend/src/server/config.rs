//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use user_directory::config::{DirectorySettings, SettingsError};
use user_directory::domain::ports::UserLookup;

/// Everything the server needs once settings have been validated.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) serve_dir: PathBuf,
    pub(crate) request_timeout: Duration,
    pub(crate) users: Arc<dyn UserLookup>,
}

impl ServerConfig {
    /// Validate settings and pair them with the directory to serve.
    ///
    /// # Errors
    /// Propagates [`SettingsError`] when the bind address cannot be formed.
    pub fn from_settings(
        settings: &DirectorySettings,
        users: Arc<dyn UserLookup>,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            serve_dir: settings.serve_dir(),
            request_timeout: settings.request_timeout(),
            users,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use user_directory::domain::RecordStore;

    fn settings(port: Option<u16>) -> DirectorySettings {
        DirectorySettings {
            port,
            host: Some("127.0.0.1".to_owned()),
            serve_dir: Some(PathBuf::from("public")),
            request_timeout_secs: 5,
        }
    }

    #[rstest]
    fn carries_validated_settings() {
        let users = Arc::new(RecordStore::seeded());
        let config =
            ServerConfig::from_settings(&settings(Some(8080)), users).expect("valid settings");
        assert_eq!(config.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.serve_dir, PathBuf::from("public"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.users.list_users().len(), 3);
    }

    #[rstest]
    fn rejects_missing_port() {
        let result = ServerConfig::from_settings(&settings(None), Arc::new(RecordStore::seeded()));
        assert!(matches!(result, Err(SettingsError::MissingPort)));
    }
}
