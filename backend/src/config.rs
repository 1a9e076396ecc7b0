//! Process settings loaded via OrthoConfig.
//!
//! Values come from `DIRECTORY_*` environment variables, matching CLI flags
//! or a config file. Only the port is mandatory.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SERVE_DIR: &str = ".";

/// Settings controlling the listener and static file serving.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Interface address to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// Directory holding the `portfolio/` and `static/` trees.
    pub serve_dir: Option<PathBuf>,
    /// Seconds a client may take to send request headers.
    #[ortho_config(default = 15)]
    pub request_timeout_secs: u64,
}

/// Invalid or missing settings detected at startup.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No port was configured.
    #[error("port must be set (DIRECTORY_PORT or --port)")]
    MissingPort,
    /// The host is not an IP address.
    #[error("invalid listen host {host:?}: {source}")]
    InvalidHost {
        /// Host as configured.
        host: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
}

impl DirectorySettings {
    /// Socket address to bind.
    ///
    /// # Errors
    /// [`SettingsError::MissingPort`] when no port is configured and
    /// [`SettingsError::InvalidHost`] when the host does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let port = self.port.ok_or(SettingsError::MissingPort)?;
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, port))
    }

    /// Directory for static files, falling back to the working directory.
    pub fn serve_dir(&self) -> PathBuf {
        self.serve_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SERVE_DIR))
    }

    /// Client request timeout.
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
