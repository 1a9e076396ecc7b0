//! HTTP inbound adapter exposing the directory endpoints, health probes and
//! static file trees.

pub mod cities;
pub mod error;
pub mod health;
pub mod home;
pub mod schemas;
pub mod state;
pub mod static_files;
pub mod users;

pub use error::ApiResult;
