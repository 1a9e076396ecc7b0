//! User directory service: read-only lookups over an in-memory user set,
//! exposed over HTTP.
//!
//! The [`domain`] layer owns records, aliases and lookup errors; the
//! [`inbound`] layer adapts them to Actix handlers; [`config`] loads process
//! settings.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
