//! Domain primitives and the read-only record store.
//!
//! Purpose: hold the user directory and answer lookups without any knowledge
//! of HTTP. Types are immutable once built.
//!
//! Public surface:
//! - UserRecord (alias to `user::UserRecord`) — a single directory entry.
//! - CityAliases (alias to `city::CityAliases`) — full city name to code map.
//! - RecordStore (alias to `record_store::RecordStore`) — lookups by name and city.
//! - LookupError / ErrorCode (alias to `error::*`) — not-found failures.

mod macros;

pub mod city;
pub mod error;
pub mod ports;
pub mod record_store;
pub mod user;

pub use self::city::CityAliases;
pub use self::error::{ErrorCode, LookupError};
pub use self::record_store::RecordStore;
pub use self::user::UserRecord;
