//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserRecord`].
///
/// A directory entry as returned by the user and city endpoints.
#[derive(ToSchema)]
#[schema(as = UserRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRecordSchema {
    /// Given name.
    #[schema(example = "Hasbi")]
    firstname: String,
    /// Family name.
    #[schema(example = "Qohar")]
    lastname: String,
    /// Short city code.
    #[schema(example = "JKT")]
    city: String,
}
