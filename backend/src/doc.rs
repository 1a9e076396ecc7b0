//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer and the
//! [`UserRecordSchema`] wrapper, which documents the record shape without
//! coupling domain types to utoipa.
//!
//! The document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::UserRecordSchema;
use utoipa::OpenApi;

/// OpenAPI document for the directory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Read-only lookups over an in-memory user directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::home,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::cities::users_by_city,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRecordSchema)),
    tags(
        (name = "users", description = "Directory lookups"),
        (name = "home", description = "Site root"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
