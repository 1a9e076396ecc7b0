//! City filter handler.
//!
//! ```text
//! GET /city/{city}
//! ```

use actix_web::{get, web};

use crate::domain::UserRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::UserRecordSchema;
use crate::inbound::http::state::HttpState;

/// List users in a city, given as a short code (`jkt`) or a known full name
/// (`jakarta`), ignoring case.
#[utoipa::path(
    get,
    path = "/city/{city}",
    params(("city" = String, Path, description = "City code or alias, any case")),
    responses(
        (status = 200, description = "Users in the city, in directory order", body = [UserRecordSchema]),
        (status = 404, description = "No user lives in that city", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsersByCity"
)]
#[get("/city/{city}")]
pub async fn users_by_city(
    state: web::Data<HttpState>,
    city: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users.users_in_city(&city)?;
    Ok(web::Json(users))
}
