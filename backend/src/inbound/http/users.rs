//! User API handlers.
//!
//! ```text
//! GET /user
//! GET /user/{username}
//! ```

use actix_web::{get, web};

use crate::domain::UserRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::UserRecordSchema;
use crate::inbound::http::state::HttpState;

/// List every user in directory order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users", body = [UserRecordSchema])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/user")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<UserRecord>> {
    web::Json(state.users.list_users())
}

/// Fetch the first user whose first or last name matches, ignoring case.
#[utoipa::path(
    get,
    path = "/user/{username}",
    params(("username" = String, Path, description = "First or last name, any case")),
    responses(
        (status = 200, description = "Matched user", body = UserRecordSchema),
        (status = 404, description = "No user has that name", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    username: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    let user = state.users.find_user(&username)?;
    Ok(web::Json(user))
}
