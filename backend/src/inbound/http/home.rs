//! Root greeting.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Body returned by `GET /`.
pub const HOME_GREETING: &str = "Bismillah Home";

/// Plain-text greeting at the site root.
#[utoipa::path(
    get,
    path = "/",
    tags = ["home"],
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(HOME_GREETING)
}
