//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`LookupError`] HTTP-agnostic while letting Actix handlers
//! return it directly. Failures become a status derived from the error code
//! and a plain-text body holding the rendered message.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::debug;

use crate::domain::{ErrorCode, LookupError};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, LookupError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
    }
}

impl ResponseError for LookupError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current().map(|id| id.to_string());
        debug!(
            subject = self.subject(),
            trace_id = trace_id.as_deref().unwrap_or("-"),
            "lookup matched no records"
        );
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
