use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use storefront_core::DomainError;

use crate::app::dto::Envelope;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
pub const INVALID_QUERY_STRING: &str = "Invalid query string";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::Malformed(detail) => {
            tracing::debug!(%detail, "rejected malformed request body");
            json_error(StatusCode::BAD_REQUEST, INVALID_JSON_BODY)
        }
    }
}

/// Any body that axum could not turn into the typed request (bad JSON, wrong
/// content type, schema mismatch) is malformed input.
pub fn json_rejection(rejection: JsonRejection) -> DomainError {
    DomainError::malformed(rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> DomainError {
    tracing::debug!(detail = %rejection.body_text(), "rejected query string");
    DomainError::validation(INVALID_QUERY_STRING)
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(Envelope::error(message))).into_response()
}
