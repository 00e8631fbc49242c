use axum::{
    http::{header, HeaderMap, HeaderName},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

const X_API_VERSION: HeaderName = HeaderName::from_static("x-api-version");
const X_CUSTOM_HEADER: HeaderName = HeaderName::from_static("x-custom-header");
const X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

pub fn router() -> Router {
    Router::new().route("/", get(echo_headers))
}

/// Echo a few request headers back and set API/CORS response headers.
pub async fn echo_headers(headers: HeaderMap) -> impl IntoResponse {
    let read = |name: &HeaderName| headers.get(name).and_then(|v| v.to_str().ok());

    let body = serde_json::json!({
        "success": true,
        "message": "Headers demo",
        "receivedHeaders": {
            "userAgent": read(&header::USER_AGENT),
            "authorization": read(&header::AUTHORIZATION),
            "customHeader": read(&X_CUSTOM_HEADER),
        },
    });

    (
        [
            (X_API_VERSION, "1.0"),
            (X_POWERED_BY, "axum"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
        ],
        Json(body),
    )
}
