use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::Instrument;

use storefront_core::RequestId;

pub const X_MIDDLEWARE_APPLIED: HeaderName = HeaderName::from_static("x-middleware-applied");
pub const X_REQUEST_TIME: HeaderName = HeaderName::from_static("x-request-time");
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Runs before every request: logs it and stamps the response with tracing headers.
pub async fn request_middleware(req: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("request", %request_id, %method, %path);

    async move {
        tracing::info!("{method} {path}");

        let mut res = next.run(req).await;
        let headers = res.headers_mut();
        headers.insert(X_MIDDLEWARE_APPLIED, HeaderValue::from_static("true"));
        if let Ok(v) = HeaderValue::from_str(&Utc::now().to_rfc3339()) {
            headers.insert(X_REQUEST_TIME, v);
        }
        if let Ok(v) = HeaderValue::from_str(&request_id.to_string()) {
            headers.insert(X_REQUEST_ID, v);
        }

        tracing::debug!(status = res.status().as_u16(), "response");
        res
    }
    .instrument(span)
    .await
}
