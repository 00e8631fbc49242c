use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};

use crate::app::dto::RedirectParams;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/", get(redirect))
}

/// `?target=products` or `?target=home` redirects (307); anything else describes the endpoint.
pub async fn redirect(
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> axum::response::Response {
    let Query(pairs) = match pairs {
        Ok(q) => q,
        Err(rej) => return errors::domain_error_to_response(errors::query_rejection(rej)),
    };
    let params = RedirectParams::from_pairs(pairs);
    match params.target.as_deref() {
        Some("products") => Redirect::temporary("/api/products").into_response(),
        Some("home") => Redirect::temporary("/").into_response(),
        _ => Json(serde_json::json!({
            "success": true,
            "message": "Redirect API",
            "usage": "Add ?target=products or ?target=home to redirect",
            "examples": [
                "/api/redirect?target=products",
                "/api/redirect?target=home",
            ],
        }))
        .into_response(),
    }
}
