use axum::{http::header, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;

pub fn router() -> Router {
    Router::new().route("/", get(uncached))
}

/// Regenerated on every request; the timestamp changes each call.
pub async fn uncached() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(serde_json::json!({
            "success": true,
            "message": "Caching demo",
            "timestamp": Utc::now().to_rfc3339(),
            "cacheInfo": {
                "policy": "no-store",
                "explanation": "This route is NOT cached. Every request generates a new timestamp.",
                "alternatives": [
                    "public, max-age=31536000, immutable: cache forever",
                    "public, max-age=60: cache for 60 seconds",
                ],
            },
        })),
    )
}
