use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Service index: what this server exposes.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Storefront catalog API",
        "endpoints": [
            "GET /api/products?category=&search=&sort=price",
            "POST /api/products",
            "GET /api/products/:id",
            "PATCH /api/products/:id",
            "DELETE /api/products/:id",
            "GET /api/products/slug/:slug",
            "GET /api/headers",
            "GET /api/cookies",
            "DELETE /api/cookies",
            "GET /api/redirect?target=products|home",
            "GET /api/cache",
            "GET /health",
        ],
    }))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "Not found")
}
