use axum::Router;

pub mod cache;
pub mod cookies;
pub mod headers;
pub mod products;
pub mod redirect;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/api/products", products::router())
        .nest("/api/headers", headers::router())
        .nest("/api/cookies", cookies::router())
        .nest("/api/redirect", redirect::router())
        .nest("/api/cache", cache::router())
}
