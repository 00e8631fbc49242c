use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_core::ProductId;

use crate::app::{dto, errors};
use crate::app::dto::Envelope;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/slug/:slug", get(get_product_by_slug))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> axum::response::Response {
    let Query(pairs) = match pairs {
        Ok(q) => q,
        Err(rej) => return errors::domain_error_to_response(errors::query_rejection(rej)),
    };
    let params = dto::ListProductsParams::from_pairs(pairs);
    let items = services.catalog().list(&params.into_query());
    (StatusCode::OK, Json(Envelope::list(items))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.catalog().get(&ProductId::from(id)) {
        Ok(product) => (StatusCode::OK, Json(Envelope::data(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product_by_slug(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match services.catalog().find_by_slug(&slug) {
        Ok(product) => (StatusCode::OK, Json(Envelope::data(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::domain_error_to_response(errors::json_rejection(rej)),
    };

    let input = match body.into_new_product() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let created = services.catalog().create(input);
    tracing::info!(product_id = %created.id_typed(), "product created");

    (
        StatusCode::CREATED,
        Json(Envelope::data(created).with_message("Product created successfully")),
    )
        .into_response()
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    // Body is checked before the id lookup: malformed input wins over not-found.
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::domain_error_to_response(errors::json_rejection(rej)),
    };

    match services
        .catalog()
        .update(&ProductId::from(id), &body.into_patch())
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(Envelope::data(updated).with_message("Product updated successfully")),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    match services.catalog().delete(&id) {
        Ok(()) => {
            tracing::info!(product_id = %id, "product deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
