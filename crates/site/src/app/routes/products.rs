use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use rodentia_catalog::{Catalog, ProductId};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::SelectionQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::invalid_query(rejection),
    };
    let selection = match query.to_selection() {
        Ok(s) => s,
        Err(e) => return errors::invalid_facet(e),
    };

    let products: Vec<dto::ProductDto> = catalog
        .visible(&selection)
        .into_iter()
        .map(dto::ProductDto::from)
        .collect();

    Json(dto::ProductListResponse {
        selection,
        count: products.len(),
        products,
    })
    .into_response()
}

pub async fn get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    match catalog.get(id) {
        Ok(p) => Json(dto::ProductDto::from(p)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
