use axum::{routing::get, Router};

pub mod facets;
pub mod page;
pub mod products;
pub mod system;

/// Router for the page and the JSON catalog API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/facets", get(facets::list_facets))
        .nest("/api/products", products::router())
}
