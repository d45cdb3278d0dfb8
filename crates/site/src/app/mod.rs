//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (page, JSON catalog API, system)
//! - `dto.rs`: query/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use rodentia_catalog::Catalog;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around an injected catalog.
pub fn build_app(catalog: Catalog) -> Router {
    tracing::info!(products = catalog.len(), "catalog loaded");
    let catalog = Arc::new(catalog);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_span))
                .layer(Extension(catalog)),
        )
}
