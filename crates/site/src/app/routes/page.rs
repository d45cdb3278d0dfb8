use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    response::IntoResponse,
};

use rodentia_catalog::Catalog;

use crate::app::{dto, errors};
use crate::views;

/// The whole storefront page, with the catalog filtered by the query string.
pub async fn index(
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

    views::page(&catalog, &selection).into_response()
}
