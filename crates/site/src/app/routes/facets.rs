use axum::Json;

use crate::app::dto::FacetsResponse;

pub async fn list_facets() -> Json<FacetsResponse> {
    Json(FacetsResponse::build())
}
