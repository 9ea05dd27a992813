//! Facility map feed route.

use crate::error::Result;
use crate::models::Facility;
use crate::routes::ApiResponse;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/map-data", get(get_map_data))
}

/// Read-only dump of the facility record set.
async fn get_map_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Facility>>>> {
    let facilities = state.db.list_facilities().await?;
    Ok(Json(ApiResponse::data(facilities)))
}
