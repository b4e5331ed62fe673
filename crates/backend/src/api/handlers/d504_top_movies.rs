use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d504_top_movies::TopMoviesResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d504_top_movies::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d504/top_movies?search=&category=&sort=&direction=&group_by=
pub async fn get_top_movies(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<TopMoviesResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.top_movies)?;
    let response = service::get_top_movies(&snapshot, &params)?;
    tracing::info!(
        "D504 Dashboard: Returning {} of {} movies",
        response.view.records.len(),
        response.view.source_count
    );
    Ok(Json(response))
}
