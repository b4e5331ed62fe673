use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d507_cinema_heatmap::CinemaHeatmapResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d507_cinema_heatmap::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d507/cinema_heatmap?search=&category=&sort=&direction=&group_by=
pub async fn get_cinema_heatmap(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<CinemaHeatmapResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.cinema_heatmap)?;
    let response = service::get_cinema_heatmap(&snapshot, &params)?;
    tracing::info!(
        "D507 Dashboard: Returning {} of {} cinemas",
        response.view.records.len(),
        response.view.source_count
    );
    Ok(Json(response))
}
