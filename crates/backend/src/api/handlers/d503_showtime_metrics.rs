use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d503_showtime_metrics::ShowtimeMetricsResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d503_showtime_metrics::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d503/showtime_metrics?search=&category=&sort=&direction=&group_by=
pub async fn get_showtime_metrics(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<ShowtimeMetricsResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.showtime_metrics)?;
    let response = service::get_showtime_metrics(&snapshot, &params)?;
    tracing::info!(
        "D503 Dashboard: Returning {} of {} movies",
        response.records.len(),
        response.source_count
    );
    Ok(Json(response))
}
