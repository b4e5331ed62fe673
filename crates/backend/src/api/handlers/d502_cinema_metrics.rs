use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d502_cinema_metrics::CinemaMetricsResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d502_cinema_metrics::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d502/cinema_metrics?search=&category=&sort=&direction=&group_by=
pub async fn get_cinema_metrics(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<CinemaMetricsResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.cinema_metrics)?;
    let response = service::get_cinema_metrics(&snapshot, &params)?;
    tracing::info!(
        "D502 Dashboard: Returning {} of {} cinemas",
        response.view.records.len(),
        response.view.source_count
    );
    Ok(Json(response))
}
