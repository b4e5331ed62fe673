use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d506_trending_topics::TrendingTopicsResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d506_trending_topics::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d506/trending_topics?search=&category=&sort=&direction=&group_by=
pub async fn get_trending_topics(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<TrendingTopicsResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.trending_topics)?;
    let response = service::get_trending_topics(&snapshot, &params)?;
    tracing::info!(
        "D506 Dashboard: Returning {} of {} topics",
        response.records.len(),
        response.source_count
    );
    Ok(Json(response))
}
