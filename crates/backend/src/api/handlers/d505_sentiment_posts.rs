use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d505_sentiment_posts::SentimentPostsResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d505_sentiment_posts::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d505/sentiment_posts?search=&category=&sort=&direction=&group_by=
pub async fn get_sentiment_posts(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<SentimentPostsResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.sentiment_posts)?;
    let response = service::get_sentiment_posts(&snapshot, &params)?;
    tracing::info!(
        "D505 Dashboard: Returning {} of {} posts",
        response.view.records.len(),
        response.view.source_count
    );
    Ok(Json(response))
}
