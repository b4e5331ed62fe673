use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d508_movie_comparison::{ComparisonParams, MovieComparisonResponse};
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d508_movie_comparison::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d508/movie_comparison?metric=&movies=1,2,3
pub async fn get_movie_comparison(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<MovieComparisonResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.movie_comparison)?;
    let response = service::get_movie_comparison(&snapshot, &params)?;
    tracing::info!(
        "D508 Dashboard: Comparing {} of {} movies by {}",
        response.selected.len(),
        snapshot.len(),
        response.metric_label
    );
    Ok(Json(response))
}
