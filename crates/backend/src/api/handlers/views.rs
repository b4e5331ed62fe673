use axum::extract::{Path, State};
use axum::Json;
use contracts::shared::view::{ListViewsResponse, RecordSchemaOwned, ReloadResponse};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::shared::data::datasets::Datasets;

/// GET /api/views
pub async fn list_views(State(datasets): State<Arc<Datasets>>) -> Json<ListViewsResponse> {
    let views = datasets
        .handles()
        .iter()
        .map(|handle| handle.info())
        .collect();
    Json(ListViewsResponse { views })
}

/// GET /api/views/:view_id/schema
pub async fn get_schema(
    State(datasets): State<Arc<Datasets>>,
    Path(view_id): Path<String>,
) -> Result<Json<RecordSchemaOwned>, ApiError> {
    let handle = datasets
        .find(&view_id)
        .ok_or_else(|| ApiError::UnknownView(view_id.clone()))?;
    Ok(Json(RecordSchemaOwned::from(handle.schema())))
}

/// POST /api/views/:view_id/reload
pub async fn reload(
    State(datasets): State<Arc<Datasets>>,
    Path(view_id): Path<String>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let handle = datasets
        .find(&view_id)
        .ok_or_else(|| ApiError::UnknownView(view_id.clone()))?;

    tracing::info!("Reloading view '{}'", view_id);
    let record_count = handle.reload_dataset().await?;
    Ok(Json(ReloadResponse {
        view_id,
        load_state: handle.info().load_state,
        record_count,
    }))
}
