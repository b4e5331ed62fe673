use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d501_ticket_sales::TicketSalesResponse;
use contracts::shared::view::ViewParams;
use std::sync::Arc;

use super::ready_snapshot;
use crate::api::error::ApiError;
use crate::dashboards::d501_ticket_sales::service;
use crate::shared::data::datasets::Datasets;

/// GET /api/d501/ticket_sales?search=&category=&sort=&direction=&group_by=
pub async fn get_ticket_sales(
    State(datasets): State<Arc<Datasets>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<TicketSalesResponse>, ApiError> {
    let snapshot = ready_snapshot(&datasets.ticket_sales)?;
    let response = service::get_ticket_sales(&snapshot, &params)?;
    tracing::info!(
        "D501 Dashboard: Returning {} of {} cinemas",
        response.view.records.len(),
        response.view.source_count
    );
    Ok(Json(response))
}
