// Dashboard handlers (d501-d508)
pub mod d501_ticket_sales;
pub mod d502_cinema_metrics;
pub mod d503_showtime_metrics;
pub mod d504_top_movies;
pub mod d505_sentiment_posts;
pub mod d506_trending_topics;
pub mod d507_cinema_heatmap;
pub mod d508_movie_comparison;

// Dataset registry handlers
pub mod views;

use contracts::shared::view::{LoadState, Record};
use std::sync::Arc;

use super::error::ApiError;
use crate::shared::data::store::DatasetStore;
use crate::shared::view_engine::Snapshot;

/// Snapshot to derive from, or 503 while the first load is pending.
///
/// After a failed reload the last good snapshot is still served.
pub(crate) fn ready_snapshot<R: Record>(
    store: &DatasetStore<R>,
) -> Result<Arc<Snapshot<R>>, ApiError> {
    let view = store.schema().id;
    match store.load_state() {
        LoadState::Loading => Err(ApiError::NotReady(format!("view '{view}' is still loading"))),
        LoadState::Failed { message } if store.current().is_empty() => Err(ApiError::NotReady(
            format!("view '{view}' failed to load: {message}"),
        )),
        _ => Ok(store.current()),
    }
}
