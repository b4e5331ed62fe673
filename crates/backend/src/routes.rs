use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::shared::data::datasets::Datasets;

/// All application routes
pub fn configure_routes(datasets: Arc<Datasets>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DATASET REGISTRY
        // ========================================
        .route("/api/views", get(handlers::views::list_views))
        .route("/api/views/:view_id/schema", get(handlers::views::get_schema))
        .route("/api/views/:view_id/reload", post(handlers::views::reload))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/d501/ticket_sales",
            get(handlers::d501_ticket_sales::get_ticket_sales),
        )
        .route(
            "/api/d502/cinema_metrics",
            get(handlers::d502_cinema_metrics::get_cinema_metrics),
        )
        .route(
            "/api/d503/showtime_metrics",
            get(handlers::d503_showtime_metrics::get_showtime_metrics),
        )
        .route(
            "/api/d504/top_movies",
            get(handlers::d504_top_movies::get_top_movies),
        )
        .route(
            "/api/d505/sentiment_posts",
            get(handlers::d505_sentiment_posts::get_sentiment_posts),
        )
        .route(
            "/api/d506/trending_topics",
            get(handlers::d506_trending_topics::get_trending_topics),
        )
        .route(
            "/api/d507/cinema_heatmap",
            get(handlers::d507_cinema_heatmap::get_cinema_heatmap),
        )
        .route(
            "/api/d508/movie_comparison",
            get(handlers::d508_movie_comparison::get_movie_comparison),
        )
        .with_state(datasets)
}
