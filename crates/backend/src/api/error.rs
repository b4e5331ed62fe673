use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::view::ErrorResponse;

use crate::dashboards::d508_movie_comparison::selection::SelectionError;
use crate::shared::data::store::LoadError;
use crate::shared::view_engine::ViewError;

/// Error returned by HTTP handlers, rendered as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid view parameters
    #[error(transparent)]
    InvalidParams(#[from] ViewError),

    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),

    #[error("unknown view '{0}'")]
    UnknownView(String),

    /// Dataset has no snapshot to serve yet
    #[error("{0}")]
    NotReady(String),

    /// Reload superseded by a newer one
    #[error(transparent)]
    Superseded(LoadError),

    /// Data source failed or delivered invalid records
    #[error(transparent)]
    Upstream(LoadError),
}

impl From<LoadError> for ApiError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Stale { .. } => Self::Superseded(e),
            other => Self::Upstream(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) | Self::InvalidSelection(_) => StatusCode::BAD_REQUEST,
            Self::UnknownView(_) => StatusCode::NOT_FOUND,
            Self::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Superseded(_) => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
