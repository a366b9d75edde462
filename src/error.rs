use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::ErrorResponse;
use crate::hive::HiveError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("initialFetchLimit must be between {min} and {max} (due to node limitations).")]
    InvalidFetchLimit { min: u32, max: u32 },
    /// Node failures are reported to callers without their details.
    #[error("An error occurred while searching for posts.")]
    Upstream(#[from] HiveError),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::InvalidFetchLimit { .. } => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        if let SearchError::Upstream(source) = &self {
            error!(error = %source, "error searching for posts");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
