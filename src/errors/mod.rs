use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::path::PathBuf;
use thiserror::Error;

use crate::api::models::ErrorResponse;
use crate::domain::models::CounterOverflow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access leaderboard file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse leaderboard file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize leaderboard")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("leaderboard update rejected")]
    Rejected {
        #[from]
        source: CounterOverflow,
    },
}

/// Errors surfaced to HTTP callers. Storage causes are logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Player name and result are required")]
    MissingFields,
    #[error("Result must be one of: win, loss, draw")]
    InvalidResult,
    #[error("Failed to read leaderboard")]
    Read(#[source] StoreError),
    #[error("Failed to update leaderboard")]
    Update(#[source] StoreError),
    #[error("Failed to reset leaderboard")]
    Reset(#[source] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidResult => StatusCode::BAD_REQUEST,
            ApiError::Read(_) | ApiError::Update(_) | ApiError::Reset(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Read(e) | ApiError::Update(e) | ApiError::Reset(e) => {
                log::error!("{}: {:?}", self, e);
            }
            _ => log::debug!("Rejected request: {}", self),
        }
        let body = ErrorResponse { error: self.to_string() };
        (status, Json(body)).into_response()
    }
}
