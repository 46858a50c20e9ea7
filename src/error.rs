//! Error types for Desk Insights server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Application error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NoSuchData = 3,
    BadValue = 4,
    UpstreamFailure = 5,
    CacheFailure = 6,
}

/// Failure to obtain one day of booking data from the upstream service.
///
/// Every variant carries the day that failed so callers can tell which
/// request in a range aborted the aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request for {date} failed: {detail}")]
    Transport { date: NaiveDate, detail: String },

    #[error("upstream answered {status} for {date}")]
    Status { date: NaiveDate, status: u16 },

    #[error("unreadable response for {date}: {detail}")]
    Decode { date: NaiveDate, detail: String },
}

impl FetchError {
    pub fn date(&self) -> NaiveDate {
        match self {
            FetchError::Transport { date, .. }
            | FetchError::Status { date, .. }
            | FetchError::Decode { date, .. } => *date,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Booking data unavailable: {0}")]
    Upstream(#[from] FetchError),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Cache(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Day whose upstream request failed, for upstream errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_date: Option<NaiveDate>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut failed_date = None;
        let (status, code, message) = match &self {
            AppError::Upstream(e) => {
                tracing::warn!("Upstream error: {}", e);
                failed_date = Some(e.date());
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorCode::UpstreamFailure,
                    format!("Booking data unavailable ({}), please try again later", e),
                )
            }
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Cache(msg) => {
                tracing::error!("Cache error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::CacheFailure,
                    "Booking cache error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            failed_date,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
