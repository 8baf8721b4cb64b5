use crate::db::models::api::{ApiResponse, ErrorDetail, error_codes};
use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Shift {shift_id} is inactive")]
    InactiveShift { shift_id: Uuid },

    #[error("Date {date} is in the past")]
    PastDate { date: NaiveDate },

    #[error("Personnel {personnel_id} is on approved leave on {date}")]
    OnLeave { personnel_id: Uuid, date: NaiveDate },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        field: Option<String>,
        code: Option<String>,
    },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            AppError::Validation { ref message } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::bad_request(message),
            ),
            AppError::NotFound { ref resource } => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::not_found(&format!("{} not found", resource)),
            ),
            AppError::InactiveShift { shift_id } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::conflict(
                    &format!("Shift {} is inactive and cannot be assigned", shift_id),
                    Some("shift_id".to_string()),
                    error_codes::SHIFT_INACTIVE,
                ),
            ),
            AppError::PastDate { date } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error(
                    400,
                    "Assignments cannot be back-dated",
                    vec![ErrorDetail {
                        field: Some("date".to_string()),
                        code: error_codes::SCHEDULE_PAST_DATE.to_string(),
                        message: format!("{} is before today", date),
                    }],
                ),
            ),
            AppError::OnLeave { personnel_id, date } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::conflict(
                    &format!(
                        "Personnel {} is on approved leave on {}",
                        personnel_id, date
                    ),
                    Some("date".to_string()),
                    error_codes::SCHEDULE_ON_LEAVE,
                ),
            ),
            AppError::Conflict {
                ref message,
                ref field,
                ref code,
            } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::conflict(message, field.clone(), code.as_deref().unwrap_or("")),
            ),
            AppError::InvalidState { ref message } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::conflict(message, None, error_codes::LEAVE_INVALID_TRANSITION),
            ),
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Configuration error"),
                )
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error(message),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict_with_code(
        message: impl Into<String>,
        field: Option<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            message: message.into(),
            field,
            code: Some(code.into()),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
