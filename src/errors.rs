//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Every
//! error is rendered through the JSON envelope with HTTP 200, so
//! clients read the outcome from the body rather than the status line.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::EntityKind;
use crate::types::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("the {0} was not found in the repository")]
    NotFound(EntityKind),

    #[error("the {0} already exists in the repository")]
    AlreadyExists(EntityKind),

    // Validation
    #[error("{}", invalid_message(.0))]
    Invalid(EntityKind),

    #[error("invalid payment date")]
    InvalidPaymentDate,

    #[error("{0}")]
    BadRequest(String),

    // Unfinished surfaces
    #[error("not implemented")]
    NotImplemented,

    // Startup
    #[error("undefined storage: {0}")]
    UndefinedStorage(String),

    #[error("configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

fn invalid_message(kind: &EntityKind) -> &'static str {
    match kind {
        EntityKind::Category => "the category is not valid",
        EntityKind::Currency => "the currency is not valid",
        EntityKind::Cycle => "the cycle is invalid",
        EntityKind::Subscription => "the subscription is invalid",
    }
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::Invalid(_) => "VALIDATION_ERROR",
            AppError::InvalidPaymentDate => "INVALID_PAYMENT_DATE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotImplemented => "NOT_IMPLEMENTED",
            AppError::UndefinedStorage(_) => "UNDEFINED_STORAGE",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "request failed: {}", self);
        let body = ApiResponse::<()>::error(self.user_message());

        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, kind: EntityKind) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, kind: EntityKind) -> AppResult<T> {
        self.ok_or(AppError::NotFound(kind))
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
