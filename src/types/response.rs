use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Envelope status for a successful call
pub const STATUS_SUCCESS: &str = "success";

/// Envelope status for a failed call
pub const STATUS_ERROR: &str = "error";

/// Standard API response envelope: `{status, error, data}`.
///
/// Absent fields are omitted from the JSON body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            error: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl ApiResponse<()> {
    /// Success without a payload (used by DELETE endpoints)
    pub fn empty() -> Self {
        Self {
            status: STATUS_SUCCESS,
            error: None,
            data: None,
        }
    }
}

/// Envelopes are always delivered with 200; the outcome lives in `status`.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
