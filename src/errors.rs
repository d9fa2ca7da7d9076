use axum::http::StatusCode;
use thiserror::Error;

/// Message shown when a failed load carries no backend error.
pub const GENERIC_LOAD_ERROR: &str = "Failed to load data";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<crate::activity::UnknownActivity> for AppError {
    fn from(err: crate::activity::UnknownActivity) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.user_message(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Whole-request failure of a forecast load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("invalid forecast body: {0}")]
    Decode(String),

    #[error("backend reported failure")]
    Backend(Option<String>),
}

impl LoadError {
    /// Text for the global error panel: the backend's message if it sent
    /// one, otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        let backend = match self {
            LoadError::Status { message, .. } | LoadError::Backend(message) => message.as_deref(),
            LoadError::Transport(_) | LoadError::Decode(_) => None,
        };
        backend
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_LOAD_ERROR)
            .to_string()
    }
}
