//! Error types for the pickup dispatch service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Top-level error type for a pickup request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Routing config load failed: {0}")]
    RoutingLoad(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No recipients resolved (default_recipients empty?)")]
    NoRecipients,

    #[error("Email send failed: {0}")]
    Delivery(String),

    #[error("Invalid pickup request: {0}")]
    Validation(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SMTP settings are missing: {}", .missing.join(", "))]
    SmtpIncomplete { missing: Vec<&'static str> },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl Error {
    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RoutingLoad(_) | Error::Config(_) | Error::NoRecipients => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Delivery(_) => StatusCode::BAD_GATEWAY,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Pickup request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Pickup request rejected");
        }
        (
            status,
            Json(serde_json::json!({
                "ok": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
