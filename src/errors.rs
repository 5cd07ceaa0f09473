use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream model error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to parse model output as JSON: {0}")]
    Parse(String),

    #[error("Unexpected model output shape: {0}")]
    Shape(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limit exceeded, retry in {retry_after_ms} ms")]
    RateLimited { retry_after_ms: u64 },
}

impl AppError {
    fn summary(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "Service is not configured",
            AppError::Upstream { .. } => "Upstream model call failed",
            AppError::Parse(_) => "Failed to parse AI response as JSON",
            AppError::Shape(_) => "AI response failed validation",
            AppError::Validation(_) => "Invalid request",
            AppError::RateLimited { .. } => {
                "Please wait a moment before making another request"
            }
        }
    }

    fn retry_after_ms(&self) -> Option<u64> {
        match self {
            AppError::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Shape(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("request failed: {}", self);

        let body = ErrorResponse {
            error: self.summary().to_string(),
            details: self.to_string(),
            retry_after: self.retry_after_ms(),
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(retry_after_ms) = self.retry_after_ms() {
            // Retry-After is whole seconds, rounded up.
            builder.insert_header(("Retry-After", retry_after_ms.div_ceil(1000).to_string()));
        }
        builder.json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
