use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkway_shortener::ShortenerError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Seconds a client should wait before retrying while the registry loads.
const RETRY_AFTER_SECS: &str = "1";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error("short code not found: {0}")]
    LinkNotFound(String),
    #[error("link registry is still loading")]
    RegistryLoading,
    #[error("destination cannot be used as a redirect location: {0}")]
    InvalidDestination(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Shortener(ShortenerError::AliasConflict(_))
            | AppError::Shortener(ShortenerError::ReservedAlias(_)) => StatusCode::CONFLICT,
            AppError::Shortener(ShortenerError::InvalidUrl(_))
            | AppError::Shortener(ShortenerError::InvalidShortCode(_)) => StatusCode::BAD_REQUEST,
            AppError::Shortener(ShortenerError::GeneratorExhausted { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Shortener(ShortenerError::Registry(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::LinkNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RegistryLoading => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidDestination(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let mut response = (status, Json(json!({ "error": self.to_string() }))).into_response();
        if matches!(self, AppError::RegistryLoading) {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SECS));
        }
        response
    }
}
