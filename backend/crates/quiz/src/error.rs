//! Quiz Error Types
//!
//! This module provides quiz-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::TransportFailure;
use platform::silhouette::ImageError;
use thiserror::Error;
use tracing::Level;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
///
/// Every failure of the catalog client, the image transform and the use
/// cases is one of these. Nothing is retried; callers branch on the
/// variant.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Bad input to a client method (non-positive id, bad max id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local sliding window full, or the catalog answered 429
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Request timed out")]
    UpstreamTimeout,

    #[error("Failed to connect to PokeAPI")]
    UpstreamUnreachable,

    /// Catalog answered with a 4xx/5xx other than 429
    #[error("HTTP error: {status}")]
    UpstreamHttp { status: u16 },

    #[error("Unexpected error: {0}")]
    UpstreamUnexpected(String),

    #[error("Image processing error: {0}")]
    ImageDecode(#[from] ImageError),

    /// Requested id does not resolve in the catalog
    #[error("Pokemon not found: {0}")]
    NotFound(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    ///
    /// Only not-found and rate limiting are surfaced distinctly; every
    /// other failure is a generic server error at the HTTP boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::NotFound(_) => StatusCode::NOT_FOUND,
            QuizError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            QuizError::Validation(_)
            | QuizError::UpstreamTimeout
            | QuizError::UpstreamUnreachable
            | QuizError::UpstreamHttp { .. }
            | QuizError::UpstreamUnexpected(_)
            | QuizError::ImageDecode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::NotFound(_) => ErrorKind::NotFound,
            QuizError::RateLimitExceeded(_) => ErrorKind::TooManyRequests,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// Level at which the HTTP boundary logs this error
    ///
    /// Catalog and artwork failures and rate-limit trips are logged with
    /// endpoint details where they occur; here they only go to debug.
    pub fn log_level(&self) -> Level {
        match self {
            QuizError::Validation(_) => Level::WARN,
            QuizError::ImageDecode(_) => Level::ERROR,
            QuizError::NotFound(_)
            | QuizError::RateLimitExceeded(_)
            | QuizError::UpstreamTimeout
            | QuizError::UpstreamUnreachable
            | QuizError::UpstreamHttp { .. }
            | QuizError::UpstreamUnexpected(_) => Level::DEBUG,
        }
    }

    fn log(&self) {
        match self.log_level() {
            Level::ERROR => tracing::error!(error = %self, "Quiz request failed"),
            Level::WARN => tracing::warn!(error = %self, "Quiz request rejected"),
            _ => tracing::debug!(error = %self, "Quiz request failed"),
        }
    }
}

impl From<TransportFailure> for QuizError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout => QuizError::UpstreamTimeout,
            TransportFailure::Connect => QuizError::UpstreamUnreachable,
            TransportFailure::Status(429) => {
                QuizError::RateLimitExceeded("PokeAPI rate limit exceeded".to_string())
            }
            TransportFailure::Status(status) => QuizError::UpstreamHttp { status },
            TransportFailure::Other(msg) => QuizError::UpstreamUnexpected(msg),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        let app_err = AppError::new(err.kind(), err.to_string());
        let app_err = match err {
            QuizError::RateLimitExceeded(_) => app_err.with_action("Please retry in a moment"),
            _ => app_err,
        };
        app_err.with_source(err)
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
