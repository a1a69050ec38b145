//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur talking to the show-log store.
///
/// Every failure mode at the store boundary lands here; nothing panics
/// across it, so callers always receive a tagged result they can surface as
/// a single user-visible message.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("API返回数据格式错误")]
    BadEnvelope,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] showlog_core::showlog::ShowLogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
