use thiserror::Error;

/// Errors that can occur when validating show-log payloads before submit.
///
/// These are caught client-side; a failing payload never reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowLogError {
    #[error("Show title cannot be empty")]
    EmptyTitle,
    #[error("Show location cannot be empty")]
    EmptyLocation,
    #[error("Show title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End time must be after or equal to start time")]
    InvalidTimeRange,
}
