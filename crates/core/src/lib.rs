//! showlog_core - Core transformation logic for the showlog project.
//!
//! Converts raw show-log records from the remote store into calendar-ready
//! view entries. Pure functions only; all I/O lives in `showlog_client`.

pub mod serde;
pub mod showlog;
