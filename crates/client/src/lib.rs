//! showlog_client - CLI client for the remote show-log store.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ShowLogStore;
pub use error::{Result, StoreError};
