//! HTTP client for the remote show-log store.

mod envelope;
mod showlogs;

pub use envelope::{decode_data, decode_list};

use crate::error::{Result, StoreError};

/// HTTP client for the show-log store API.
#[derive(Debug, Clone)]
pub struct ShowLogStore {
    client: reqwest::Client,
    base_url: String,
}

impl ShowLogStore {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Accessor for the underlying reqwest client.
    fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Check the HTTP status and return the response body.
    ///
    /// Non-2xx responses become [`StoreError::ServerError`] with the status
    /// code embedded in the message.
    async fn read_body(&self, response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(StoreError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(StoreError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
