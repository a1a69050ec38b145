//! Show-log store operations.
//!
//! The store exposes an RPC-style surface: GET for reads, POST for every
//! mutation, with the delete target id passed as a query parameter.

use showlog_core::showlog::{CreateShowLogRequest, RawShowLog, UpdateShowLogRequest};

use super::envelope::{decode_data, decode_list};
use super::ShowLogStore;
use crate::error::Result;

impl ShowLogStore {
    /// List all show-log records.
    pub async fn list(&self) -> Result<Vec<RawShowLog>> {
        let response = self
            .http()
            .get(self.url("/natsumi/getShowLogs"))
            .send()
            .await?;
        let body = self.read_body(response).await?;
        decode_list(body)
    }

    /// Fetch the earliest show-log records on file.
    pub async fn earliest(&self) -> Result<Vec<RawShowLog>> {
        let response = self
            .http()
            .get(self.url("/natsumi/getEarliestShowLog"))
            .send()
            .await?;
        let body = self.read_body(response).await?;
        decode_list(body)
    }

    /// Create a new show-log record.
    ///
    /// Validates client-side first; an invalid payload never reaches the
    /// network.
    pub async fn insert(&self, req: &CreateShowLogRequest) -> Result<RawShowLog> {
        req.validate()?;
        let response = self
            .http()
            .post(self.url("/natsumi/insertShowLog"))
            .json(req)
            .send()
            .await?;
        let body = self.read_body(response).await?;
        decode_data(body)
    }

    /// Update an existing show-log record.
    pub async fn update(&self, req: &UpdateShowLogRequest) -> Result<RawShowLog> {
        req.validate()?;
        let response = self
            .http()
            .post(self.url("/natsumi/updateShowLog"))
            .json(req)
            .send()
            .await?;
        let body = self.read_body(response).await?;
        decode_data(body)
    }

    /// Delete a show-log record by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .http()
            .post(self.url("/natsumi/deleteShowLog"))
            .query(&[("id", id)])
            .send()
            .await?;
        let body = self.read_body(response).await?;
        // The store echoes the deleted record under `data`; the shape is not
        // interesting beyond confirming the envelope.
        decode_data::<serde_json::Value>(body)?;
        Ok(())
    }
}
