//! Response envelope normalization.
//!
//! The list endpoints answer with either a bare array of records or a
//! `{success, data}` wrapper, depending on deployment. Both shapes decode
//! through one tagged step here; call sites never sniff shapes themselves.
//! Anything that is neither shape is the fixed bad-format error.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StoreError};

/// Shapes the list endpoints may answer with.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        success: bool,
        // Option already tolerates a missing field; a `default` attribute
        // here would drag a `T: Default` bound into the derive.
        data: Option<Vec<T>>,
    },
}

/// Wrapper shape the mutation endpoints answer with.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Decodes a list response, accepting both envelope shapes.
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>> {
    match serde_json::from_value(body) {
        Ok(ListEnvelope::Bare(items)) => Ok(items),
        Ok(ListEnvelope::Wrapped {
            success: true,
            data: Some(items),
        }) => Ok(items),
        _ => Err(StoreError::BadEnvelope),
    }
}

/// Decodes a `{data}` mutation response.
pub fn decode_data<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|_| StoreError::BadEnvelope)
}
