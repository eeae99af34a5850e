//! Encoding and decoding of the remote document body.
//!
//! The body is a JSON array of items. Decoding is strict: one
//! malformed record (bad date, unit outside the vocabulary) rejects
//! the whole payload. Silent per-record coercion could corrupt the
//! inventory, so the batch either decodes completely or not at all.

use freezer_model::Item;

use crate::error::{Result, SyncError};

/// Decodes the remote document body into an item list.
pub fn decode_items(body: &str) -> Result<Vec<Item>> {
    serde_json::from_str(body).map_err(|err| SyncError::Decode(err.to_string()))
}

/// Encodes an item list as the remote document body.
pub fn encode_items(items: &[Item]) -> Result<String> {
    serde_json::to_string(items).map_err(|err| SyncError::Encode(err.to_string()))
}
