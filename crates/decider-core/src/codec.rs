//! Persistence codec.
//!
//! Collections are encoded as JSON arrays. JSON is self-describing enough to
//! make decode failure detectable, and round-trips `Uuid` and
//! `DateTime<Utc>` faithfully through their serde representations.
//!
//! The codec reports failures; the store decides what they mean (a failed
//! decode resolves to an empty collection, a failed encode leaves the
//! previously persisted bytes untouched).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Encodes a collection to JSON bytes.
pub fn encode<T: Serialize>(collection: &[T]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(collection)?)
}

/// Decodes a collection from JSON bytes.
///
/// Malformed input is an error so the caller can distinguish it from a
/// legitimately empty collection.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    Ok(serde_json::from_slice(bytes)?)
}
