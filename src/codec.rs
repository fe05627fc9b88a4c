//! JSON codec shared by all gateway operations.
//!
//! One generic encode and one generic decode cover every payload and result
//! shape; each facade method narrows `decode` to its concrete entity type.
//! The two directions map serde failures onto different error variants so
//! callers can tell "my payload was bad" from "the gateway sent malformed
//! success data".

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

/// Serialize a request payload to canonical JSON bytes.
///
/// Failure is surfaced as [`ClientError::Payload`], before any network call.
pub fn encode<T: Serialize>(value: &T) -> Result<Bytes, ClientError> {
    let json = serde_json::to_vec(value).map_err(|e| ClientError::Payload(e.to_string()))?;
    Ok(Bytes::from(json))
}

/// Deserialize a response body into the caller-specified entity type.
///
/// Failure is surfaced as [`ClientError::Decode`]; a shape mismatch is never
/// coerced to a defaulted value.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
