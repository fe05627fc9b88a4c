use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ClientError;

/// Raw outcome of one gateway round trip: status, headers, and the fully
/// buffered body. Consumption (decode, text, discard) is the caller's choice.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Create a response from its components.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response and decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        codec::decode(&self.body)
    }

    /// Consume the response and return the body as text. Invalid UTF-8 is
    /// replaced rather than rejected; bodies here are diagnostics, not data.
    pub fn text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Fold a non-2xx response into the unified gateway failure, carrying
    /// status, reason phrase, and raw body text.
    pub fn into_gateway_error(self) -> ClientError {
        let status = self.status;
        ClientError::gateway(status, self.text())
    }
}
