use std::time::Duration;

use bytes::Bytes;
use http::Method;
use tracing::debug;

use crate::error::ClientError;
use crate::response::Response;

/// HTTP transport that turns (verb, path, optional JSON payload) into an
/// authenticated round trip against the configured gateway.
///
/// Every request carries `Accept: application/json`, HTTP Basic credentials,
/// and an `X-Requested-By` header with the username — gateways enforce the
/// latter on state-changing calls. One pooled `reqwest::Client` is shared
/// across calls.
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
    username: String,
    password: String,
}

impl HttpTransport {
    /// Create a new transport for the given gateway.
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Execute one round trip and return the raw outcome regardless of
    /// status; status interpretation belongs to the facade.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Bytes>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, %url, "livy gateway request");

        let mut req_builder = self
            .http_client
            .request(method, &url)
            .header(http::header::ACCEPT, "application/json")
            .basic_auth(&self.username, Some(&self.password))
            .header("X-Requested-By", &self.username);

        if let Some(body) = payload {
            req_builder = req_builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let resp = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(e.to_string())
            } else if e.is_connect() {
                ClientError::Connection(e.to_string())
            } else {
                ClientError::Transport(e)
            }
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(ClientError::Transport)?;
        debug!(%url, status = %status, body_len = body.len(), "livy gateway response");

        Ok(Response::new(status, headers, body))
    }
}
