use std::time::Duration;

use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ClientError;
use crate::transport::HttpTransport;
use crate::types::{
    Batch, BatchesResponse, CreateBatchRequest, CreateSessionRequest, Log, PostStatementRequest,
    Session, SessionKind, SessionsResponse, Statement, Statements,
};

/// Configuration for [`LivyClient`].
#[derive(Debug, Clone)]
pub struct LivyClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Interpreter kind used by [`LivyClient::open_session`].
    pub kind: SessionKind,
    pub timeout: Duration,
}

impl LivyClientConfig {
    /// Create a configuration with the default session kind (`pyspark3`)
    /// and a 30 second timeout.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            kind: SessionKind::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the session kind used when opening sessions.
    pub fn with_kind(mut self, kind: SessionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Typed facade over the Livy gateway's REST endpoints.
///
/// One async method per endpoint; each call is one authenticated round trip
/// with no retries, caching, or shared mutable state, so a single client can
/// be used concurrently. Lifecycle state lives on the gateway — callers poll
/// `session_state` / `statement_result` and decide terminal states
/// themselves.
pub struct LivyClient {
    transport: HttpTransport,
    kind: SessionKind,
}

impl LivyClient {
    /// Create a client from configuration.
    pub fn from_config(config: LivyClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(
            &config.base_url,
            &config.username,
            &config.password,
            config.timeout,
        )?;
        Ok(Self {
            transport,
            kind: config.kind,
        })
    }

    /// Open a new interactive shell of the configured kind.
    pub async fn open_session(&self) -> Result<Session, ClientError> {
        let payload = codec::encode(&CreateSessionRequest { kind: self.kind })?;
        self.send(Method::POST, "/sessions", Some(payload)).await
    }

    /// Submit a batch job: a packaged artifact plus its entry point.
    pub async fn open_batch(&self, file: &str, class_name: &str) -> Result<Batch, ClientError> {
        let payload = codec::encode(&CreateBatchRequest {
            file: file.to_string(),
            class_name: class_name.to_string(),
        })?;
        self.send(Method::POST, "/batches", Some(payload)).await
    }

    /// Fetch the current snapshot of a session, including its state.
    pub async fn session_state(&self, session_id: &str) -> Result<Session, ClientError> {
        self.send(Method::GET, &format!("/sessions/{session_id}"), None)
            .await
    }

    /// List sessions, in gateway order.
    pub async fn sessions(&self) -> Result<SessionsResponse, ClientError> {
        self.send(Method::GET, "/sessions", None).await
    }

    /// Kill a session. The response body is discarded; closing an
    /// already-closed session is indistinguishable from success here.
    pub async fn close_session(&self, session_id: &str) -> Result<(), ClientError> {
        self.send_discard(Method::DELETE, &format!("/sessions/{session_id}"))
            .await
    }

    /// Fetch the current snapshot of a batch, including its state.
    pub async fn batch_state(&self, batch_id: &str) -> Result<Batch, ClientError> {
        self.send(Method::GET, &format!("/batches/{batch_id}"), None)
            .await
    }

    /// List batches, in gateway order.
    pub async fn batches(&self) -> Result<BatchesResponse, ClientError> {
        self.send(Method::GET, "/batches", None).await
    }

    /// Kill a batch job.
    pub async fn close_batch(&self, batch_id: &str) -> Result<(), ClientError> {
        self.send_discard(Method::DELETE, &format!("/batches/{batch_id}"))
            .await
    }

    /// Run a statement inside a session. The returned statement starts in
    /// its initial state; poll [`LivyClient::statement_result`] for the
    /// outcome.
    pub async fn post_statement(
        &self,
        session_id: &str,
        code: &str,
    ) -> Result<Statement, ClientError> {
        let payload = codec::encode(&PostStatementRequest {
            code: code.to_string(),
        })?;
        self.send(
            Method::POST,
            &format!("/sessions/{session_id}/statements"),
            Some(payload),
        )
        .await
    }

    /// List all statements of a session.
    pub async fn statements(&self, session_id: &str) -> Result<Statements, ClientError> {
        self.send(
            Method::GET,
            &format!("/sessions/{session_id}/statements"),
            None,
        )
        .await
    }

    /// Fetch one statement of a session.
    pub async fn statement_result(
        &self,
        session_id: &str,
        statement_id: &str,
    ) -> Result<Statement, ClientError> {
        self.send(
            Method::GET,
            &format!("/sessions/{session_id}/statements/{statement_id}"),
            None,
        )
        .await
    }

    /// Fetch a window of a session's log stream.
    pub async fn session_log(&self, session_id: &str) -> Result<Log, ClientError> {
        self.send(Method::GET, &format!("/sessions/{session_id}/logs"), None)
            .await
    }

    /// One transport round trip narrowed to the operation's result type.
    /// Any 2xx body is decoded as `T`; any other status becomes a gateway
    /// failure carrying status, reason, and body text.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Bytes>,
    ) -> Result<T, ClientError> {
        let response = self.transport.execute(method, path, payload).await?;
        if !response.status().is_success() {
            return Err(response.into_gateway_error());
        }
        response.json()
    }

    /// Round trip for endpoints with no meaningful response body (DELETE).
    /// The body is never decoded on success.
    async fn send_discard(&self, method: Method, path: &str) -> Result<(), ClientError> {
        let response = self.transport.execute(method, path, None).await?;
        if !response.status().is_success() {
            return Err(response.into_gateway_error());
        }
        Ok(())
    }
}
