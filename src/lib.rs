//! Typed async client for a Livy-style Spark job gateway.
//!
//! The gateway owns interactive sessions, batch jobs, and the statements
//! executed inside sessions; this crate models its REST wire contract and
//! exposes one method per endpoint:
//!
//! - open / inspect / list / close interactive sessions
//! - submit / inspect / list / close batch jobs
//! - post statements into a session and poll their results
//! - fetch session log windows
//!
//! The client holds no authoritative state: every entity it returns is a
//! snapshot, the gateway is the single source of truth, and lifecycle
//! progress is observed by polling. Requests carry HTTP Basic credentials
//! plus an `X-Requested-By` identity header; all bodies are JSON.
//!
//! # Examples
//!
//! ## Interactive session
//!
//! ```no_run
//! use livy_client::{LivyClient, LivyClientConfig, SessionKind};
//!
//! # async fn example() -> Result<(), livy_client::ClientError> {
//! let config = LivyClientConfig::new("http://gateway:8998", "alice", "secret")
//!     .with_kind(SessionKind::Spark);
//! let client = LivyClient::from_config(config)?;
//!
//! let session = client.open_session().await?;
//! let statement = client.post_statement(&session.id, "1+1").await?;
//! let result = client.statement_result(&session.id, &statement.id).await?;
//! println!("state: {}", result.state);
//!
//! client.close_session(&session.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch job
//!
//! ```no_run
//! use livy_client::{LivyClient, LivyClientConfig};
//!
//! # async fn example() -> Result<(), livy_client::ClientError> {
//! let config = LivyClientConfig::new("http://gateway:8998", "alice", "secret");
//! let client = LivyClient::from_config(config)?;
//!
//! let batch = client
//!     .open_batch("hdfs:///jobs/report.jar", "com.example.Report")
//!     .await?;
//! let batch = client.batch_state(&batch.id).await?;
//! println!("batch {} is {}", batch.id, batch.state);
//! # Ok(())
//! # }
//! ```

mod client;
mod codec;
mod error;
mod response;
mod transport;
mod types;

// Re-export public API
pub use client::{LivyClient, LivyClientConfig};
pub use error::ClientError;
pub use response::Response;
pub use transport::HttpTransport;
pub use types::{
    Batch, BatchesResponse, CreateBatchRequest, CreateSessionRequest, Log, PostStatementRequest,
    Session, SessionKind, SessionsResponse, Statement, Statements,
};

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
