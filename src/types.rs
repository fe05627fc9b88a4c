use serde::{Deserialize, Deserializer, Serialize};

/// Entity ids are opaque handles held as strings, but the gateway emits them
/// as JSON integers. Accept either form and stringify numbers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(i64),
        Text(String),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(n) => n.to_string(),
        IdRepr::Text(s) => s,
    })
}

/// Interpreter kind for an interactive session.
///
/// Fixed at session creation; the gateway rejects unknown kinds, so this is
/// a closed enum rather than a pass-through string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Spark,
    PySpark,
    #[default]
    PySpark3,
    SparkR,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionKind::Spark => "spark",
            SessionKind::PySpark => "pyspark",
            SessionKind::PySpark3 => "pyspark3",
            SessionKind::SparkR => "sparkr",
        };
        f.write_str(s)
    }
}

/// An interactive shell running on the cluster.
///
/// All entities here are value-like snapshots: the gateway is the single
/// source of truth and repeated calls return fresh copies. `state` is an
/// open set of gateway-defined tags (`starting`, `idle`, `busy`,
/// `shutting_down`, `dead`, `killed`, `error`, ...) passed through verbatim;
/// polling cadence and terminal-state detection are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub kind: Option<SessionKind>,
    pub state: String,
    #[serde(rename = "appId", default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub log: Vec<String>,
}

/// A non-interactive job submission run to completion.
///
/// `file` and `class_name` are the submission parameters; the gateway does
/// not echo them on every endpoint, so they are optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(rename = "className", default)]
    pub class_name: Option<String>,
    pub state: String,
    #[serde(rename = "appId", default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub log: Vec<String>,
}

/// One unit of submitted code executing inside a session.
///
/// `state` moves through `waiting` → `running` → `available` (or `error` /
/// `cancelled`). `output` is the raw result payload; this client does not
/// interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub code: String,
    pub state: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
}

/// A window into a session's log stream. `from` and `total` describe the
/// window's position in a larger, possibly still-growing log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub from: u64,
    pub total: u64,
    pub log: Vec<String>,
}

/// One page of sessions. Order is the gateway's return order and is
/// preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub from: u64,
    pub total: u64,
    pub sessions: Vec<Session>,
}

/// One page of batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchesResponse {
    pub from: u64,
    pub total: u64,
    pub batches: Vec<Batch>,
}

/// All statements of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statements {
    #[serde(default)]
    pub total_statements: u64,
    pub statements: Vec<Statement>,
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub kind: SessionKind,
}

/// Body of `POST /batches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBatchRequest {
    pub file: String,
    #[serde(rename = "className")]
    pub class_name: String,
}

/// Body of `POST /sessions/{id}/statements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStatementRequest {
    pub code: String,
}
