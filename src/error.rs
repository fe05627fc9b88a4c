use http::StatusCode;
use thiserror::Error;

/// Error types for Livy client operations.
///
/// Each variant corresponds to one failure channel: the request payload
/// could not be produced, the exchange itself failed, the gateway answered
/// with a non-2xx status, or a 2xx body did not match the expected shape.
/// Nothing is retried or recovered internally; every failure propagates to
/// the caller of the operation that triggered it.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client build error: {0}")]
    Build(String),

    /// The outgoing payload could not be serialized to JSON. Raised before
    /// any network traffic.
    #[error("Request payload error: {0}")]
    Payload(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    /// The gateway answered with a non-2xx status. Carries the raw body
    /// text so gateway-specific diagnostics stay inspectable.
    #[error("Gateway error: status={status} reason={reason} message: {body}")]
    Gateway {
        status: StatusCode,
        reason: String,
        body: String,
    },

    /// A 2xx response whose body did not decode into the expected entity.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Build a gateway failure from a status code and raw body text,
    /// deriving the reason phrase from the status.
    pub fn gateway(status: StatusCode, body: impl Into<String>) -> Self {
        ClientError::Gateway {
            status,
            reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            body: body.into(),
        }
    }

    /// Status code of a gateway-reported failure, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Gateway { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_carries_status_and_body() {
        let err = ClientError::gateway(StatusCode::BAD_GATEWAY, "upstream down");
        match &err {
            ClientError::Gateway {
                status,
                reason,
                body,
            } => {
                assert_eq!(*status, StatusCode::BAD_GATEWAY);
                assert_eq!(reason, "Bad Gateway");
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_non_gateway_error_has_no_status() {
        let err = ClientError::Timeout("deadline elapsed".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_includes_diagnostics() {
        let err = ClientError::gateway(StatusCode::NOT_FOUND, "no such session");
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
        assert!(msg.contains("no such session"));
    }
}
