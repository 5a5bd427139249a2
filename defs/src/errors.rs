use serde::Serialize;
use thiserror::Error;

/// Failure raised by an orchestrator API call, before normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFault {
    /// Local execution fault (connection refused, DNS failure, ...) raised
    /// on this side of the wire.
    #[error("{message}")]
    Runtime {
        message: String,
        code: Option<String>,
        status: Option<u16>,
    },

    /// Error response returned by the orchestrator; `body` is the
    /// stringified payload as received.
    #[error("orchestrator returned an error response")]
    Response {
        status: Option<u16>,
        body: Option<String>,
    },
}

/// The single error shape surfaced by deploy/undeploy operations.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[error("{message}")]
pub struct NormalizedError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl NormalizedError {
    pub fn new(message: impl Into<String>) -> Self {
        NormalizedError {
            message: message.into(),
            code: None,
            status: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        NormalizedError {
            message: message.into(),
            code: Some(code.into()),
            status: None,
        }
    }
}
