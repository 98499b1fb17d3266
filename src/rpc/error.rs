use thiserror::Error;

use super::ErrorResponse;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("failed to prepare payload: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
    /// Non-2xx status; the body is kept for diagnostics.
    #[error("get status code: {status}")]
    Status { status: u16, body: Vec<u8> },
    #[error("rpc error {}: {}", .0.code, .0.message)]
    Rpc(ErrorResponse),
    #[error("failed to json decode body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: Vec<u8>,
    },
    #[error("response has neither result nor error")]
    MissingResult,
    #[error("invalid account data: {0}")]
    AccountData(String),
}

impl RpcError {
    /// Raw response body, when the node sent one.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            RpcError::Status { body, .. } | RpcError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RpcError::Status { status, .. } => Some(*status),
            RpcError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
