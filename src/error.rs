use thiserror::Error;

use crate::protocol::ServerError;

/// Crate-wide error taxonomy.
///
/// Each variant maps onto the failure categories a source-level debug
/// adapter has to distinguish: malformed wire traffic, a request that is
/// well-formed but arrives in the wrong session state, a client mistake
/// (bad breakpoint expression, unknown thread id), a fault inside the
/// debuggee being observed, a fault inside the adapter itself, and a
/// transport-level failure (socket closed, pipe broken).
///
/// Only [`DapperError::AdapterFault`] is fatal to the session; every other
/// variant is reported back to the client as a failed response and the
/// session continues.
#[derive(Debug, Error)]
pub enum DapperError {
    #[error("protocol error: {0}")]
    Protocol(#[from] ServerError),

    #[error("request invalid in current state: {0}")]
    State(String),

    #[error("invalid request: {0}")]
    User(String),

    #[error("debuggee fault: {0}")]
    Debuggee(String),

    #[error("internal adapter fault: {0}")]
    Adapter(String),

    #[error("transport fault: {0}")]
    Transport(String),
}

impl DapperError {
    /// Whether this error should terminate the session rather than simply
    /// be reported back to the client as a failed response.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DapperError::Adapter(_) | DapperError::Transport(_))
    }

    pub fn state(msg: impl Into<String>) -> Self {
        DapperError::State(msg.into())
    }

    pub fn user(msg: impl Into<String>) -> Self {
        DapperError::User(msg.into())
    }

    pub fn debuggee(msg: impl Into<String>) -> Self {
        DapperError::Debuggee(msg.into())
    }

    pub fn adapter(msg: impl Into<String>) -> Self {
        DapperError::Adapter(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        DapperError::Transport(msg.into())
    }
}

pub type DapperResult<T> = Result<T, DapperError>;
