//! Error types for rrdc
//!
//! Provides a unified error type for all client operations.

use std::io;

use thiserror::Error;

/// Result type alias using RrdError
pub type Result<T> = std::result::Result<T, RrdError>;

/// Unified error type for rrdc operations
#[derive(Debug, Error)]
pub enum RrdError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("failed to dial {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write: {0}")]
    Write(#[source] io::Error),

    #[error("failed to write ({write_error}) and failed to reestablish: {source}")]
    Reconnect {
        write_error: io::Error,
        #[source]
        source: Box<RrdError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The daemon answered with a negative status line.
    #[error("rrdcached error {code}: {message}")]
    Protocol { code: i64, message: String },

    #[error("malformed response: '{line}'")]
    MalformedResponse { line: String },

    #[error("short response: got {received} of {expected} lines: {source}")]
    ShortResponse {
        expected: usize,
        received: usize,
        #[source]
        source: io::Error,
    },

    #[error("connection closed before a status line was read")]
    ConnectionClosed,

    #[error("unexpected end of stream: got {received} of {expected} lines")]
    UnexpectedEof { expected: usize, received: usize },

    #[error("invalid response: {reason} (line '{line}')")]
    InvalidResponse { reason: String, line: String },

    #[error("empty command line")]
    EmptyCommand,

    // -------------------------------------------------------------------------
    // Context
    // -------------------------------------------------------------------------
    #[error("{context}: {source}")]
    Command {
        context: String,
        #[source]
        source: Box<RrdError>,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RrdError {
    /// Wrap this error with the name of the operation that produced it.
    pub fn context(self, context: impl Into<String>) -> Self {
        RrdError::Command {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Strip any [`RrdError::Command`] wrappers.
    pub fn root(&self) -> &RrdError {
        match self {
            RrdError::Command { source, .. } => source.root(),
            other => other,
        }
    }

    /// True if the daemon itself reported this error.
    pub fn is_protocol(&self) -> bool {
        matches!(self.root(), RrdError::Protocol { .. })
    }

    /// The daemon's negative status code, if this is a protocol error.
    pub fn protocol_code(&self) -> Option<i64> {
        match self.root() {
            RrdError::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }
}
