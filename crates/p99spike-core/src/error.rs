//! Shared error type across p99spike crates.

use thiserror::Error;

/// Stable error codes, reported alongside startup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Config file is malformed or fails validation.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, P99Error>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum P99Error {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl P99Error {
    pub fn client_code(&self) -> ClientCode {
        match self {
            P99Error::BadConfig(_) => ClientCode::BadConfig,
            P99Error::UnsupportedVersion(_) => ClientCode::UnsupportedVersion,
            P99Error::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<std::io::Error> for P99Error {
    fn from(e: std::io::Error) -> Self {
        P99Error::Internal(e.to_string())
    }
}
