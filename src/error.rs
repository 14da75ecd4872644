//! Error types for todos
//!
//! The collection reports exactly two canonical failures, `Invalid Input`
//! and `Invalid id`. The remaining variants belong to the outer layers
//! (configuration, seed files, command line).
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad payload, unknown id, bad config or args)
//! - 4: Operation failed (I/O, parse)

use serde::Serialize;
use thiserror::Error;

/// Exit codes for the todos CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

pub const INVALID_INPUT: &str = "Invalid Input";
pub const INVALID_ID: &str = "Invalid id";

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    // Collection errors (exit code 2)
    #[error("{}", INVALID_INPUT)]
    InvalidInput,

    #[error("{}", INVALID_ID)]
    InvalidId,

    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput
            | Error::InvalidId
            | Error::InvalidConfig(_)
            | Error::InvalidArgument(_) => exit_codes::USER_ERROR,

            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) | Error::TomlSerialize(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error result value handed to renderers: `{"msg": "Invalid id"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMsg {
    pub msg: String,
}

impl From<&Error> for ErrorMsg {
    fn from(err: &Error) -> Self {
        ErrorMsg {
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_messages() {
        assert_eq!(Error::InvalidInput.to_string(), INVALID_INPUT);
        assert_eq!(Error::InvalidId.to_string(), INVALID_ID);
    }

    #[test]
    fn error_msg_serializes_as_msg_field() {
        let body = ErrorMsg::from(&Error::InvalidId);
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"msg":"Invalid id"}"#);
    }
}
