//! Error types for the example API.
//!
//! The greeting operations themselves never fail. Everything here describes
//! what can go wrong around them: argument decoding, dispatch and response
//! encoding. Each variant maps to a Lambda `Diagnostic` error type.

use lambda_runtime::Diagnostic;
use std::fmt;

/// Custom error type for the application.
#[derive(Debug)]
pub enum AppError {
    /// Arguments could not be decoded into the operation's request type
    InvalidInput(String),
    /// The operation response could not be encoded
    Serialization(String),
    /// No operation is registered under the requested name
    UnknownOperation(String),
}

impl AppError {
    /// Error type reported to the gateway in the `Diagnostic`.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::Serialization(_) => "SerializationError",
            Self::UnknownOperation(_) => "UnknownOperation",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Failed to parse request: {msg}"),
            Self::Serialization(msg) => write!(f, "Failed to serialize response: {msg}"),
            Self::UnknownOperation(name) => write!(f, "Unknown operation: {name}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for Diagnostic {
    fn from(error: AppError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
