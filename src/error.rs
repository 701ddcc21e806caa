//! Error handling module for FaultForge
//!
//! Defines the unified error type for hosts that fold this crate's
//! failures into their own error chain. The formatter and policy never
//! produce these; they surface from the configuration layer and from the
//! record/notify sinks.

use thiserror::Error;

use crate::sinks::{DeliveryError, StorageError};

/// Result type alias for FaultForge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for FaultForge
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record sink failures
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Notify sink failures
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Storage(e) => e.is_retryable(),
            Error::Delivery(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Convert from anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err.to_string())
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
