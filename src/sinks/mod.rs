//! Sink abstractions for FaultForge
//!
//! This module defines the trait seams through which incident records leave
//! the crate: a record sink for persistence and a notify sink for outbound
//! announcements. Concrete backends (a database, a mail transport) are
//! wired in by the host at startup; no capability is probed for at runtime.

mod noop;

pub use noop::{NoopNotifySink, NoopRecordSink};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::IncidentRecord;

/// Result type for record sink operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for notify sink operations
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Record sink error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend connection error
    #[error("Storage connection error: {0}")]
    Connection(String),

    /// Write/query execution error
    #[error("Storage write error: {0}")]
    Write(String),

    /// Record could not be serialized for the backend
    #[error("Storage serialization error: {0}")]
    Serialization(String),

    /// Operation timed out
    #[error("Storage operation timed out: {0}")]
    Timeout(String),
}

impl StorageError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Connection(_) | StorageError::Timeout(_))
    }
}

/// Notify sink error types
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Transport connection error
    #[error("Delivery connection error: {0}")]
    Connection(String),

    /// The transport rejected the message
    #[error("Delivery rejected: {0}")]
    Rejected(String),

    /// Operation timed out
    #[error("Delivery timed out: {0}")]
    Timeout(String),
}

impl DeliveryError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DeliveryError::Connection(_) | DeliveryError::Timeout(_)
        )
    }
}

/// Persistence sink for incident records
///
/// Invoked by the reporter only when the policy decided the incident should
/// be recorded.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist one incident record
    async fn save(&self, record: &IncidentRecord) -> StorageResult<()>;

    /// Health check for the sink
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// Notification sink for incident announcements
///
/// `body` is the rendered presentation of an incident record, produced by
/// the configured [`crate::render::NotificationRenderer`].
#[async_trait]
pub trait NotifySink: Send + Sync {
    /// Deliver one notification
    async fn send(&self, subject: &str, body: &str) -> DeliveryResult<()>;
}
