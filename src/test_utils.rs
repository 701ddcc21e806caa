//! Test utilities for FaultForge
//!
//! This module provides mock sink implementations, a fixed clock, and
//! fixture builders for testing.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use crate::clock::Clock;
use crate::models::{
    CallKind, ErrorEvent, IncidentRecord, RequestContext, SourceLocation, StackFrame, UserContext,
};
use crate::sinks::{
    DeliveryError, DeliveryResult, NotifySink, RecordSink, StorageError, StorageResult,
};

/// Mock implementation of RecordSink for testing
#[derive(Debug, Clone, Default)]
pub struct MockRecordSink {
    records: Arc<Mutex<Vec<IncidentRecord>>>,
    fail_next: Arc<Mutex<bool>>,
    error_message: Arc<Mutex<Option<String>>>,
}

impl MockRecordSink {
    /// Create a new mock record sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail on the next operation
    pub fn fail_next_operation(&self, error_message: &str) {
        *self.fail_next.lock().unwrap() = true;
        *self.error_message.lock().unwrap() = Some(error_message.to_string());
    }

    /// Get all stored records
    pub fn get_all_records(&self) -> Vec<IncidentRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Clear all records
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    fn check_failure(&self) -> StorageResult<()> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            let msg = self
                .error_message
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| "Mock failure".to_string());
            return Err(StorageError::Write(msg));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordSink for MockRecordSink {
    async fn save(&self, record: &IncidentRecord) -> StorageResult<()> {
        self.check_failure()?;
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.check_failure()
    }
}

/// Mock implementation of NotifySink for testing
#[derive(Debug, Clone, Default)]
pub struct MockNotifySink {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockNotifySink {
    /// Create a new mock notify sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail on the next send
    pub fn fail_next_operation(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// Get all sent (subject, body) pairs
    pub fn get_all_sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifySink for MockNotifySink {
    async fn send(&self, subject: &str, body: &str) -> DeliveryResult<()> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(DeliveryError::Rejected("Mock failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// A clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed clock at a round, readable instant
    pub fn default_instant() -> Self {
        FixedClock(Utc.with_ymd_and_hms(2026, 8, 5, 9, 5, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Create a test ErrorEvent with a one-frame trace
pub fn create_test_event() -> ErrorEvent {
    ErrorEvent::new(
        "RuntimeException",
        "Something went wrong",
        SourceLocation::new("/app/Handler.php", 10),
    )
    .with_frames(vec![create_test_frame()])
}

/// Create a test ErrorEvent with the specified kind
pub fn create_test_event_with_kind(kind: &str) -> ErrorEvent {
    let mut event = create_test_event();
    event.kind = kind.to_string();
    event
}

/// Create a test instance-call StackFrame
pub fn create_test_frame() -> StackFrame {
    StackFrame {
        function: Some("run".to_string()),
        owner: Some("Job".to_string()),
        call_kind: CallKind::Instance,
        location: Some(SourceLocation::new("/app/Job.php", 42)),
    }
}

/// Create a test RequestContext without input parameters
pub fn create_test_request() -> RequestContext {
    RequestContext::new("https://example.com/checkout", "POST", "203.0.113.9")
}

/// Create a test authenticated UserContext
pub fn create_test_user() -> UserContext {
    UserContext::authenticated("7", "jdoe", "Jane", "Doe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_record_sink() {
        let sink = MockRecordSink::new();
        let record = crate::formatter::IncidentFormatter::default().format(
            &create_test_event(),
            &create_test_request(),
            &UserContext::Anonymous,
            FixedClock::default_instant().now(),
        );

        sink.save(&record).await.unwrap();
        assert_eq!(sink.get_all_records().len(), 1);

        sink.clear();
        assert!(sink.get_all_records().is_empty());
    }

    #[tokio::test]
    async fn test_mock_record_sink_failure() {
        let sink = MockRecordSink::new();
        let record = crate::formatter::IncidentFormatter::default().format(
            &create_test_event(),
            &create_test_request(),
            &UserContext::Anonymous,
            FixedClock::default_instant().now(),
        );

        // Configure to fail
        sink.fail_next_operation("Test error");
        assert!(sink.save(&record).await.is_err());

        // Should succeed after failure
        assert!(sink.save(&record).await.is_ok());
        assert_eq!(sink.get_all_records().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_notify_sink() {
        let sink = MockNotifySink::new();

        sink.fail_next_operation();
        assert!(sink.send("subject", "body").await.is_err());
        assert!(sink.send("subject", "body").await.is_ok());

        let sent = sink.get_all_sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "subject");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::default_instant();
        assert_eq!(clock.now(), clock.now());
    }
}
