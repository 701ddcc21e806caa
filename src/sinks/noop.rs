//! No-op sink stand-ins
//!
//! Hosts without a persistence or notification capability wire these in at
//! startup instead of the reporter probing for optional add-ons at runtime.
//! Both succeed unconditionally and leave a trace-level breadcrumb.

use async_trait::async_trait;
use tracing::trace;

use super::{DeliveryResult, NotifySink, RecordSink, StorageResult};
use crate::models::IncidentRecord;

/// A record sink that drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecordSink;

#[async_trait]
impl RecordSink for NoopRecordSink {
    async fn save(&self, record: &IncidentRecord) -> StorageResult<()> {
        trace!(incident_id = %record.incident_id, "Record sink not configured, dropping record");
        Ok(())
    }
}

/// A notify sink that drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifySink;

#[async_trait]
impl NotifySink for NoopNotifySink {
    async fn send(&self, subject: &str, _body: &str) -> DeliveryResult<()> {
        trace!(subject = %subject, "Notify sink not configured, dropping notification");
        Ok(())
    }
}
