//! Reporting policy for FaultForge
//!
//! The policy is the boolean gate deciding whether a captured fault is
//! persisted and/or announced. It is stateless and pure: configuration in,
//! decision out.

use chrono::{DateTime, Utc};

use crate::config::ReportingConfig;
use crate::models::{format_timestamp, ErrorEvent};

/// The outcome of a reporting decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingDecision {
    /// Whether the incident should be written to the record sink
    pub should_record: bool,

    /// Whether the incident should be sent to the notify sink
    pub should_notify: bool,
}

impl ReportingDecision {
    /// True when neither side effect applies
    pub fn is_suppressed(&self) -> bool {
        !self.should_record && !self.should_notify
    }
}

/// Stateless decision logic for incident reporting
pub struct ReportingPolicy;

impl ReportingPolicy {
    /// Decide whether an event should be recorded and/or notified
    ///
    /// Suppressed error kinds skip both side effects unconditionally,
    /// regardless of the individual feature flags.
    pub fn decide(event: &ErrorEvent, config: &ReportingConfig) -> ReportingDecision {
        let suppressed = config.suppresses(&event.kind);

        ReportingDecision {
            should_record: config.record_enabled && !suppressed,
            should_notify: config.notify_enabled && !suppressed,
        }
    }

    /// Build the notification subject line for an incident
    ///
    /// The format is `[<channel>]: An Exception was thrown! (<timestamp> UTC)`
    /// with the timestamp in the record display format.
    pub fn build_subject(config: &ReportingConfig, now: DateTime<Utc>) -> String {
        format!(
            "[{}]: An Exception was thrown! ({} UTC)",
            config.notify_channel,
            format_timestamp(now)
        )
    }
}
