//! Exception reporting pipeline for FaultForge
//!
//! The reporter is the explicit call site an application's error-handling
//! middleware invokes on an unhandled exception: it asks the policy whether
//! the incident matters, formats the record, and drives the configured
//! sinks. Sink failures are logged and reflected in the outcome, never
//! re-raised: a reporting failure propagating out of an exception handler
//! would recurse straight back into it.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::clock::{Clock, SystemClock};
use crate::config::ReportingConfig;
use crate::formatter::IncidentFormatter;
use crate::models::{ErrorEvent, IncidentRecord, RequestContext, UserContext};
use crate::policy::ReportingPolicy;
use crate::render::{NotificationRenderer, TextRenderer};
use crate::sinks::{NotifySink, RecordSink};

/// What happened to one reported incident
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Whether the record sink accepted the incident
    pub recorded: bool,

    /// Whether the notify sink accepted the notification
    pub notified: bool,

    /// The formatted record, absent when the incident was suppressed
    /// before formatting
    pub record: Option<IncidentRecord>,
}

impl ReportOutcome {
    fn suppressed() -> Self {
        Self {
            recorded: false,
            notified: false,
            record: None,
        }
    }
}

/// Drives the format/decide/record/notify pipeline for captured faults
pub struct ExceptionReporter {
    config: ReportingConfig,
    formatter: IncidentFormatter,
    record_sink: Arc<dyn RecordSink>,
    notify_sink: Arc<dyn NotifySink>,
    renderer: Arc<dyn NotificationRenderer>,
    clock: Arc<dyn Clock>,
}

impl ExceptionReporter {
    /// Create a new reporter
    ///
    /// The formatter's redaction set is taken from the configuration's
    /// `dont_flash` fields. Defaults to the system clock and the plain-text
    /// renderer; override with [`Self::with_clock`] / [`Self::with_renderer`].
    pub fn new(
        config: ReportingConfig,
        record_sink: Arc<dyn RecordSink>,
        notify_sink: Arc<dyn NotifySink>,
    ) -> Self {
        let formatter = IncidentFormatter::new(config.dont_flash_fields());

        Self {
            config,
            formatter,
            record_sink,
            notify_sink,
            renderer: Arc::new(TextRenderer),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the notification body renderer
    pub fn with_renderer(mut self, renderer: Arc<dyn NotificationRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Report one captured fault
    ///
    /// Infallible by contract: sink failures are logged and surface only as
    /// `recorded`/`notified` staying false in the outcome.
    pub async fn report(
        &self,
        event: &ErrorEvent,
        request: &RequestContext,
        user: &UserContext,
    ) -> ReportOutcome {
        let decision = ReportingPolicy::decide(event, &self.config);

        if decision.is_suppressed() {
            debug!(kind = %event.kind, "Incident suppressed, skipping report");
            return ReportOutcome::suppressed();
        }

        // One clock reading per incident: the record timestamp and the
        // subject line must agree
        let now = self.clock.now();
        let record = self.formatter.format(event, request, user, now);

        let mut outcome = ReportOutcome {
            recorded: false,
            notified: false,
            record: None,
        };

        if decision.should_record {
            match self.record_sink.save(&record).await {
                Ok(()) => {
                    debug!(incident_id = %record.incident_id, "Incident recorded");
                    outcome.recorded = true;
                },
                Err(e) => {
                    error!(
                        incident_id = %record.incident_id,
                        error = %e,
                        retryable = e.is_retryable(),
                        "Failed to record incident"
                    );
                },
            }
        }

        if decision.should_notify {
            let subject = ReportingPolicy::build_subject(&self.config, now);
            let body = self.renderer.render(&record);

            match self.notify_sink.send(&subject, &body).await {
                Ok(()) => {
                    debug!(incident_id = %record.incident_id, "Incident notification sent");
                    outcome.notified = true;
                },
                Err(e) => {
                    error!(
                        incident_id = %record.incident_id,
                        error = %e,
                        retryable = e.is_retryable(),
                        "Failed to send incident notification"
                    );
                },
            }
        }

        info!(
            incident_id = %record.incident_id,
            kind = %record.kind,
            recorded = outcome.recorded,
            notified = outcome.notified,
            "Incident reported"
        );

        outcome.record = Some(record);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceLocation;
    use crate::sinks::{NoopNotifySink, NoopRecordSink};

    fn reporter_with_config(config: ReportingConfig) -> ExceptionReporter {
        ExceptionReporter::new(
            config,
            Arc::new(NoopRecordSink),
            Arc::new(NoopNotifySink),
        )
    }

    fn sample_event() -> ErrorEvent {
        ErrorEvent::new(
            "RuntimeException",
            "boom",
            SourceLocation::new("/app/Handler.php", 10),
        )
    }

    #[tokio::test]
    async fn test_suppressed_outcome_has_no_record() {
        let reporter = reporter_with_config(ReportingConfig::disabled());

        let outcome = reporter
            .report(
                &sample_event(),
                &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
                &UserContext::Anonymous,
            )
            .await;

        assert!(!outcome.recorded);
        assert!(!outcome.notified);
        assert!(outcome.record.is_none());
    }

    #[tokio::test]
    async fn test_enabled_outcome_carries_record() {
        let config = ReportingConfig {
            record_enabled: true,
            notify_enabled: true,
            ..ReportingConfig::disabled()
        };
        let reporter = reporter_with_config(config);

        let outcome = reporter
            .report(
                &sample_event(),
                &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
                &UserContext::Anonymous,
            )
            .await;

        assert!(outcome.recorded);
        assert!(outcome.notified);

        let record = outcome.record.expect("record should be present");
        assert_eq!(record.kind, "RuntimeException");
    }
}
