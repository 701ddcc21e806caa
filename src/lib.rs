//! FaultForge Library
//!
//! FaultForge is a reusable observability primitive: it formats captured
//! exceptions into redacted, serializable incident records and decides,
//! from configuration, whether each incident is persisted and/or announced
//! through injected sinks.
//!
//! The formatter and policy are pure and synchronous; all I/O lives behind
//! the [`sinks::RecordSink`] and [`sinks::NotifySink`] trait seams wired in
//! by the host at startup.

pub mod clock;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod policy;
pub mod render;
pub mod reporter;
pub mod sinks;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::ReportingConfig;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    CallKind, ErrorEvent, IncidentRecord, ReportedUser, RequestContext, SourceLocation,
    StackFrame, UserContext,
};

// Re-export the pipeline components
pub use clock::{Clock, SystemClock};
pub use formatter::{IncidentFormatter, REDACTION_MARKER};
pub use policy::{ReportingDecision, ReportingPolicy};
pub use render::{JsonRenderer, NotificationRenderer, TextRenderer};
pub use reporter::{ExceptionReporter, ReportOutcome};
pub use sinks::{NoopNotifySink, NoopRecordSink, NotifySink, RecordSink};
