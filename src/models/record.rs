//! Incident record model for FaultForge
//!
//! The incident record is the formatter's output: an immutable, redacted,
//! serializable description of one captured fault, suitable for storage or
//! notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::ReportedUser;
use super::event::{SourceLocation, StackFrame};

/// Display format for record timestamps: `Day Mon DD, YYYY H:MM`, 24-hour
/// clock with no leading zero on the hour. Rendered values are followed by
/// the literal `UTC`.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%a %b %d, %Y %-H:%M";

/// Render a clock reading in the record display format, without the
/// trailing `UTC` marker.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
}

/// The redacted, structured description of one captured error
///
/// Produced by the formatter and immutable from then on. `serialized_input`
/// is the empty string when the request carried no input at all, which is
/// distinct from an empty serialized container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Unique identifier for this record
    pub incident_id: Uuid,

    /// Identifier/class name of the error
    pub kind: String,

    /// Human-readable description of the fault
    pub message: String,

    /// Where the error was raised
    pub location: SourceLocation,

    /// Full URL of the triggering request
    pub url: String,

    /// HTTP method of the triggering request
    pub http_method: String,

    /// Client IP of the triggering request
    pub client_ip: String,

    /// Resolved actor identity (sentinels for anonymous contexts)
    pub user: ReportedUser,

    /// The captured stack frames, carried through for structured consumers
    pub frames: Vec<StackFrame>,

    /// One human-readable line per stack frame, blank entries preserved
    pub rendered_trace_lines: Vec<String>,

    /// Redacted input parameters as a single JSON text blob, or the empty
    /// string when no input was available
    pub serialized_input: String,

    /// When the record was formatted
    pub timestamp_utc: DateTime<Utc>,
}

impl IncidentRecord {
    /// The record timestamp in display format, e.g.
    /// `Tue Aug 05, 2026 9:14 UTC`
    pub fn display_timestamp(&self) -> String {
        format!("{} UTC", format_timestamp(self.timestamp_utc))
    }

    /// True when the triggering request carried no input parameters
    pub fn has_input(&self) -> bool {
        !self.serialized_input.is_empty()
    }
}
