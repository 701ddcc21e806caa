//! Incident formatting for FaultForge
//!
//! The formatter turns a captured error event plus request and user context
//! into a redacted [`IncidentRecord`]. It is a pure component: no I/O, no
//! mutation of its inputs, and it is total over all well-formed inputs
//! because every missing field has a defined fallback.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::models::{
    ErrorEvent, IncidentRecord, ReportedUser, RequestContext, StackFrame, UserContext,
};

/// Marker substituted for the value of any sensitive input field. The
/// replacement is irreversible; the original value never leaves the
/// formatting boundary.
pub const REDACTION_MARKER: &str = "hidden-secret";

/// Formats captured faults into redacted incident records
///
/// The sensitive-field set is fixed at construction and matched against
/// input parameter names with case-sensitive exact comparison, so redaction
/// behavior is predictable and testable rather than best effort.
#[derive(Debug, Clone, Default)]
pub struct IncidentFormatter {
    sensitive_fields: BTreeSet<String>,
}

impl IncidentFormatter {
    /// Create a formatter redacting the given field names
    pub fn new(sensitive_fields: impl IntoIterator<Item = String>) -> Self {
        Self {
            sensitive_fields: sensitive_fields.into_iter().collect(),
        }
    }

    /// The configured sensitive-field set
    pub fn sensitive_fields(&self) -> &BTreeSet<String> {
        &self.sensitive_fields
    }

    /// Format one captured fault into an incident record
    ///
    /// `now` is the clock reading stamped onto the record; callers read it
    /// from their clock once per incident so the formatter stays pure.
    /// Two calls with identical inputs and the same reading produce records
    /// identical in every field except `incident_id`.
    pub fn format(
        &self,
        event: &ErrorEvent,
        request: &RequestContext,
        user: &UserContext,
        now: DateTime<Utc>,
    ) -> IncidentRecord {
        IncidentRecord {
            incident_id: Uuid::new_v4(),
            kind: event.kind.clone(),
            message: event.message.clone(),
            location: event.location.clone(),
            url: request.url.clone(),
            http_method: request.http_method.clone(),
            client_ip: request.client_ip.clone(),
            user: ReportedUser::from(user),
            frames: event.frames.clone(),
            rendered_trace_lines: event.frames.iter().map(render_trace_line).collect(),
            serialized_input: self.serialize_input(request),
            timestamp_utc: now,
        }
    }

    /// Serialize the request input with sensitive values redacted
    ///
    /// An empty input map yields the empty string, which callers must treat
    /// as "no input available" rather than an empty serialized container.
    fn serialize_input(&self, request: &RequestContext) -> String {
        if request.input.is_empty() {
            return String::new();
        }

        let redacted: std::collections::BTreeMap<&str, serde_json::Value> = request
            .input
            .iter()
            .map(|(name, value)| {
                if self.sensitive_fields.contains(name) {
                    (name.as_str(), serde_json::Value::from(REDACTION_MARKER))
                } else {
                    (name.as_str(), value.clone())
                }
            })
            .collect();

        // BTreeMap keys serialize in sorted order, keeping the blob
        // byte-stable across repeated calls
        serde_json::to_string(&redacted).unwrap_or_default()
    }
}

/// Render one stack frame as a human-readable trace line
///
/// Frames with no callable identity render as an empty segment so the line
/// count always matches the frame count; a known file location is appended
/// regardless of which identity branch applied.
pub fn render_trace_line(frame: &StackFrame) -> String {
    let mut line = match (&frame.owner, &frame.function) {
        (Some(owner), Some(function)) => format!(
            "at {}{}{}(...)",
            simple_type_name(owner),
            frame.call_kind.separator(),
            function
        ),
        (None, Some(function)) => format!("at {}(...)", function),
        _ => String::new(),
    };

    if let Some(location) = &frame.location {
        line.push_str(&format!(" {}", location));
    }

    line
}

/// Strip namespace/module qualifiers down to the terminal simple type name
///
/// Handles `::`, `\` and `.` qualified paths so owners captured from
/// different runtimes all render the same way.
fn simple_type_name(owner: &str) -> &str {
    let tail = owner.rsplit("::").next().unwrap_or(owner);
    let tail = tail.rsplit('\\').next().unwrap_or(tail);
    tail.rsplit('.').next().unwrap_or(tail)
}
