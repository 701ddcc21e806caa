//! Notification body rendering for FaultForge
//!
//! The notify sink takes a subject and a rendered body; this module is the
//! seam between the structured incident record and that presentation. Rich
//! HTML templating belongs to the host; the renderers here are the
//! built-in stand-ins.

use crate::models::IncidentRecord;

/// Renders an incident record into a notification body
pub trait NotificationRenderer: Send + Sync {
    /// Produce the body text for one record
    fn render(&self, record: &IncidentRecord) -> String;
}

/// Plain-text renderer: one labelled line per field, then the trace
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl NotificationRenderer for TextRenderer {
    fn render(&self, record: &IncidentRecord) -> String {
        let mut body = String::new();

        body.push_str(&format!("Exception: {}\n", record.kind));
        body.push_str(&format!("Message: {}\n", record.message));
        body.push_str(&format!("Thrown at: {}\n", record.location));
        body.push_str(&format!("Time: {}\n", record.display_timestamp()));
        body.push_str(&format!(
            "Request: {} {} (from {})\n",
            record.http_method, record.url, record.client_ip
        ));
        body.push_str(&format!(
            "User: {} ({}) - {} {}\n",
            record.user.username, record.user.user_id, record.user.first_name, record.user.last_name
        ));

        if record.has_input() {
            body.push_str(&format!("Input: {}\n", record.serialized_input));
        }

        if !record.rendered_trace_lines.is_empty() {
            body.push_str("Trace:\n");
            for line in &record.rendered_trace_lines {
                body.push_str(&format!("  {}\n", line));
            }
        }

        body
    }
}

/// JSON renderer for machine consumers
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl NotificationRenderer for JsonRenderer {
    fn render(&self, record: &IncidentRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_default()
    }
}
