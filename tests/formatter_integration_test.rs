//! Integration tests for the FaultForge incident formatter and policy
//!
//! These tests verify the end-to-end formatting behavior: redaction,
//! trace rendering, user resolution, and the reporting decision gates.

use chrono::{TimeZone, Utc};
use serde_json::json;

use faultforge::{
    CallKind, ErrorEvent, IncidentFormatter, ReportingConfig, ReportingPolicy, RequestContext,
    SourceLocation, StackFrame, UserContext,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 5, 9, 5, 0).unwrap()
}

fn division_event() -> ErrorEvent {
    ErrorEvent::new(
        "DivisionByZeroError",
        "Division by zero",
        SourceLocation::new("/app/Calculator.php", 17),
    )
}

#[test]
fn test_redaction_scenario_password_and_email() {
    let formatter = IncidentFormatter::new(vec![
        "password".to_string(),
        "password_confirmation".to_string(),
    ]);
    let request = RequestContext::new("https://example.com/register", "POST", "203.0.113.9")
        .with_input("password", json!("abc123"))
        .with_input("email", json!("a@b.com"));

    let record = formatter.format(
        &division_event(),
        &request,
        &UserContext::Anonymous,
        fixed_now(),
    );

    assert!(record
        .serialized_input
        .contains("\"password\":\"hidden-secret\""));
    assert!(record.serialized_input.contains("\"email\":\"a@b.com\""));
    assert!(!record.serialized_input.contains("abc123"));
}

#[test]
fn test_trace_rendering_scenario_instance_call() {
    let event = division_event().with_frames(vec![StackFrame {
        function: Some("run".to_string()),
        owner: Some("Job".to_string()),
        call_kind: CallKind::Instance,
        location: Some(SourceLocation::new("/app/Job.php", 42)),
    }]);

    let record = IncidentFormatter::default().format(
        &event,
        &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
        &UserContext::Anonymous,
        fixed_now(),
    );

    assert_eq!(
        record.rendered_trace_lines,
        vec!["at Job->run(...) /app/Job.php:42".to_string()]
    );
}

#[test]
fn test_frame_count_invariant_with_blank_frames() {
    let event = division_event().with_frames(vec![
        StackFrame::unknown(),
        StackFrame {
            function: Some("handle".to_string()),
            owner: None,
            call_kind: CallKind::Free,
            location: None,
        },
        StackFrame::unknown(),
    ]);

    let record = IncidentFormatter::default().format(
        &event,
        &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
        &UserContext::Anonymous,
        fixed_now(),
    );

    assert_eq!(record.rendered_trace_lines.len(), 3);
    assert_eq!(record.rendered_trace_lines[0], "");
    assert_eq!(record.rendered_trace_lines[1], "at handle(...)");
    assert_eq!(record.rendered_trace_lines[2], "");
}

#[test]
fn test_anonymity_invariant() {
    let record = IncidentFormatter::default().format(
        &division_event(),
        &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
        &UserContext::Anonymous,
        fixed_now(),
    );

    assert_eq!(record.user.user_id, "N/A");
    assert_eq!(record.user.username, "unauthenticated");
    assert_eq!(record.user.first_name, "Unauthenticated User");
    assert_eq!(record.user.last_name, "N/A");
}

#[test]
fn test_empty_input_is_distinct_from_empty_container() {
    let formatter = IncidentFormatter::default();

    let no_input = formatter.format(
        &division_event(),
        &RequestContext::new("https://example.com", "GET", "127.0.0.1"),
        &UserContext::Anonymous,
        fixed_now(),
    );
    assert_eq!(no_input.serialized_input, "");

    let with_input = formatter.format(
        &division_event(),
        &RequestContext::new("https://example.com", "GET", "127.0.0.1")
            .with_input("q", json!("search")),
        &UserContext::Anonymous,
        fixed_now(),
    );
    assert_eq!(with_input.serialized_input, "{\"q\":\"search\"}");
}

#[test]
fn test_idempotence_modulo_incident_id() {
    let formatter = IncidentFormatter::new(vec!["password".to_string()]);
    let event = division_event().with_frames(vec![StackFrame {
        function: Some("run".to_string()),
        owner: Some("App\\Jobs\\Job".to_string()),
        call_kind: CallKind::Static,
        location: Some(SourceLocation::new("/app/Job.php", 42)),
    }]);
    let request = RequestContext::new("https://example.com", "POST", "127.0.0.1")
        .with_input("password", json!("abc123"))
        .with_input("email", json!("a@b.com"));
    let user = UserContext::authenticated("7", "jdoe", "Jane", "Doe");

    let first = formatter.format(&event, &request, &user, fixed_now());
    let second = formatter.format(&event, &request, &user, fixed_now());

    assert_eq!(first.kind, second.kind);
    assert_eq!(first.message, second.message);
    assert_eq!(first.location, second.location);
    assert_eq!(first.url, second.url);
    assert_eq!(first.http_method, second.http_method);
    assert_eq!(first.client_ip, second.client_ip);
    assert_eq!(first.user, second.user);
    assert_eq!(first.frames, second.frames);
    assert_eq!(first.rendered_trace_lines, second.rendered_trace_lines);
    assert_eq!(first.serialized_input, second.serialized_input);
    assert_eq!(first.timestamp_utc, second.timestamp_utc);
    assert_ne!(first.incident_id, second.incident_id);
}

#[test]
fn test_suppression_scenario() {
    let event = ErrorEvent::new(
        "ValidationException",
        "The given data was invalid",
        SourceLocation::new("/app/Validator.php", 88),
    );
    let config = ReportingConfig {
        record_enabled: true,
        notify_enabled: true,
        dont_report: "ValidationException".to_string(),
        ..ReportingConfig::disabled()
    };

    let decision = ReportingPolicy::decide(&event, &config);
    assert!(!decision.should_record);
    assert!(!decision.should_notify);
}

#[test]
fn test_subject_line_scenario() {
    let config = ReportingConfig {
        notify_channel: "production-alerts".to_string(),
        ..ReportingConfig::disabled()
    };

    let subject = ReportingPolicy::build_subject(&config, fixed_now());
    assert_eq!(
        subject,
        "[production-alerts]: An Exception was thrown! (Wed Aug 05, 2026 9:05 UTC)"
    );
}

#[test]
fn test_record_serialization_round_trip() {
    let record = IncidentFormatter::default().format(
        &division_event().with_frames(vec![StackFrame::unknown()]),
        &RequestContext::new("https://example.com", "GET", "127.0.0.1")
            .with_input("q", json!("search")),
        &UserContext::authenticated("7", "jdoe", "Jane", "Doe"),
        fixed_now(),
    );

    let json = serde_json::to_string(&record).unwrap();
    let back: faultforge::IncidentRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
