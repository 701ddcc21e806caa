//! Data models for FaultForge
//!
//! This module contains the domain models used throughout the crate:
//! captured error events, request/user context snapshots, the incident
//! record produced by the formatter, and the validation error types.

pub mod context;
pub mod error;
pub mod event;
pub mod record;

// Re-export commonly used types
pub use context::{ReportedUser, RequestContext, UserContext};
pub use error::{ValidationError, ValidationErrorKind, ValidationErrors};
pub use event::{CallKind, ErrorEvent, SourceLocation, StackFrame};
pub use record::{format_timestamp, IncidentRecord, TIMESTAMP_DISPLAY_FORMAT};
