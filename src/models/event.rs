//! Captured fault models for FaultForge
//!
//! This module defines the structures describing a single captured error:
//! the error event itself, its source location, and the stack frames that
//! were live when it was raised.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::error::{ValidationError, ValidationErrorKind, ValidationErrors};

/// A file path and line number, as captured from a raised error or a
/// stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the source file
    pub file: String,

    /// Line number within the file
    pub line: u32,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// How a stack frame's function was invoked
///
/// The call kind decides the separator between the owning type and the
/// function name when the frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    /// Method called on an instance
    #[serde(rename = "INSTANCE")]
    Instance,
    /// Associated/static call on a type
    #[serde(rename = "STATIC")]
    Static,
    /// Free function with no owning type
    #[serde(rename = "FREE")]
    Free,
}

impl CallKind {
    /// The separator rendered between owner and function for this call kind
    pub fn separator(&self) -> &'static str {
        match self {
            CallKind::Instance => "->",
            CallKind::Static => "::",
            CallKind::Free => "",
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Instance => "INSTANCE",
            CallKind::Static => "STATIC",
            CallKind::Free => "FREE",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One call-site entry in a captured error's call history
///
/// Frames are created once at capture time and read-only afterwards. Any of
/// the identity fields may be absent; the formatter renders what is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// Name of the function, if known
    pub function: Option<String>,

    /// The enclosing type or module, absent for free functions
    pub owner: Option<String>,

    /// How the function was invoked
    pub call_kind: CallKind,

    /// Source location of the call site, if known
    pub location: Option<SourceLocation>,
}

impl StackFrame {
    /// Create a frame with no identity at all (still emitted as a blank
    /// trace line to preserve frame-count correspondence)
    pub fn unknown() -> Self {
        Self {
            function: None,
            owner: None,
            call_kind: CallKind::Free,
            location: None,
        }
    }
}

/// A captured fault, ready to be formatted into an incident record
///
/// The frame sequence is ordered outermost call first and is immutable once
/// captured. `kind` and `message` must be non-empty; `validate_fields`
/// enforces this for hosts that accept events from untrusted capture code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ErrorEvent {
    /// Identifier or class name of the error (e.g. "DivisionByZeroError")
    #[validate(length(min = 1))]
    pub kind: String,

    /// Human-readable description of the fault
    #[validate(length(min = 1))]
    pub message: String,

    /// Where the error was raised
    pub location: SourceLocation,

    /// Stack frames live at capture time, outermost call first
    pub frames: Vec<StackFrame>,
}

impl ErrorEvent {
    /// Create a new error event with an empty trace (mainly for testing)
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            location,
            frames: Vec::new(),
        }
    }

    /// Attach captured stack frames
    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// Validate all fields without using the validator crate
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.kind.is_empty() {
            errors.add(ValidationError::new(ValidationErrorKind::EmptyField, "kind"));
        }

        if self.message.is_empty() {
            errors.add(ValidationError::new(
                ValidationErrorKind::EmptyField,
                "message",
            ));
        }

        if self.location.file.is_empty() {
            errors.add(ValidationError::with_context(
                ValidationErrorKind::EmptyField,
                "location.file",
                "Source file path must not be empty",
            ));
        }

        errors.into_result(())
    }
}
