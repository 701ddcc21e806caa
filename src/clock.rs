//! Clock abstraction for FaultForge
//!
//! Record timestamps and notification subjects both depend on "now"; the
//! clock trait makes that reading injectable so formatting is reproducible
//! under test.

use chrono::{DateTime, Utc};

/// Supplies the current UTC time
pub trait Clock: Send + Sync {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock, backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
