//! Configuration module for FaultForge
//!
//! Reporting configuration is loaded from environment variables with a
//! default on every key. Resolution is fail-safe: a key that cannot be
//! resolved disables the corresponding feature instead of erroring out of
//! the caller, since an exception handler must never crash while
//! configuring itself.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::Result;

/// Reporting configuration
///
/// The `dont_flash` (input redaction) and `dont_report` (kind suppression)
/// sets are independent and separately configurable; they never share
/// values implicitly.
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct ReportingConfig {
    /// Whether incidents are written to the record sink
    #[envconfig(from = "FAULTFORGE_RECORD_ENABLED", default = "false")]
    pub record_enabled: bool,

    /// Whether incidents are sent to the notify sink
    #[envconfig(from = "FAULTFORGE_NOTIFY_ENABLED", default = "false")]
    pub notify_enabled: bool,

    /// Channel name embedded in notification subjects
    #[envconfig(from = "FAULTFORGE_NOTIFY_CHANNEL", default = "exceptions")]
    pub notify_channel: String,

    /// Input field names whose values are redacted (comma-separated)
    #[envconfig(
        from = "FAULTFORGE_DONT_FLASH",
        default = "password,password_confirmation"
    )]
    pub dont_flash: String,

    /// Error kinds that are never recorded or notified (comma-separated)
    #[envconfig(from = "FAULTFORGE_DONT_REPORT", default = "")]
    pub dont_report: String,
}

impl ReportingConfig {
    /// Load configuration from environment variables
    ///
    /// Falls back to the all-disabled configuration on any resolution
    /// failure rather than propagating the error.
    pub fn from_env() -> Self {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        match Self::init_from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to resolve reporting configuration, disabling reporting");
                Self::disabled()
            },
        }
    }

    /// The fail-safe configuration: both features off, default redaction set
    pub fn disabled() -> Self {
        Self {
            record_enabled: false,
            notify_enabled: false,
            notify_channel: "exceptions".to_string(),
            dont_flash: "password,password_confirmation".to_string(),
            dont_report: String::new(),
        }
    }

    /// The redaction set as field names
    pub fn dont_flash_fields(&self) -> BTreeSet<String> {
        split_list(&self.dont_flash)
    }

    /// The suppression set as error kinds
    pub fn dont_report_kinds(&self) -> BTreeSet<String> {
        split_list(&self.dont_report)
    }

    /// True when the given error kind is suppressed entirely
    pub fn suppresses(&self, kind: &str) -> bool {
        self.dont_report
            .split(',')
            .map(str::trim)
            .any(|suppressed| !suppressed.is_empty() && suppressed == kind)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.notify_enabled && self.notify_channel.is_empty() {
            return Err(crate::error::Error::config(
                "Notification channel cannot be empty while notify is enabled",
            ));
        }

        Ok(())
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!(
            record_enabled = %self.record_enabled,
            notify_enabled = %self.notify_enabled,
            notify_channel = %self.notify_channel,
            redacted_fields = %self.dont_flash_fields().len(),
            suppressed_kinds = %self.dont_report_kinds().len(),
            "Reporting configuration"
        );
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

fn split_list(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
