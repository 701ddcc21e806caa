//! Logging module for FaultForge
//!
//! Configures structured logging via the tracing crate: JSON output for
//! production, pretty output for development. Hosts that already manage a
//! subscriber can skip this entirely; nothing else in the crate depends on
//! it having run.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::error::{Error, Result};

/// Initialize the logging system
///
/// The filter honors `RUST_LOG` when set, otherwise defaults to the given
/// level for this crate's targets.
pub fn init_tracing(log_level: &str, environment: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("faultforge={}", log_level)));

    let registry = Registry::default().with(env_filter);

    let init_result = if environment == "production" {
        registry
            .with(fmt::layer().json().with_file(true).with_line_number(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().pretty().with_target(true))
            .try_init()
    };

    init_result.map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!(
        environment = environment,
        log_level = log_level,
        "Logging initialized"
    );

    Ok(())
}
