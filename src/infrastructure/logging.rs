//! Tracing subscriber setup
//!
//! The embedding binary calls [`init_logging`] once at startup with the
//! logging section of its loaded [`crate::config::AppConfig`].

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};
use crate::domain::DomainError;

/// Installs the global tracing subscriber described by `settings`.
///
/// A `RUST_LOG` environment variable overrides the configured level.
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), DomainError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let registry = tracing_subscriber::registry().with(filter);

    match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init(),
    }
    .map_err(|e| DomainError::configuration(format!("Failed to install subscriber: {e}")))?;

    tracing::info!("Logging initialized with level: {}", settings.level);
    Ok(())
}
