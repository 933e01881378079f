//! Diagnostic logging on stderr
//!
//! Stdout carries exactly one envelope line, so every log event goes to
//! stderr. The filter comes from `YOUTUNE_BRIDGE_LOG` and defaults to `warn`.

use std::env;
use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter expression
pub const LOG_ENV: &str = "YOUTUNE_BRIDGE_LOG";
/// Filter used when `YOUTUNE_BRIDGE_LOG` is unset or blank
pub const DEFAULT_FILTER: &str = "warn";

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to install log subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Install the global subscriber. Later calls are no-ops.
pub fn initialise() -> Result<(), TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(&filter_directive(env::var(LOG_ENV).ok())))
        .map(|_| ())
}

fn filter_directive(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn install_subscriber(directive: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(directive).map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filter_defaults_to_warn() {
        assert_eq!(filter_directive(None), "warn");
        assert_eq!(filter_directive(Some("   ".to_string())), "warn");
    }

    #[test]
    fn explicit_filter_is_trimmed() {
        assert_eq!(
            filter_directive(Some(" youtune_bridge=debug ".to_string())),
            "youtune_bridge=debug"
        );
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = install_subscriber("youtune_bridge=notalevel").unwrap_err();
        assert!(matches!(err, TelemetryError::Filter(_)));
    }
}
