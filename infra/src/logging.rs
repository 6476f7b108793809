//! Tracing subscriber setup

use lc_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::InfrastructureError;

/// Build the event filter: `RUST_LOG` when set, the configured level otherwise
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, InfrastructureError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| InfrastructureError::Config(format!("Invalid log level {:?}: {}", config.level, e)))
}

/// Install the global tracing subscriber
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| InfrastructureError::General(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "lc_core=verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(env_filter(&config), Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_configured_level_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "lc_core=debug,warn".to_string(),
            ..LoggingConfig::default()
        };
        let filter = env_filter(&config).unwrap();
        assert!(filter.to_string().contains("lc_core=debug"));
    }
}
