//! Configuration module
//!
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `locale` - Language-name table location and locale selection

pub mod database;
pub mod environment;
pub mod locale;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use locale::LocaleConfig;

/// Prefix of environment variables overriding configuration keys,
/// e.g. `LANGCODE__DATABASE__URL`
pub const ENV_PREFIX: &str = "LANGCODE";

/// Complete configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let database = match environment {
            Environment::Production => DatabaseConfig::default().with_max_connections(20),
            _ => DatabaseConfig::default(),
        };

        Self {
            environment,
            database,
            locale: LocaleConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from plain environment variables only
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            database: DatabaseConfig::from_env(),
            locale: LocaleConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load layered configuration
    ///
    /// Layers, lowest precedence first: environment defaults, the optional
    /// `config.<environment>.toml` file, `LANGCODE__*` variables. A `.env`
    /// file is read into the process environment first when present.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let defaults = Self::for_environment(environment);

        ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(
                ::config::File::new(environment.config_file(), ::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults() {
        let config = AppConfig::for_environment(Environment::Production);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.locale.default_locale, "en");
    }

    #[test]
    fn test_deserialize_with_missing_sections() {
        let json = serde_json::json!({
            "environment": "staging",
            "database": {
                "url": "mysql://db/site",
                "max_connections": 3,
                "connect_timeout": 5,
                "idle_timeout": 60,
                "max_lifetime": 120
            }
        });

        let config: AppConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.locale.fallback_locale, "en");
        assert!(!config.locale.frontend_editing);
    }
}
