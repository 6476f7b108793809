//! # Infrastructure Layer
//!
//! Concrete implementations behind the seams of `lc_core`:
//!
//! - **Database**: MySQL record store and schema inspector using SQLx
//! - **Locale**: language-name tables read from TOML files
//! - **Logging**: tracing subscriber setup
//! - **Migrations**: runner for the attribute's schema migrations
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use std::sync::Arc;

use lc_core::repositories::{RecordStore, SchemaInspector};
use lc_core::services::attribute::{AttributeTypeRegistry, LangCodeTypeFactory};
use lc_core::services::locale::{CanonicalCodeTable, LocaleContext};
use lc_core::services::migration::{AllowNullMigration, Migration};
use lc_shared::config::AppConfig;

// Re-export core types for convenience
pub use lc_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// File-backed language-name tables
pub mod locale;

/// Tracing subscriber initialisation
pub mod logging;

/// Schema migration runner
pub mod migrations;

#[cfg(feature = "mysql")]
use database::{DatabasePool, MySqlRecordStore, MySqlSchemaInspector};

pub use locale::FileLocaleContext;

/// Wired infrastructure services
#[derive(Clone)]
pub struct InfrastructureServices {
    #[cfg(feature = "mysql")]
    pub pool: DatabasePool,
    pub record_store: Arc<dyn RecordStore>,
    pub schema_inspector: Arc<dyn SchemaInspector>,
    pub locale_context: Arc<dyn LocaleContext>,
    pub canonical: Arc<CanonicalCodeTable>,
    pub registry: Arc<AttributeTypeRegistry>,
    /// Passed to `Attribute::settings_palette`
    pub frontend_editing: bool,
}

impl InfrastructureServices {
    /// Migrations shipped with the registered attribute types
    pub fn migrations(&self) -> Vec<Arc<dyn Migration>> {
        let allow_null: Arc<dyn Migration> =
            Arc::new(AllowNullMigration::new(Arc::clone(&self.schema_inspector)));
        vec![allow_null]
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<Vec<migrations::MigrationReport>, InfrastructureError> {
        migrations::run_pending(&self.migrations()).await
    }
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - Database connection pool
/// - Record store and schema inspector
/// - File-backed locale context
/// - Attribute type registry with the langcode type
#[cfg(feature = "mysql")]
pub async fn initialize(config: AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(
        environment = %config.environment,
        "Initializing infrastructure services"
    );

    let pool = DatabasePool::new(config.database.clone()).await?;
    let record_store: Arc<dyn RecordStore> = Arc::new(MySqlRecordStore::new(pool.get_pool().clone()));
    let schema_inspector: Arc<dyn SchemaInspector> =
        Arc::new(MySqlSchemaInspector::new(pool.get_pool().clone()));
    let locale_context: Arc<dyn LocaleContext> = Arc::new(FileLocaleContext::from_config(&config.locale));
    let canonical = CanonicalCodeTable::builtin();

    let mut registry = AttributeTypeRegistry::new();
    registry.register(Arc::new(LangCodeTypeFactory::new(
        Arc::clone(&record_store),
        Arc::clone(&locale_context),
        Arc::clone(&canonical),
    )));

    tracing::info!(
        types = ?registry.type_names(),
        "Infrastructure services initialized successfully"
    );

    Ok(InfrastructureServices {
        pool,
        record_store,
        schema_inspector,
        locale_context,
        canonical,
        registry: Arc::new(registry),
        frontend_editing: config.locale.frontend_editing,
    })
}

/// Load layered configuration, see [`AppConfig::load`]
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    Ok(AppConfig::load()?)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed language table
    #[error("Language table error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a domain service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
