//! Business services: locale handling, name resolution, the langcode
//! attribute and its schema migration.

pub mod attribute;
pub mod locale;
pub mod migration;
pub mod resolver;

// Re-export commonly used types
pub use attribute::{
    Attribute, AttributeTypeFactory, AttributeTypeRegistry, LangCodeAttribute,
    LangCodeAttributeBuilder, LangCodeTypeFactory, SettingsPalette, LANGCODE_TYPE_ICON,
    LANGCODE_TYPE_NAME,
};
pub use locale::{CanonicalCodeTable, LocaleContext, LocaleScope, StaticLocaleContext};
pub use migration::{AllowNullMigration, Migration};
pub use resolver::{LanguageCache, LanguageNameResolver};
