//! Attribute types: the `Attribute` trait, the langcode implementation and
//! its registration.

mod builder;
mod factory;
mod langcode;
mod palette;
mod registry;
mod traits;

pub use builder::LangCodeAttributeBuilder;
pub use factory::{AttributeTypeFactory, LangCodeTypeFactory, LANGCODE_TYPE_ICON, LANGCODE_TYPE_NAME};
pub use langcode::LangCodeAttribute;
pub use palette::SettingsPalette;
pub use registry::AttributeTypeRegistry;
pub use traits::{Attribute, BASE_SETTING_NAMES};

#[cfg(test)]
mod tests;
