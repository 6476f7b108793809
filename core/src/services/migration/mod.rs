//! Schema migrations shipped with the langcode attribute.

mod allow_null;
mod traits;

pub use allow_null::AllowNullMigration;
pub use traits::Migration;

#[cfg(test)]
mod tests;
