//! Locale handling: the loader seam, the scoped switch and the canonical table.

mod canonical;
mod scope;
mod static_context;
mod traits;


pub use canonical::CanonicalCodeTable;
pub use scope::LocaleScope;
pub use static_context::StaticLocaleContext;
pub use traits::LocaleContext;
