//! Language-name resolution with a per-locale-pair cache.

mod cache;
mod service;

pub use cache::LanguageCache;
pub use service::LanguageNameResolver;

#[cfg(test)]
mod tests;
