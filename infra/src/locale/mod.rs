//! Language-name tables loaded from TOML files.

mod file_context;

pub use file_context::FileLocaleContext;

#[cfg(test)]
mod tests;
