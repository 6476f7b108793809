//! Record store module: reading, writing and aggregating attribute values.

mod r#trait;
pub use r#trait::RecordStore;

mod mock;
pub use mock::MockRecordStore;

#[cfg(test)]
mod tests;
