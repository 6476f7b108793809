//! Record store trait defining access to attribute values of model records.

use async_trait::async_trait;

use crate::domain::value_objects::ValueCount;
use crate::errors::DomainError;

/// Repository trait for the per-record values of one attribute column
///
/// `table` and `column` are framework-generated identifiers; implementations
/// must reject anything that is not a plain identifier before building SQL.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Group the non-empty values of a column and count their occurrences
    ///
    /// # Arguments
    /// * `table` - Model table
    /// * `column` - Attribute column
    /// * `ids` - Restrict to these records; `None` scans the whole table
    ///
    /// # Returns
    /// * With `ids`: groups ordered by the position in `ids` of the first
    ///   record holding the value
    /// * Without `ids`: groups ordered by value ascending
    async fn count_values(
        &self,
        table: &str,
        column: &str,
        ids: Option<&[u64]>,
    ) -> Result<Vec<ValueCount>, DomainError>;

    /// Fetch the stored value of each existing record in `ids`
    ///
    /// Records that do not exist are absent from the result; `NULL` columns
    /// come back as `None`.
    async fn fetch_values(
        &self,
        table: &str,
        column: &str,
        ids: &[u64],
    ) -> Result<Vec<(u64, Option<String>)>, DomainError>;

    /// Overwrite the stored value of each given record
    async fn store_values(
        &self,
        table: &str,
        column: &str,
        values: &[(u64, Option<String>)],
    ) -> Result<(), DomainError>;
}
