//! In-memory implementation of RecordStore for testing.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::value_objects::ValueCount;
use crate::errors::DomainError;

use super::RecordStore;

type Column = BTreeMap<u64, Option<String>>;

/// Mock record store keeping one map of id to value per `table.column`
pub struct MockRecordStore {
    columns: Arc<Mutex<HashMap<(String, String), Column>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            columns: Arc::new(Mutex::new(HashMap::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed one record value
    pub fn insert(&self, table: &str, column: &str, id: u64, value: Option<&str>) {
        self.columns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((table.to_string(), column.to_string()))
            .or_default()
            .insert(id, value.map(str::to_string));
    }

    /// Raw stored value of a record; outer `None` when the record is missing
    pub fn value_of(&self, table: &str, column: &str, id: u64) -> Option<Option<String>> {
        self.columns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(table.to_string(), column.to_string()))
            .and_then(|c| c.get(&id).cloned())
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap_or_else(PoisonError::into_inner) = should_fail;
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(DomainError::Storage {
                message: "Mock record store error".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn count_values(
        &self,
        table: &str,
        column: &str,
        ids: Option<&[u64]>,
    ) -> Result<Vec<ValueCount>, DomainError> {
        self.check_failure()?;

        let columns = self.columns.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(values) = columns.get(&(table.to_string(), column.to_string())) else {
            return Ok(Vec::new());
        };

        match ids {
            Some(ids) => {
                let mut seen_ids = HashSet::new();
                let mut result: Vec<ValueCount> = Vec::new();
                for id in ids {
                    if !seen_ids.insert(*id) {
                        continue;
                    }
                    let Some(Some(value)) = values.get(id) else {
                        continue;
                    };
                    if value.is_empty() {
                        continue;
                    }
                    match result.iter_mut().find(|c| &c.value == value) {
                        Some(existing) => existing.count += 1,
                        None => result.push(ValueCount::new(value.clone(), 1)),
                    }
                }
                Ok(result)
            }
            None => {
                let mut grouped: BTreeMap<&str, u64> = BTreeMap::new();
                for value in values.values().flatten() {
                    if !value.is_empty() {
                        *grouped.entry(value.as_str()).or_default() += 1;
                    }
                }
                Ok(grouped
                    .into_iter()
                    .map(|(value, count)| ValueCount::new(value, count))
                    .collect())
            }
        }
    }

    async fn fetch_values(
        &self,
        table: &str,
        column: &str,
        ids: &[u64],
    ) -> Result<Vec<(u64, Option<String>)>, DomainError> {
        self.check_failure()?;

        let columns = self.columns.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(values) = columns.get(&(table.to_string(), column.to_string())) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| values.get(id).map(|value| (*id, value.clone())))
            .collect())
    }

    async fn store_values(
        &self,
        table: &str,
        column: &str,
        values: &[(u64, Option<String>)],
    ) -> Result<(), DomainError> {
        self.check_failure()?;

        let mut columns = self.columns.lock().unwrap_or_else(PoisonError::into_inner);
        let stored = columns
            .entry((table.to_string(), column.to_string()))
            .or_default();
        for (id, value) in values {
            stored.insert(*id, value.clone());
        }
        Ok(())
    }
}
