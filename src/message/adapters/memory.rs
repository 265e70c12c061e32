//! In-memory implementation of the [`TableStore`] port.
//!
//! Provides a simple, thread-safe table store for unit testing and
//! embedding without a cloud dependency. Not suitable for production use.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    error::StoreError,
    ports::table::{StoreResult, TableRecord, TableStore},
};

/// In-memory implementation of [`TableStore`].
///
/// Records are held in a [`BTreeMap`] keyed by `(partition key, row key)`,
/// so a prefix query is a filtered scan of the partition. Thread-safe via
/// an internal [`RwLock`].
///
/// # Example
///
/// ```
/// use courier::message::adapters::memory::InMemoryTableStore;
///
/// let store = InMemoryTableStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryTableStore {
    records: Arc<RwLock<BTreeMap<(String, String), TableRecord>>>,
}

impl InMemoryTableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records across all partitions.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the
    /// fallback behaviour of an empty store. For error-propagating
    /// access, use the [`TableStore`] trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn retrieve(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> StoreResult<Option<TableRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .get(&(partition_key.to_owned(), row_key.to_owned()))
            .cloned())
    }

    async fn insert_or_replace(&self, record: TableRecord) -> StoreResult<TableRecord> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        guard.insert(
            (record.partition_key.clone(), record.row_key.clone()),
            record.clone(),
        );

        Ok(record)
    }

    async fn delete(&self, partition_key: &str, row_key: &str) -> StoreResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        guard.remove(&(partition_key.to_owned(), row_key.to_owned()));

        Ok(())
    }

    async fn query_row_key_prefix(
        &self,
        partition_key: &str,
        row_key_prefix: &str,
    ) -> StoreResult<Vec<TableRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .iter()
            .filter(|((partition, row), _)| {
                partition == partition_key && row.starts_with(row_key_prefix)
            })
            .map(|(_, record)| record.clone())
            .collect())
    }
}
