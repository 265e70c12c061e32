//! Table-store port for partitioned key-value persistence.
//!
//! Defines the abstract capability the repository needs from a table
//! store: point retrieve, insert-or-replace, point delete, and a row-key
//! prefix query within a partition. Records are deliberately generic —
//! keys plus an opaque JSON document — so entity kinds other than
//! messages can share the same table and partition.

use crate::message::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result type for table-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A single record in the partitioned table.
///
/// The partition key groups related rows; the row key is unique within
/// its partition. All remaining columns travel as one opaque JSON
/// document owned by whichever entity kind wrote the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    /// The partition this record belongs to.
    pub partition_key: String,

    /// The record's key within the partition.
    pub row_key: String,

    /// The record's columns as an opaque JSON document.
    pub document: Value,
}

impl TableRecord {
    /// Creates a record from its keys and document.
    #[must_use]
    pub fn new(
        partition_key: impl Into<String>,
        row_key: impl Into<String>,
        document: Value,
    ) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
            document,
        }
    }
}

/// Port for partitioned table-store access.
///
/// Implementations provide the actual storage mechanism (a managed cloud
/// table service, in-memory for testing) while the repository remains
/// storage-agnostic.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - `insert_or_replace` and `delete` are atomic per record
/// - A prefix query returns every record in the partition whose row key
///   starts with the prefix; ordering is unspecified (the repository
///   sorts in memory)
/// - Absence is a value, not an error: a missing record yields `None`
///   from [`TableStore::retrieve`] and is ignored by [`TableStore::delete`]
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Retrieves a single record by exact partition and row key.
    ///
    /// Returns `None` if no such record exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be reached or the
    /// lookup fails.
    async fn retrieve(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> StoreResult<Option<TableRecord>>;

    /// Creates the record or fully replaces an existing one, atomically.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    async fn insert_or_replace(&self, record: TableRecord) -> StoreResult<TableRecord>;

    /// Removes the record at the given keys if present.
    ///
    /// Deleting an absent record is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the delete fails.
    async fn delete(&self, partition_key: &str, row_key: &str) -> StoreResult<()>;

    /// Returns every record in the partition whose row key starts with
    /// the given prefix, in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails.
    async fn query_row_key_prefix(
        &self,
        partition_key: &str,
        row_key_prefix: &str,
    ) -> StoreResult<Vec<TableRecord>>;
}
