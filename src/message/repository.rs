//! The message repository: CRUD access to channel-scoped messages.
//!
//! Translates domain [`Message`] objects to and from partitioned table
//! records and answers point lookups, bounded reverse-chronological
//! listings, upserts, and deletes against any [`TableStore`].
//!
//! Store failures propagate verbatim to the caller; the repository
//! performs no retries, no classification, and no wrapping. A legitimate
//! miss is a value (`None` / `false`), never an error.

use super::{
    adapters::models::{self, MessageEntity},
    domain::{AppId, ChannelId, Message, MessageId, keys},
    ports::table::{StoreResult, TableRecord, TableStore},
};

/// Repository for channel-scoped messages over a partitioned table store.
///
/// Generic over the [`TableStore`] port so tests can substitute an
/// in-memory store for the managed table service used in production.
#[derive(Debug, Clone)]
pub struct MessageRepository<S> {
    store: S,
}

impl<S: TableStore> MessageRepository<S> {
    /// Creates a repository over the given table store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Retrieves the raw record for a message, if present.
    async fn retrieve_record(
        &self,
        app_id: AppId,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> StoreResult<Option<TableRecord>> {
        self.store
            .retrieve(
                &keys::partition_key(app_id),
                &keys::message_row_key(channel_id, message_id),
            )
            .await
    }

    /// Retrieves a single message by exact partition and row key.
    ///
    /// Returns `Ok(None)` if no such message exists.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the underlying store or from
    /// decoding the stored record.
    ///
    /// [`StoreError`]: crate::message::error::StoreError
    pub async fn get(
        &self,
        app_id: AppId,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> StoreResult<Option<Message>> {
        let record = self.retrieve_record(app_id, channel_id, message_id).await?;

        record.as_ref().map(models::decode_message).transpose()
    }

    /// Lists the messages of a channel, most recent first.
    ///
    /// Queries every row key beginning with `M;{channelId};` inside the
    /// application's partition, sorts by creation time descending, and —
    /// when `last_n > 0` — keeps only the first `last_n` items of that
    /// ordering. `last_n == 0` returns all matches. A channel with no
    /// messages yields an empty vec.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the underlying store or from
    /// decoding a stored record.
    ///
    /// [`StoreError`]: crate::message::error::StoreError
    pub async fn get_all(
        &self,
        app_id: AppId,
        channel_id: ChannelId,
        last_n: usize,
    ) -> StoreResult<Vec<Message>> {
        let records = self
            .store
            .query_row_key_prefix(
                &keys::partition_key(app_id),
                &keys::channel_prefix(channel_id),
            )
            .await?;

        let mut messages = records
            .iter()
            .map(models::decode_message)
            .collect::<StoreResult<Vec<_>>>()?;

        messages.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        if last_n > 0 {
            messages.truncate(last_n);
        }

        Ok(messages)
    }

    /// Creates the message or fully replaces an existing record.
    ///
    /// The persisted record takes its update audit fields from the
    /// message's creation fields — every upsert is treated as an insert,
    /// overwriting any previous `updated_at`/`updated_by`. Last writer
    /// wins; there is no optimistic-concurrency check.
    ///
    /// Returns the message as decoded from the stored record.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the underlying store or from
    /// encoding/decoding the record.
    ///
    /// [`StoreError`]: crate::message::error::StoreError
    pub async fn upsert(
        &self,
        app_id: AppId,
        channel_id: ChannelId,
        message: &Message,
    ) -> StoreResult<Message> {
        let record = MessageEntity::from_message(message).into_record(
            app_id,
            channel_id,
            message.id(),
        )?;

        let stored = self.store.insert_or_replace(record).await?;

        models::decode_message(&stored)
    }

    /// Removes a message, reporting whether it existed.
    ///
    /// Performs a point lookup first; if the message is absent, returns
    /// `Ok(false)` without issuing a mutating call. Otherwise deletes
    /// that exact record and returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the underlying store.
    ///
    /// [`StoreError`]: crate::message::error::StoreError
    pub async fn delete(
        &self,
        app_id: AppId,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> StoreResult<bool> {
        let existing = self.retrieve_record(app_id, channel_id, message_id).await?;

        let Some(record) = existing else {
            return Ok(false);
        };

        self.store
            .delete(&record.partition_key, &record.row_key)
            .await?;

        Ok(true)
    }
}
