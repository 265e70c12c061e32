//! The tagged row-key scheme for the shared data table.
//!
//! Several entity kinds may share one application partition, so every row
//! key carries an entity tag: `{tag};{scopeId};{localId}`. Message rows use
//! the tag `M` with the channel as scope and the message as local id, e.g.
//!
//! ```text
//! M;6f1c…;550e…
//! ```
//!
//! The prefix `M;{channelId};` therefore uniquely scopes all messages of
//! one channel within one application's partition, and the suffix after the
//! last separator is always the message's UUID.

use super::{AppId, ChannelId, MessageId};
use thiserror::Error;
use uuid::Uuid;

/// Separator between the segments of a row key.
pub const KEY_SEPARATOR: char = ';';

/// Entity tag discriminating message rows from other kinds in the table.
pub const MESSAGE_TAG: &str = "M";

/// A row key that does not end in a parseable UUID.
///
/// This component is the sole writer of message row keys, so a malformed
/// key indicates outside interference with the table rather than a
/// recoverable condition.
#[derive(Debug, Error)]
#[error("row key {row_key:?} does not end in a message id")]
pub struct MalformedKeyError {
    /// The offending row key.
    pub row_key: String,
    /// The underlying UUID parse failure.
    #[source]
    pub source: uuid::Error,
}

/// Builds a tagged row key: `{tag};{scope};{local}`.
#[must_use]
pub fn tagged_row_key(tag: &str, scope: Uuid, local: Uuid) -> String {
    format!("{tag}{KEY_SEPARATOR}{scope}{KEY_SEPARATOR}{local}")
}

/// Returns the partition key for an application.
///
/// All channels of one application live under this single partition.
#[must_use]
pub fn partition_key(app_id: AppId) -> String {
    app_id.to_string()
}

/// Builds the row key for a message: `M;{channelId};{messageId}`.
#[must_use]
pub fn message_row_key(channel_id: ChannelId, message_id: MessageId) -> String {
    tagged_row_key(MESSAGE_TAG, channel_id.into_inner(), message_id.into_inner())
}

/// Returns the row-key prefix scoping all messages of a channel:
/// `M;{channelId};`.
#[must_use]
pub fn channel_prefix(channel_id: ChannelId) -> String {
    format!("{MESSAGE_TAG}{KEY_SEPARATOR}{channel_id}{KEY_SEPARATOR}")
}

/// Extracts the message identifier from the suffix of a row key.
///
/// # Errors
///
/// Returns [`MalformedKeyError`] if the text after the last separator is
/// not a valid UUID.
pub fn message_id_from_row_key(row_key: &str) -> Result<MessageId, MalformedKeyError> {
    let suffix = row_key.rsplit(KEY_SEPARATOR).next().unwrap_or(row_key);

    Uuid::parse_str(suffix)
        .map(MessageId::from_uuid)
        .map_err(|source| MalformedKeyError {
            row_key: row_key.to_owned(),
            source,
        })
}
