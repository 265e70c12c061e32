//! Storage model for message records.
//!
//! [`MessageEntity`] is the persisted shape of a message: every domain
//! field mirrored 1:1 inside a table record's JSON document. It serves as
//! the boundary between the table store and the domain layer. The message
//! id itself is not a document field; it lives in the row-key suffix and
//! is recovered from there on decode.

use crate::message::{
    domain::{AppId, ChannelId, Message, MessageId, keys},
    ports::table::{StoreResult, TableRecord},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted shape of a message within a table record document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    /// The opaque payload.
    pub value: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// The actor that created the message.
    pub created_by: String,
    /// When the message was last updated.
    pub updated_at: DateTime<Utc>,
    /// The actor that last updated the message.
    pub updated_by: String,
    /// Opaque auxiliary payload.
    pub custom_data: String,
}

impl MessageEntity {
    /// Builds the entity persisted for an upsert of the given message.
    ///
    /// Every upsert is treated as an insert: the update audit fields are
    /// set from the message's creation fields, overwriting whatever a
    /// previously stored record carried.
    #[must_use]
    pub fn from_message(message: &Message) -> Self {
        Self {
            value: message.value().to_owned(),
            created_at: message.created_at(),
            created_by: message.created_by().to_owned(),
            updated_at: message.created_at(),
            updated_by: message.created_by().to_owned(),
            custom_data: message.custom_data().to_owned(),
        }
    }

    /// Encodes the entity into a table record addressed by the composite
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the entity cannot be
    /// encoded as a JSON document.
    ///
    /// [`StoreError::Serialization`]: crate::message::error::StoreError::Serialization
    pub fn into_record(
        self,
        app_id: AppId,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> StoreResult<TableRecord> {
        let document = serde_json::to_value(self)?;

        Ok(TableRecord::new(
            keys::partition_key(app_id),
            keys::message_row_key(channel_id, message_id),
            document,
        ))
    }

    /// Decodes the entity from a table record's document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the document does not
    /// match the persisted shape.
    ///
    /// [`StoreError::Serialization`]: crate::message::error::StoreError::Serialization
    pub fn from_record(record: &TableRecord) -> StoreResult<Self> {
        Ok(serde_json::from_value(record.document.clone())?)
    }

    /// Converts the entity into a domain message with the given id.
    #[must_use]
    pub fn into_message(self, id: MessageId) -> Message {
        Message::from_parts(
            id,
            self.value,
            self.created_at,
            self.created_by,
            self.updated_at,
            self.updated_by,
            self.custom_data,
        )
    }
}

/// Decodes a full table record into a domain message, recovering the
/// message id from the row-key suffix.
///
/// # Errors
///
/// Returns [`StoreError`] if the row key does not end in a UUID or the
/// document does not match the persisted shape.
///
/// [`StoreError`]: crate::message::error::StoreError
pub fn decode_message(record: &TableRecord) -> StoreResult<Message> {
    let id = keys::message_id_from_row_key(&record.row_key)?;
    let entity = MessageEntity::from_record(record)?;

    Ok(entity.into_message(id))
}
