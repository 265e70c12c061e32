//! The Message entity representing a single record within a channel.
//!
//! Messages carry an opaque payload plus creation and last-update audit
//! fields. They are plain values: the repository fully replaces a stored
//! record on every upsert, so no in-place mutation is exposed beyond the
//! builder-style setters used before the first write.

use super::MessageId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message within a channel.
///
/// # Invariants
///
/// - `id` is always a valid, non-nil UUID
/// - `created_at` and `updated_at` are always populated
/// - A freshly constructed message has `updated_at == created_at` and
///   `updated_by == created_by`
///
/// # Examples
///
/// ```
/// use courier::message::domain::Message;
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::new("payload", "user-42", &clock);
///
/// assert_eq!(message.value(), "payload");
/// assert_eq!(message.updated_at(), message.created_at());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The opaque payload.
    value: String,

    /// When the message was created.
    created_at: DateTime<Utc>,

    /// The actor that created the message.
    created_by: String,

    /// When the message was last updated.
    updated_at: DateTime<Utc>,

    /// The actor that last updated the message.
    updated_by: String,

    /// Opaque auxiliary payload.
    custom_data: String,
}

impl Message {
    /// Creates a new message with a random identifier and the current
    /// timestamp taken from the supplied clock.
    ///
    /// The update audit fields start out equal to the creation fields.
    #[must_use]
    pub fn new(value: impl Into<String>, created_by: impl Into<String>, clock: &impl Clock) -> Self {
        let created_at = clock.utc();
        let created_by = created_by.into();

        Self {
            id: MessageId::new(),
            value: value.into(),
            created_at,
            created_by: created_by.clone(),
            updated_at: created_at,
            updated_by: created_by,
            custom_data: String::new(),
        }
    }

    /// Reconstructs a message from its stored fields.
    ///
    /// Used by storage adapters when decoding a persisted record; callers
    /// creating new messages should use [`Message::new`].
    #[expect(
        clippy::too_many_arguments,
        reason = "Reconstruction requires every persisted field"
    )]
    #[must_use]
    pub fn from_parts(
        id: MessageId,
        value: impl Into<String>,
        created_at: DateTime<Utc>,
        created_by: impl Into<String>,
        updated_at: DateTime<Utc>,
        updated_by: impl Into<String>,
        custom_data: impl Into<String>,
    ) -> Self {
        Self {
            id,
            value: value.into(),
            created_at,
            created_by: created_by.into(),
            updated_at,
            updated_by: updated_by.into(),
            custom_data: custom_data.into(),
        }
    }

    /// Attaches auxiliary data, consuming and returning the message.
    #[must_use]
    pub fn with_custom_data(mut self, custom_data: impl Into<String>) -> Self {
        self.custom_data = custom_data.into();
        self
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the opaque payload.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the actor that created the message.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the actor that last updated the message.
    #[must_use]
    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }

    /// Returns the auxiliary payload.
    #[must_use]
    pub fn custom_data(&self) -> &str {
        &self.custom_data
    }
}
