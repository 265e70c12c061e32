//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod ids;
mod message;

pub mod keys;

pub use ids::{AppId, ChannelId, MessageId};
pub use keys::MalformedKeyError;
pub use message::Message;
