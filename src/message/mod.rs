//! Channel-scoped message persistence.
//!
//! This module implements the message data layer: domain types, the row-key
//! encoding scheme, and a repository that reads and writes messages through
//! an abstracted partitioned table store.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::AppId`],
//!   [`domain::ChannelId`], [`domain::MessageId`]) and the tagged row-key
//!   scheme ([`domain::keys`])
//! - **Ports**: The abstract table-store capability
//!   ([`ports::table::TableStore`])
//! - **Adapters**: Concrete implementations and storage models
//!   ([`adapters::memory::InMemoryTableStore`],
//!   [`adapters::models::MessageEntity`])
//! - **Repository**: The four operations — get, list, upsert, delete
//!   ([`repository::MessageRepository`])
//!
//! # Example
//!
//! ```
//! use courier::message::domain::{keys, ChannelId, Message};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let message = Message::new("Hello, channel!", "user-42", &clock);
//!
//! let channel_id = ChannelId::new();
//! let row_key = keys::message_row_key(channel_id, message.id());
//! assert!(row_key.starts_with(&keys::channel_prefix(channel_id)));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod repository;

#[cfg(test)]
mod tests;
