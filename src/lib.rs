//! Courier: message persistence over a partitioned table store.
//!
//! This crate provides the data-access layer for channel-scoped messages,
//! mapping domain message objects to records in a partitioned key-value
//! table store and back.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the table-store capability
//! - **Adapters**: Concrete implementations of ports (in-memory, etc.)
//!
//! # Modules
//!
//! - [`message`]: Message entity, row-key scheme, and repository

pub mod message;
