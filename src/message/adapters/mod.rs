//! Storage adapters for the message module.
//!
//! This module provides the storage-layer record shape and concrete
//! implementations of the [`TableStore`] port, following hexagonal
//! architecture principles. Adapters handle all infrastructure concerns
//! while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTableStore`]: Thread-safe in-memory storage for
//!   unit testing and embedding
//!
//! [`TableStore`]: crate::message::ports::table::TableStore

pub mod memory;
pub mod models;
