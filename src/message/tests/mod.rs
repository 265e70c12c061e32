//! Unit tests for the message module.
//!
//! Tests are organised by concept, covering happy paths, error cases, and
//! edge cases for all public APIs.

mod id_tests;
mod memory_store_tests;
