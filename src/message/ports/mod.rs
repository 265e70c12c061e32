//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the repository requires from
//! infrastructure. Adapters implement these ports to connect the domain to
//! a concrete table store.

pub mod table;

pub use table::{StoreResult, TableRecord, TableStore};
