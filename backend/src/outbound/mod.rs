//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and the storage they
//! sit on. They contain no business logic.
//!
//! - **persistence**: in-process repositories backed by `tokio` locks.

pub mod persistence;
