//! Persistence adapters for the campus repository ports.
//!
//! # Example
//!
//! ```
//! use campus::outbound::persistence::InMemoryCampusStore;
//!
//! let store = InMemoryCampusStore::default();
//! // The same store serves every repository port.
//! let _students = store.clone();
//! ```

mod in_memory_campus_store;

pub use in_memory_campus_store::InMemoryCampusStore;
