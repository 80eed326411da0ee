//! Campus records service built on the shared kernel.
//!
//! - [`domain`]: users, students, professors, lectures, events, and the
//!   repository ports.
//! - [`application`]: services returning [`shared_kernel::Outcome`].
//! - [`inbound`]: the JSON response envelope.
//! - [`outbound`]: the in-memory persistence adapter.
//! - [`example_data`]: deterministic demo seeding.
//! - [`config`]: runtime settings.

pub mod application;
pub mod config;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod outbound;
