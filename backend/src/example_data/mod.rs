//! Deterministic demo campus generation and seeding.

mod generator;
mod startup;

pub use generator::{GenerationError, Roster, generate_roster};
pub use startup::{DEMO_LECTURE, SeededCampus, SeedingError, seed_campus};
