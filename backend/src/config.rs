//! Runtime settings loaded via OrthoConfig.
//!
//! Values layer defaults, `CAMPUS_*` environment variables, and command-line
//! flags, in that order.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_STUDENT_COUNT: usize = 3;
const DEFAULT_DEMO_GRADE: f64 = 85.5;

/// Settings for the campus demo binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAMPUS")]
pub struct CampusSettings {
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Seed for the generated roster.
    pub seed: Option<u64>,
    /// Number of students to generate.
    pub student_count: Option<usize>,
    /// Grade awarded to the first generated student.
    pub demo_grade: Option<f64>,
}

impl CampusSettings {
    /// Return the configured roster seed, falling back to the default.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Return the configured student count, falling back to the default.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.student_count.unwrap_or(DEFAULT_STUDENT_COUNT)
    }

    /// Return the configured demo grade, falling back to the default.
    #[must_use]
    pub fn demo_grade(&self) -> f64 {
        self.demo_grade.unwrap_or(DEFAULT_DEMO_GRADE)
    }
}
