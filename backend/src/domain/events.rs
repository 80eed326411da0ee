//! Domain events recorded by campus entities.
//!
//! Entities append events as their state changes; the persistence adapter
//! drains and publishes them once the owning entity is saved.

use serde::Serialize;
use shared_kernel::Email;
use uuid::Uuid;

/// Something that happened to a campus entity.
///
/// Serialised with an internal `type` tag, for example
/// `{"type":"gradeUpdated","previous":0.0,"current":85.5}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    /// A user account was created.
    UserRegistered {
        /// Login of the new account.
        username: Email,
    },
    /// A user became a student.
    StudentEnrolled {
        /// Account the student record belongs to.
        user_id: Uuid,
    },
    /// A student's grade changed.
    GradeUpdated {
        /// Grade before the change.
        previous: f64,
        /// Grade after the change.
        current: f64,
    },
    /// A professor was attached to a lecture.
    ProfessorAssigned {
        /// The assigned professor.
        professor_id: Uuid,
    },
    /// A lecture was created.
    LectureScheduled {
        /// Trimmed lecture name.
        name: String,
    },
}
