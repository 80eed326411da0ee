//! Domain entities and the ports they are persisted through.
//!
//! Purpose: model users, students, professors, and lectures on top of the
//! shared kernel. Factories and mutations report through
//! [`shared_kernel::Outcome`]; a failed mutation leaves the entity unchanged.
//!
//! Public surface:
//! - User, UserDraft: accounts and their raw input.
//! - Student: grade and timetable of a student account.
//! - Professor: supervised students and taught lectures.
//! - Lecture: named lecture and its teaching staff.
//! - DomainEvent: changes recorded by the entities above.

pub mod events;
pub mod lecture;
pub mod ports;
pub mod professor;
pub mod student;
pub mod user;

pub use self::events::DomainEvent;
pub use self::lecture::{LECTURE_NAME_MAX, Lecture};
pub use self::professor::Professor;
pub use self::student::{GRADE_OUT_OF_RANGE, GRADE_RANGE, Student, is_valid_grade};
pub use self::user::{User, UserDraft};
