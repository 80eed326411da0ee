//! Domain ports defining the edges of the hexagon.
//!
//! Each repository trait exposes strongly typed errors so adapters map their
//! failures into predictable variants. Saving a transient entity assigns its
//! id; the returned copy is the persisted one.

mod macros;
pub(crate) use macros::define_port_error;

mod lecture_repository;
mod professor_repository;
mod student_repository;
mod user_repository;

#[cfg(test)]
pub use lecture_repository::MockLectureRepository;
pub use lecture_repository::{LectureRepository, LectureRepositoryError};
#[cfg(test)]
pub use professor_repository::MockProfessorRepository;
pub use professor_repository::{ProfessorRepository, ProfessorRepositoryError};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
