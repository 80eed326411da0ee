//! Application services orchestrating the campus domain.
//!
//! Services own `Arc`-wrapped repository ports and report every result as an
//! [`Outcome`]. Repository errors are logged here and surface as failure text.

use std::fmt::Display;

use shared_kernel::Outcome;
use tracing::error;

pub mod enrolment;
pub mod student_grade;
pub mod user_info;

pub use enrolment::{
    ALREADY_APPOINTED, ALREADY_ENROLLED, EnrolmentService, LECTURE_NOT_FOUND,
    PROFESSOR_NOT_FOUND, USERNAME_TAKEN,
};
pub use student_grade::{
    STUDENT_ID_REQUIRED, STUDENT_NOT_FOUND, StudentGradeService, UpdateStudentGradeCommand,
};
pub use user_info::{
    GetUserInfoQuery, USER_ID_REQUIRED, USER_NOT_FOUND, UserInfo, UserInfoService,
};

/// Turn a repository lookup into an outcome, failing with `missing` when the
/// row does not exist.
fn found<T, E: Display>(lookup: Result<Option<T>, E>, missing: &'static str) -> Outcome<T> {
    match lookup {
        Ok(Some(row)) => Outcome::success(row),
        Ok(None) => Outcome::failure(missing),
        Err(err) => unavailable(err),
    }
}

fn unavailable<T, E: Display>(err: E) -> Outcome<T> {
    error!(error = %err, "repository call failed");
    Outcome::from_result(Err(err))
}

/// Turn a repository write into an outcome.
fn stored<T, E: Display>(write: Result<T, E>) -> Outcome<T> {
    match write {
        Ok(row) => Outcome::success(row),
        Err(err) => unavailable(err),
    }
}
