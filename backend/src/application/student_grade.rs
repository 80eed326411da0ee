//! Grade updates for enrolled students.

use std::sync::Arc;

use shared_kernel::{Outcome, ValidationReport};
use tracing::{info, warn};
use uuid::Uuid;

use super::{found, stored};
use crate::domain::ports::StudentRepository;
use crate::domain::{GRADE_OUT_OF_RANGE, Student, is_valid_grade};

/// Failure text for a missing student id.
pub const STUDENT_ID_REQUIRED: &str = "Student ID is required";
/// Failure text for an unknown student.
pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// Request to replace a student's grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateStudentGradeCommand {
    /// Student to grade.
    pub student_id: Uuid,
    /// Replacement grade.
    pub new_grade: f64,
}

impl UpdateStudentGradeCommand {
    /// Check the command before any lookup happens.
    ///
    /// # Examples
    /// ```
    /// use campus::application::UpdateStudentGradeCommand;
    /// use uuid::Uuid;
    ///
    /// let command = UpdateStudentGradeCommand { student_id: Uuid::nil(), new_grade: 120.0 };
    /// assert_eq!(
    ///     command.validate().error(),
    ///     "Student ID is required; Grade must be between 0 and 100"
    /// );
    /// ```
    pub fn validate(&self) -> Outcome {
        let mut report = ValidationReport::default();
        report
            .check(!self.student_id.is_nil(), STUDENT_ID_REQUIRED)
            .check(is_valid_grade(self.new_grade), GRADE_OUT_OF_RANGE);
        report.into_outcome(())
    }
}

/// Applies [`UpdateStudentGradeCommand`]s.
#[derive(Clone)]
pub struct StudentGradeService<S> {
    students: Arc<S>,
}

impl<S> StudentGradeService<S> {
    /// Create a new service over the given repository.
    pub const fn new(students: Arc<S>) -> Self {
        Self { students }
    }
}

impl<S: StudentRepository> StudentGradeService<S> {
    /// Validate, load, regrade, and save.
    ///
    /// The stored student is only replaced when every step succeeds.
    pub async fn update_grade(&self, command: UpdateStudentGradeCommand) -> Outcome {
        let student_id = command.student_id;
        command
            .validate()
            .bind_async(|()| self.load(student_id))
            .await
            .bind(|mut student| student.update_grade(command.new_grade).map(|()| student))
            .bind_async(|student| self.save(student))
            .await
            .on_success(|_| info!(%student_id, grade = command.new_grade, "student grade updated"))
            .on_failure(|message| warn!(%student_id, error = message, "grade update rejected"))
    }

    async fn load(&self, student_id: Uuid) -> Outcome<Student> {
        found(self.students.find_by_id(&student_id).await, STUDENT_NOT_FOUND)
    }

    async fn save(&self, student: Student) -> Outcome {
        stored(self.students.save(student).await).map(|_| ())
    }
}
