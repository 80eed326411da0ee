//! Demo campus seeding orchestration.

use std::sync::Arc;

use shared_kernel::{Entity, ErrorMessage, Outcome};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::generator::{GenerationError, generate_roster};
use crate::application::{EnrolmentService, StudentGradeService, UpdateStudentGradeCommand};
use crate::config::CampusSettings;
use crate::domain::ports::{
    LectureRepository, ProfessorRepository, StudentRepository, UserRepository,
};

/// Name of the lecture every demo student attends.
pub const DEMO_LECTURE: &str = "Introduction to Domain Modelling";

/// Errors returned while seeding the demo campus.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Roster generation failed.
    #[error("roster generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A service rejected one of the seeding steps.
    #[error("{step} rejected: {source}")]
    Rejected {
        /// Step that failed.
        step: &'static str,
        /// Failure text reported by the service.
        #[source]
        source: ErrorMessage,
    },
}

/// Identifiers of the records created by [`seed_campus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededCampus {
    /// Professor teaching the demo lecture.
    pub professor_id: Uuid,
    /// The demo lecture.
    pub lecture_id: Uuid,
    /// User accounts behind the student records, in roster order.
    pub student_user_ids: Vec<Uuid>,
    /// Student records, in roster order.
    pub student_ids: Vec<Uuid>,
}

/// Populate `store` with a generated professor, lecture, and students, and
/// grade the first student.
///
/// # Errors
///
/// Returns [`SeedingError`] when generation fails or any service rejects a
/// step.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use campus::config::CampusSettings;
/// use campus::example_data::seed_campus;
/// use campus::outbound::persistence::InMemoryCampusStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = CampusSettings {
///     json_logs: false,
///     seed: Some(1),
///     student_count: Some(2),
///     demo_grade: None,
/// };
/// let campus = seed_campus(&settings, Arc::new(InMemoryCampusStore::default())).await?;
/// assert_eq!(campus.student_ids.len(), 2);
/// # Ok(())
/// # }
/// ```
pub async fn seed_campus<R>(
    settings: &CampusSettings,
    store: Arc<R>,
) -> Result<SeededCampus, SeedingError>
where
    R: UserRepository + StudentRepository + ProfessorRepository + LectureRepository,
{
    let roster = generate_roster(settings.seed(), settings.student_count())?;
    let enrolment = EnrolmentService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
    );
    let grades = StudentGradeService::new(store);

    let professor_user = accepted(
        "register professor",
        enrolment.register_user(roster.professor).await,
    )?;
    let professor = accepted(
        "appoint professor",
        enrolment.appoint_professor(*professor_user.id()).await,
    )?;
    let lecture = accepted(
        "schedule lecture",
        enrolment.schedule_lecture(DEMO_LECTURE).await,
    )?;
    accepted(
        "assign lecture",
        enrolment.assign_lecture(*professor.id(), *lecture.id()).await,
    )?;

    let mut student_user_ids = Vec::with_capacity(roster.students.len());
    let mut student_ids = Vec::with_capacity(roster.students.len());
    for draft in roster.students {
        let user = accepted("register student", enrolment.register_user(draft).await)?;
        let student = accepted("enrol student", enrolment.enrol_student(*user.id()).await)?;
        accepted(
            "join lecture",
            enrolment.enrol_in_lecture(*student.id(), *lecture.id()).await,
        )?;
        student_user_ids.push(*user.id());
        student_ids.push(*student.id());
    }

    if let Some(first) = student_ids.first() {
        accepted(
            "update grade",
            grades
                .update_grade(UpdateStudentGradeCommand {
                    student_id: *first,
                    new_grade: settings.demo_grade(),
                })
                .await,
        )?;
    }

    info!(
        professor_id = %professor.id(),
        lecture_id = %lecture.id(),
        students = student_ids.len(),
        "demo campus seeded"
    );
    Ok(SeededCampus {
        professor_id: *professor.id(),
        lecture_id: *lecture.id(),
        student_user_ids,
        student_ids,
    })
}

fn accepted<T>(step: &'static str, outcome: Outcome<T>) -> Result<T, SeedingError> {
    outcome
        .into_result()
        .map_err(|source| SeedingError::Rejected { step, source })
}
