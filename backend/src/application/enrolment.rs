//! Registration, enrolment, appointment, and timetabling.

use std::sync::Arc;

use shared_kernel::{Entity, Outcome};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::student_grade::STUDENT_NOT_FOUND;
use super::user_info::USER_NOT_FOUND;
use super::{found, stored, unavailable};
use crate::domain::ports::{
    LectureRepository, ProfessorRepository, StudentRepository, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Lecture, Professor, Student, User, UserDraft};

/// Failure text for a username that already belongs to an account.
pub const USERNAME_TAKEN: &str = "Username is already registered";
/// Failure text for a user who already has a student record.
pub const ALREADY_ENROLLED: &str = "User is already enrolled as a student";
/// Failure text for a user who already has a professor record.
pub const ALREADY_APPOINTED: &str = "User is already appointed as a professor";
/// Failure text for an unknown professor.
pub const PROFESSOR_NOT_FOUND: &str = "Professor not found";
/// Failure text for an unknown lecture.
pub const LECTURE_NOT_FOUND: &str = "Lecture not found";

/// Creates campus records through the domain factories and persists them.
///
/// Ids are assigned by the repositories, so every returned entity is
/// persisted.
#[derive(Clone)]
pub struct EnrolmentService<U, S, P, L> {
    users: Arc<U>,
    students: Arc<S>,
    professors: Arc<P>,
    lectures: Arc<L>,
}

impl<U, S, P, L> EnrolmentService<U, S, P, L> {
    /// Create a new service over the given repositories.
    pub const fn new(
        users: Arc<U>,
        students: Arc<S>,
        professors: Arc<P>,
        lectures: Arc<L>,
    ) -> Self {
        Self {
            users,
            students,
            professors,
            lectures,
        }
    }
}

impl<U, S, P, L> EnrolmentService<U, S, P, L>
where
    U: UserRepository,
    S: StudentRepository,
    P: ProfessorRepository,
    L: LectureRepository,
{
    /// Create and store a user account with a unique username.
    pub async fn register_user(&self, draft: UserDraft) -> Outcome<User> {
        User::create(draft)
            .bind_async(|user| async move {
                match self.users.find_by_username(user.username()).await {
                    Ok(None) => Outcome::success(user),
                    Ok(Some(_)) => Outcome::failure(USERNAME_TAKEN),
                    Err(err) => unavailable(err),
                }
            })
            .await
            .bind_async(|user| async move {
                match self.users.save(user).await {
                    Err(UserRepositoryError::DuplicateUsername { .. }) => {
                        Outcome::failure(USERNAME_TAKEN)
                    }
                    write => stored(write),
                }
            })
            .await
            .on_success(|user| {
                info!(user_id = %user.id(), username = %user.username(), "user registered");
            })
            .on_failure(|message| warn!(error = message, "user registration rejected"))
    }

    /// Give a stored student account its student record.
    pub async fn enrol_student(&self, user_id: Uuid) -> Outcome<Student> {
        found(self.users.find_by_id(&user_id).await, USER_NOT_FOUND)
            .bind_async(|user| async move {
                match self.students.find_by_user_id(user.id()).await {
                    Ok(None) => Student::create(&user),
                    Ok(Some(_)) => Outcome::failure(ALREADY_ENROLLED),
                    Err(err) => unavailable(err),
                }
            })
            .await
            .bind_async(|student| async move { stored(self.students.save(student).await) })
            .await
            .on_success(|student| info!(%user_id, student_id = %student.id(), "student enrolled"))
            .on_failure(|message| warn!(%user_id, error = message, "enrolment rejected"))
    }

    /// Give a stored professor account its professor record.
    pub async fn appoint_professor(&self, user_id: Uuid) -> Outcome<Professor> {
        found(self.users.find_by_id(&user_id).await, USER_NOT_FOUND)
            .bind_async(|user| async move {
                match self.professors.find_by_user_id(user.id()).await {
                    Ok(None) => Professor::create(&user),
                    Ok(Some(_)) => Outcome::failure(ALREADY_APPOINTED),
                    Err(err) => unavailable(err),
                }
            })
            .await
            .bind_async(|professor| async move { stored(self.professors.save(professor).await) })
            .await
            .on_success(|professor| {
                info!(%user_id, professor_id = %professor.id(), "professor appointed");
            })
            .on_failure(|message| warn!(%user_id, error = message, "appointment rejected"))
    }

    /// Create and store a lecture.
    pub async fn schedule_lecture(&self, name: &str) -> Outcome<Lecture> {
        Lecture::create(name)
            .bind_async(|lecture| async move { stored(self.lectures.save(lecture).await) })
            .await
            .on_success(|lecture| {
                info!(lecture_id = %lecture.id(), name = lecture.name(), "lecture scheduled");
            })
            .on_failure(|message| warn!(error = message, "lecture rejected"))
    }

    /// Link a professor and a lecture in both directions and store both.
    ///
    /// The professor is written first. If the lecture cannot be stored, the
    /// professor's previous copy is written back.
    pub async fn assign_lecture(&self, professor_id: Uuid, lecture_id: Uuid) -> Outcome {
        found(self.professors.find_by_id(&professor_id).await, PROFESSOR_NOT_FOUND)
            .bind_async(|professor| async move {
                found(self.lectures.find_by_id(&lecture_id).await, LECTURE_NOT_FOUND)
                    .map(|lecture| (professor, lecture))
            })
            .await
            .bind_async(|(professor, mut lecture)| async move {
                let mut linked = professor.clone();
                let outcome = linked
                    .assign_lecture(&lecture)
                    .bind(|()| lecture.assign_professor(&linked));
                outcome
                    .bind_async(|()| {
                        self.save_linked(professor, linked, || async move {
                            stored(self.lectures.save(lecture).await)
                        })
                    })
                    .await
            })
            .await
            .on_success(|_| info!(%professor_id, %lecture_id, "lecture assigned"))
            .on_failure(|message| {
                warn!(%professor_id, %lecture_id, error = message, "lecture assignment rejected");
            })
    }

    /// Put a student under a professor's supervision and store both records.
    ///
    /// Writes follow [`Self::assign_lecture`]: professor first, restored if
    /// the student cannot be stored.
    pub async fn assign_supervisor(&self, professor_id: Uuid, student_id: Uuid) -> Outcome {
        found(self.professors.find_by_id(&professor_id).await, PROFESSOR_NOT_FOUND)
            .bind_async(|professor| async move {
                found(self.students.find_by_id(&student_id).await, STUDENT_NOT_FOUND)
                    .map(|student| (professor, student))
            })
            .await
            .bind_async(|(professor, mut student)| async move {
                let mut linked = professor.clone();
                let outcome = linked
                    .assign_student(&student)
                    .bind(|()| student.assign_professor(*linked.id()));
                outcome
                    .bind_async(|()| {
                        self.save_linked(professor, linked, || async move {
                            stored(self.students.save(student).await)
                        })
                    })
                    .await
            })
            .await
            .on_success(|_| info!(%professor_id, %student_id, "supervisor assigned"))
            .on_failure(|message| {
                warn!(%professor_id, %student_id, error = message, "supervision rejected");
            })
    }

    /// Add a stored lecture to a student's timetable.
    pub async fn enrol_in_lecture(&self, student_id: Uuid, lecture_id: Uuid) -> Outcome {
        found(self.students.find_by_id(&student_id).await, STUDENT_NOT_FOUND)
            .bind_async(|mut student| async move {
                found(self.lectures.find_by_id(&lecture_id).await, LECTURE_NOT_FOUND)
                    .bind(|lecture| student.enrol_in(*lecture.id()))
                    .map(|()| student)
            })
            .await
            .bind_async(|student| async move { stored(self.students.save(student).await) })
            .await
            .map(|_| ())
            .on_success(|_| info!(%student_id, %lecture_id, "student joined lecture"))
            .on_failure(|message| {
                warn!(%student_id, %lecture_id, error = message, "lecture enrolment rejected");
            })
    }

    async fn save_linked<T, F, Fut>(
        &self,
        previous: Professor,
        linked: Professor,
        save_other: F,
    ) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        let first = stored(self.professors.save(linked).await);
        if first.is_failure() {
            return first.map(|_| ());
        }
        let outcome = save_other().await.map(|_| ());
        if outcome.is_failure() {
            self.restore_professor(previous).await;
        }
        outcome
    }

    async fn restore_professor(&self, previous: Professor) {
        let professor_id = *previous.id();
        match self.professors.save(previous).await {
            Ok(_) => warn!(%professor_id, "professor links rolled back"),
            Err(err) => error!(%professor_id, error = %err, "professor rollback failed"),
        }
    }
}
