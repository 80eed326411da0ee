//! Teaching staff.

use shared_kernel::{Entity, EntityBase, Outcome, UserType, entity_identity};
use uuid::Uuid;

use super::{DomainEvent, Lecture, Student, User};

/// A user appointed as a professor.
#[derive(Debug, Clone)]
pub struct Professor {
    base: EntityBase<Uuid, DomainEvent>,
    user_id: Uuid,
    student_ids: Vec<Uuid>,
    lecture_ids: Vec<Uuid>,
}

impl Professor {
    /// Appoint a persisted professor account.
    pub fn create(user: &User) -> Outcome<Self> {
        if user.is_transient() {
            return Outcome::failure("User must be persisted before appointment");
        }
        if user.user_type() != UserType::PROFESSOR {
            return Outcome::failure("User must be a professor");
        }
        Outcome::success(Self {
            base: EntityBase::transient(),
            user_id: *user.id(),
            student_ids: Vec::new(),
            lecture_ids: Vec::new(),
        })
    }

    /// Account this record belongs to.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Supervised students.
    #[must_use]
    pub fn student_ids(&self) -> &[Uuid] {
        &self.student_ids
    }

    /// Lectures taught.
    #[must_use]
    pub fn lecture_ids(&self) -> &[Uuid] {
        &self.lecture_ids
    }

    /// Take a persisted student under supervision.
    pub fn assign_student(&mut self, student: &Student) -> Outcome {
        if student.is_transient() {
            return Outcome::failure("Student must be persisted before assignment");
        }
        link(
            &mut self.student_ids,
            *student.id(),
            "Student is already assigned to this professor",
        )
    }

    /// Take on a persisted lecture.
    pub fn assign_lecture(&mut self, lecture: &Lecture) -> Outcome {
        if lecture.is_transient() {
            return Outcome::failure("Lecture must be persisted before assignment");
        }
        link(
            &mut self.lecture_ids,
            *lecture.id(),
            "Lecture is already assigned to this professor",
        )
    }

    /// Called by persistence once the professor is stored.
    pub fn assign_id(&mut self, id: Uuid) -> Outcome {
        self.base.assign_id(id)
    }

    /// Pending domain events.
    #[must_use]
    pub fn events(&self) -> &[DomainEvent] {
        self.base.events()
    }

    /// Drain pending domain events.
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        self.base.take_events()
    }
}

fn link(ids: &mut Vec<Uuid>, id: Uuid, duplicate: &'static str) -> Outcome {
    if ids.contains(&id) {
        return Outcome::failure(duplicate);
    }
    ids.push(id);
    Outcome::success(())
}

impl Entity for Professor {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        self.base.id()
    }
}

entity_identity!(Professor);

#[cfg(test)]
mod tests {
    //! Appointment and assignment rules.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::{fixture, rstest};
    use shared_kernel::UserLevel;

    use super::*;
    use crate::domain::UserDraft;

    fn persisted_user(user_type: &'static UserType) -> User {
        let mut user = User::create(UserDraft {
            username: "edsger@example.org".to_owned(),
            password: "goto".to_owned(),
            first_name: "Edsger".to_owned(),
            last_name: "Dijkstra".to_owned(),
            user_type,
            level: UserLevel::PROFESSOR,
        })
        .into_value()
        .expect("valid user");
        assert!(user.assign_id(Uuid::new_v4()).is_success());
        user
    }

    #[fixture]
    fn professor() -> Professor {
        Professor::create(&persisted_user(UserType::PROFESSOR))
            .into_value()
            .expect("valid professor")
    }

    #[fixture]
    fn lecture() -> Lecture {
        let mut lecture = Lecture::create("Structured Programming")
            .into_value()
            .expect("valid lecture");
        assert!(lecture.assign_id(Uuid::new_v4()).is_success());
        lecture
    }

    #[test]
    fn student_account_cannot_be_appointed() {
        let outcome = Professor::create(&persisted_user(UserType::STUDENT));
        assert_eq!(outcome.error(), "User must be a professor");
    }

    #[rstest]
    fn lecture_assignment_rejects_duplicates(mut professor: Professor, lecture: Lecture) {
        assert!(professor.assign_lecture(&lecture).is_success());
        assert_eq!(
            professor.assign_lecture(&lecture).error(),
            "Lecture is already assigned to this professor"
        );
        assert_eq!(professor.lecture_ids(), [*lecture.id()]);
    }

    #[rstest]
    fn transient_targets_are_rejected(mut professor: Professor) {
        let draft = Lecture::create("Compilers").into_value().expect("valid lecture");
        assert_eq!(
            professor.assign_lecture(&draft).error(),
            "Lecture must be persisted before assignment"
        );
        assert!(professor.lecture_ids().is_empty());
    }

    #[rstest]
    fn students_can_be_supervised_once(mut professor: Professor) {
        let mut student = Student::create(&persisted_user(UserType::STUDENT))
            .into_value()
            .expect("valid student");
        assert_eq!(
            professor.assign_student(&student).error(),
            "Student must be persisted before assignment"
        );
        assert!(student.assign_id(Uuid::new_v4()).is_success());
        assert!(professor.assign_student(&student).is_success());
        assert!(professor.assign_student(&student).is_failure());
        assert_eq!(professor.student_ids().len(), 1);
    }
}
