//! Student records and grading.

use std::ops::RangeInclusive;

use shared_kernel::{Entity, EntityBase, Outcome, UserType, entity_identity};
use uuid::Uuid;

use super::{DomainEvent, User};

/// Accepted grades, bounds included.
pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Failure text for a grade outside [`GRADE_RANGE`].
pub const GRADE_OUT_OF_RANGE: &str = "Grade must be between 0 and 100";

/// Whether `grade` lies in [`GRADE_RANGE`]. `NaN` never does.
#[must_use]
pub fn is_valid_grade(grade: f64) -> bool {
    GRADE_RANGE.contains(&grade)
}

/// A user enrolled as a student.
#[derive(Debug, Clone)]
pub struct Student {
    base: EntityBase<Uuid, DomainEvent>,
    grade: f64,
    user_id: Uuid,
    lecture_ids: Vec<Uuid>,
    professor_ids: Vec<Uuid>,
}

impl Student {
    /// Enrol a persisted student account. The grade starts at zero.
    pub fn create(user: &User) -> Outcome<Self> {
        if user.is_transient() {
            return Outcome::failure("User must be persisted before enrolment");
        }
        if user.user_type() != UserType::STUDENT {
            return Outcome::failure("User must be a student");
        }
        let mut base = EntityBase::transient();
        base.record_event(DomainEvent::StudentEnrolled {
            user_id: *user.id(),
        });
        Outcome::success(Self {
            base,
            grade: 0.0,
            user_id: *user.id(),
            lecture_ids: Vec::new(),
            professor_ids: Vec::new(),
        })
    }

    /// Current grade.
    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.grade
    }

    /// Account this record belongs to.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Lectures the student attends.
    #[must_use]
    pub fn lecture_ids(&self) -> &[Uuid] {
        &self.lecture_ids
    }

    /// Professors supervising the student.
    #[must_use]
    pub fn professor_ids(&self) -> &[Uuid] {
        &self.professor_ids
    }

    /// Replace the grade.
    ///
    /// Fails with [`GRADE_OUT_OF_RANGE`] and keeps the old grade unless
    /// `new_grade` lies in [`GRADE_RANGE`].
    pub fn update_grade(&mut self, new_grade: f64) -> Outcome {
        if !is_valid_grade(new_grade) {
            return Outcome::failure(GRADE_OUT_OF_RANGE);
        }
        let previous = self.grade;
        self.grade = new_grade;
        self.base.record_event(DomainEvent::GradeUpdated {
            previous,
            current: new_grade,
        });
        Outcome::success(())
    }

    /// Add a lecture to the student's timetable.
    pub fn enrol_in(&mut self, lecture_id: Uuid) -> Outcome {
        if lecture_id.is_nil() {
            return Outcome::failure("Lecture ID is required");
        }
        if self.lecture_ids.contains(&lecture_id) {
            return Outcome::failure("Student is already enrolled in this lecture");
        }
        self.lecture_ids.push(lecture_id);
        Outcome::success(())
    }

    /// Record a supervising professor.
    pub fn assign_professor(&mut self, professor_id: Uuid) -> Outcome {
        if professor_id.is_nil() {
            return Outcome::failure("Professor ID is required");
        }
        if self.professor_ids.contains(&professor_id) {
            return Outcome::failure("Professor is already assigned to this student");
        }
        self.professor_ids.push(professor_id);
        Outcome::success(())
    }

    /// Called by persistence once the student is stored.
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

impl Entity for Student {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        self.base.id()
    }
}

entity_identity!(Student);
