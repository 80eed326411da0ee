//! Lectures and their teaching staff.

use shared_kernel::{Entity, EntityBase, Outcome, entity_identity};
use uuid::Uuid;

use super::{DomainEvent, Professor};

/// Maximum number of characters in a lecture name.
pub const LECTURE_NAME_MAX: usize = 100;

/// A scheduled lecture.
///
/// ## Invariants
/// - Name is trimmed, non-empty, and at most [`LECTURE_NAME_MAX`] characters.
#[derive(Debug, Clone)]
pub struct Lecture {
    base: EntityBase<Uuid, DomainEvent>,
    name: String,
    professor_ids: Vec<Uuid>,
}

impl Lecture {
    /// Schedule a lecture called `name`.
    pub fn create(name: &str) -> Outcome<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Outcome::failure("Lecture name should not be empty");
        }
        if trimmed.chars().count() > LECTURE_NAME_MAX {
            return Outcome::failure(format!(
                "Lecture name should not have more than {LECTURE_NAME_MAX} characters"
            ));
        }
        let mut base = EntityBase::transient();
        base.record_event(DomainEvent::LectureScheduled {
            name: trimmed.to_owned(),
        });
        Outcome::success(Self {
            base,
            name: trimmed.to_owned(),
            professor_ids: Vec::new(),
        })
    }

    /// Lecture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Professors teaching the lecture.
    #[must_use]
    pub fn professor_ids(&self) -> &[Uuid] {
        &self.professor_ids
    }

    /// Add a persisted professor to the teaching staff.
    pub fn assign_professor(&mut self, professor: &Professor) -> Outcome {
        if professor.is_transient() {
            return Outcome::failure("Professor must be persisted before assignment");
        }
        let professor_id = *professor.id();
        if self.professor_ids.contains(&professor_id) {
            return Outcome::failure("Professor is already assigned to this lecture");
        }
        self.professor_ids.push(professor_id);
        self.base
            .record_event(DomainEvent::ProfessorAssigned { professor_id });
        Outcome::success(())
    }

    /// Called by persistence once the lecture is stored.
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

impl Entity for Lecture {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        self.base.id()
    }
}

entity_identity!(Lecture);
