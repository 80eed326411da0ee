//! In-process store implementing every campus repository port.
//!
//! Saving a transient entity assigns a fresh UUID v4. Pending domain events
//! are drained on save, logged, and kept in publication order. Usernames are
//! unique across users.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared_kernel::{Email, Entity};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    LectureRepository, LectureRepositoryError, ProfessorRepository, ProfessorRepositoryError,
    StudentRepository, StudentRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{DomainEvent, Lecture, Professor, Student, User};

/// Entities the store can persist.
trait Stored: Entity<Id = Uuid> + Clone + Send + Sync {
    fn assign_id(&mut self, id: Uuid) -> shared_kernel::Outcome;
    fn take_events(&mut self) -> Vec<DomainEvent>;
}

macro_rules! stored {
    ($($ty:ty),+) => {
        $(
            impl Stored for $ty {
                fn assign_id(&mut self, id: Uuid) -> shared_kernel::Outcome {
                    <$ty>::assign_id(self, id)
                }

                fn take_events(&mut self) -> Vec<DomainEvent> {
                    <$ty>::take_events(self)
                }
            }
        )+
    };
}

stored!(User, Student, Professor, Lecture);

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    students: HashMap<Uuid, Student>,
    professors: HashMap<Uuid, Professor>,
    lectures: HashMap<Uuid, Lecture>,
    published: Vec<DomainEvent>,
}

/// Shared in-memory campus store.
///
/// Clones share the same tables, so one instance can be handed to every
/// service as each repository port.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCampusStore {
    tables: Arc<RwLock<Tables>>,
}

impl Tables {
    fn insert<E, F>(&mut self, mut entity: E, table: F) -> Result<E, String>
    where
        E: Stored,
        F: FnOnce(&mut Self) -> &mut HashMap<Uuid, E>,
    {
        if entity.is_transient() {
            let assigned = entity.assign_id(Uuid::new_v4());
            if assigned.is_failure() {
                return Err(assigned.error().to_owned());
            }
        }
        let events = entity.take_events();
        table(self).insert(*entity.id(), entity.clone());
        for event in events {
            debug!(entity_id = %entity.id(), ?event, "domain event published");
            self.published.push(event);
        }
        Ok(entity)
    }

    fn username_taken(&self, user: &User) -> bool {
        self.users
            .values()
            .any(|other| other.username() == user.username() && other.id() != user.id())
    }
}

impl InMemoryCampusStore {
    /// Events published so far, oldest first.
    pub async fn published_events(&self) -> Vec<DomainEvent> {
        self.tables.read().await.published.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryCampusStore {
    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.username_taken(&user) {
            return Err(UserRepositoryError::duplicate_username(user.username().as_str()));
        }
        tables
            .insert(user, |all| &mut all.users)
            .map_err(UserRepositoryError::query)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Email,
    ) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

#[async_trait]
impl StudentRepository for InMemoryCampusStore {
    async fn save(&self, student: Student) -> Result<Student, StudentRepositoryError> {
        self.tables
            .write()
            .await
            .insert(student, |all| &mut all.students)
            .map_err(StudentRepositoryError::query)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.tables.read().await.students.get(id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .students
            .values()
            .find(|student| student.user_id() == *user_id)
            .cloned())
    }
}

#[async_trait]
impl ProfessorRepository for InMemoryCampusStore {
    async fn save(&self, professor: Professor) -> Result<Professor, ProfessorRepositoryError> {
        self.tables
            .write()
            .await
            .insert(professor, |all| &mut all.professors)
            .map_err(ProfessorRepositoryError::query)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Professor>, ProfessorRepositoryError> {
        Ok(self.tables.read().await.professors.get(id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<Professor>, ProfessorRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .professors
            .values()
            .find(|professor| professor.user_id() == *user_id)
            .cloned())
    }
}

#[async_trait]
impl LectureRepository for InMemoryCampusStore {
    async fn save(&self, lecture: Lecture) -> Result<Lecture, LectureRepositoryError> {
        self.tables
            .write()
            .await
            .insert(lecture, |all| &mut all.lectures)
            .map_err(LectureRepositoryError::query)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Lecture>, LectureRepositoryError> {
        Ok(self.tables.read().await.lectures.get(id).cloned())
    }
}
