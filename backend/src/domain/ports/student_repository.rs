//! Port abstraction for student persistence adapters and their errors.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Student;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String
        } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String
        } => "student repository query failed: {message}",
    }
}

/// Port for storing and loading student records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert or update `student`, assigning an id when it is transient, and
    /// return the stored copy.
    async fn save(&self, student: Student) -> Result<Student, StudentRepositoryError>;

    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Student>, StudentRepositoryError>;

    /// Fetch the student record owned by a user account.
    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<Student>, StudentRepositoryError>;
}
