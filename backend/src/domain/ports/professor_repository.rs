//! Port abstraction for professor persistence adapters and their errors.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Professor;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by professor repository adapters.
    pub enum ProfessorRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String
        } => "professor repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String
        } => "professor repository query failed: {message}",
    }
}

/// Port for storing and loading professor records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfessorRepository: Send + Sync {
    /// Insert or update `professor`, assigning an id when it is transient,
    /// and return the stored copy.
    async fn save(&self, professor: Professor) -> Result<Professor, ProfessorRepositoryError>;

    /// Fetch a professor by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Professor>, ProfessorRepositoryError>;

    /// Fetch the professor record owned by a user account.
    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<Professor>, ProfessorRepositoryError>;
}
