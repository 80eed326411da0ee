//! Port abstraction for lecture persistence adapters and their errors.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Lecture;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by lecture repository adapters.
    pub enum LectureRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String
        } => "lecture repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String
        } => "lecture repository query failed: {message}",
    }
}

/// Port for storing and loading lectures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LectureRepository: Send + Sync {
    /// Insert or update `lecture`, assigning an id when it is transient, and
    /// return the stored copy.
    async fn save(&self, lecture: Lecture) -> Result<Lecture, LectureRepositoryError>;

    /// Fetch a lecture by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Lecture>, LectureRepositoryError>;
}
