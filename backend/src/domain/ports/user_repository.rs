//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;
use shared_kernel::Email;
use uuid::Uuid;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String
        } => "user repository query failed: {message}",
        /// Another user already holds the username.
        DuplicateUsername {
            /// Username that was rejected.
            username: String
        } => "username {username} is already registered",
    }
}

/// Port for storing and loading user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update `user`, assigning an id when it is transient, and
    /// return the stored copy.
    async fn save(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by login, ignoring case.
    async fn find_by_username(&self, username: &Email) -> Result<Option<User>, UserRepositoryError>;
}
