//! Read-side lookup of a user's display profile.

use std::sync::Arc;

use serde::Serialize;
use shared_kernel::Outcome;
use uuid::Uuid;

use super::found;
use crate::domain::User;
use crate::domain::ports::UserRepository;

/// Failure text for a missing user id.
pub const USER_ID_REQUIRED: &str = "User ID is required";
/// Failure text for an unknown user.
pub const USER_NOT_FOUND: &str = "User not found";

/// Request for a user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserInfoQuery {
    /// User to describe.
    pub user_id: Uuid,
}

/// Profile projection returned by [`UserInfoService::get_user_info`].
///
/// Serialised as `{"firstName": ..., "lastName": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
        }
    }
}

/// Answers [`GetUserInfoQuery`]s.
#[derive(Clone)]
pub struct UserInfoService<U> {
    users: Arc<U>,
}

impl<U> UserInfoService<U> {
    /// Create a new service over the given repository.
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U: UserRepository> UserInfoService<U> {
    /// Look up the user named by `query`.
    pub async fn get_user_info(&self, query: GetUserInfoQuery) -> Outcome<UserInfo> {
        if query.user_id.is_nil() {
            return Outcome::failure(USER_ID_REQUIRED);
        }
        found(self.users.find_by_id(&query.user_id).await, USER_NOT_FOUND)
            .map(|user| UserInfo::from(&user))
    }
}
