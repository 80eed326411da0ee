//! User accounts.

use shared_kernel::{
    Email, Entity, EntityBase, Outcome, UserLevel, UserType, ValidationReport, entity_identity,
};
use uuid::Uuid;

use super::DomainEvent;

/// Raw input for [`User::create`].
///
/// # Examples
/// ```
/// use campus::domain::{User, UserDraft};
/// use shared_kernel::{UserLevel, UserType};
///
/// let draft = UserDraft {
///     username: "ada@example.org".to_owned(),
///     password: "secret".to_owned(),
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     user_type: UserType::STUDENT,
///     level: UserLevel::STUDENT,
/// };
/// let user = User::create(draft);
/// assert!(user.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct UserDraft {
    /// Login, validated as an [`Email`].
    pub username: String,
    /// Credential as supplied.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account kind.
    pub user_type: &'static UserType,
    /// Access level.
    pub level: &'static UserLevel,
}

/// A person holding a campus account.
///
/// ## Invariants
/// - Username is a valid [`Email`].
/// - Password, first name, and last name are non-blank.
#[derive(Debug, Clone)]
pub struct User {
    base: EntityBase<Uuid, DomainEvent>,
    username: Email,
    password: String,
    first_name: String,
    last_name: String,
    user_type: &'static UserType,
    level: &'static UserLevel,
}

impl User {
    /// Validate `draft` and build a transient user.
    ///
    /// Every violated rule is reported, joined with `"; "`.
    pub fn create(draft: UserDraft) -> Outcome<Self> {
        let mut report = ValidationReport::default();
        let has_username = !draft.username.trim().is_empty();
        report
            .check(has_username, "Username should not be empty")
            .check(!draft.password.trim().is_empty(), "Password should not be empty")
            .check(!draft.first_name.trim().is_empty(), "First name should not be empty")
            .check(!draft.last_name.trim().is_empty(), "Last name should not be empty");

        let username = if has_username {
            Email::create(&draft.username)
        } else {
            Outcome::failure("Username should not be empty")
        };
        if has_username {
            report.absorb(&username);
        }

        report.into_outcome(()).bind(|()| {
            username.map(|email| {
                let mut base = EntityBase::transient();
                base.record_event(DomainEvent::UserRegistered {
                    username: email.clone(),
                });
                Self {
                    base,
                    username: email,
                    password: draft.password,
                    first_name: draft.first_name.trim().to_owned(),
                    last_name: draft.last_name.trim().to_owned(),
                    user_type: draft.user_type,
                    level: draft.level,
                }
            })
        })
    }

    /// Login address.
    #[must_use]
    pub const fn username(&self) -> &Email {
        &self.username
    }

    /// Stored credential.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Account kind.
    #[must_use]
    pub const fn user_type(&self) -> &'static UserType {
        self.user_type
    }

    /// Access level.
    #[must_use]
    pub const fn level(&self) -> &'static UserLevel {
        self.level
    }

    /// Called by persistence once the user is stored.
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

impl Entity for User {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        self.base.id()
    }
}

entity_identity!(User);
