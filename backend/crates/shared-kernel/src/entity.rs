//! Identity-based equality for mutable domain objects.
//!
//! Purpose: compare entities by who they are rather than what they hold. An
//! entity whose id is still the unassigned sentinel is *transient*: it equals
//! nothing (itself included), orders against nothing, and has no identity key.
//!
//! Public surface:
//! - [`EntityId`]: id types with a single unassigned sentinel.
//! - [`Entity`]: identity contract implemented by every concrete entity.
//! - [`EntityBase`]: embeddable id and domain-event storage.
//! - [`EntityKey`]: kind-qualified identity usable in hash maps.
//! - [`crate::entity_identity!`]: derive `PartialEq`, `PartialOrd`, `Hash`.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use crate::Outcome;

/// Salt mixed into every identity hash.
pub const IDENTITY_HASH_SALT: u64 = 31;

/// Identifier type with a distinguished "unassigned" value.
pub trait EntityId: Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Sentinel marking an entity as transient.
    fn unassigned() -> Self;

    /// Whether this id is the sentinel.
    #[must_use]
    fn is_unassigned(&self) -> bool {
        *self == Self::unassigned()
    }
}

impl EntityId for Uuid {
    fn unassigned() -> Self {
        Self::nil()
    }

    fn is_unassigned(&self) -> bool {
        self.is_nil()
    }
}

impl EntityId for String {
    fn unassigned() -> Self {
        Self::new()
    }

    fn is_unassigned(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! integer_entity_id {
    ($($ty:ty),+) => {
        $(
            impl EntityId for $ty {
                fn unassigned() -> Self {
                    0
                }
            }
        )+
    };
}

integer_entity_id!(i32, i64, u32, u64);

/// Kind-qualified identity of a persisted entity.
///
/// Two keys are equal only when both the concrete entity type and the id
/// match, so keys of different entity kinds never collide in a map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey<Id> {
    kind: TypeId,
    kind_name: &'static str,
    id: Id,
}

impl<Id> EntityKey<Id> {
    /// Fully qualified name of the entity type.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    /// The entity id.
    #[must_use]
    pub const fn id(&self) -> &Id {
        &self.id
    }
}

impl<Id: fmt::Display> fmt::Display for EntityKey<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind_name, self.id)
    }
}

/// Identity contract shared by all entities.
///
/// Implementors only provide [`Entity::id`]; the comparison methods are
/// derived from it and should not be overridden.
pub trait Entity: 'static {
    /// Identifier type.
    type Id: EntityId;

    /// Current id, possibly the unassigned sentinel.
    fn id(&self) -> &Self::Id;

    /// Whether the id has not been assigned yet.
    #[must_use]
    fn is_transient(&self) -> bool {
        self.id().is_unassigned()
    }

    /// Kind-qualified identity, or `None` while transient.
    #[must_use]
    fn identity_key(&self) -> Option<EntityKey<Self::Id>>
    where
        Self: Sized,
    {
        if self.is_transient() {
            return None;
        }
        Some(EntityKey {
            kind: TypeId::of::<Self>(),
            kind_name: type_name::<Self>(),
            id: self.id().clone(),
        })
    }

    /// Identity equality: both persisted and sharing an id.
    #[must_use]
    fn identity_eq(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        same_identity(self, other)
    }

    /// Id ordering, or `None` when either side is transient.
    #[must_use]
    fn identity_cmp(&self, other: &Self) -> Option<Ordering>
    where
        Self: Sized,
    {
        if self.is_transient() || other.is_transient() {
            return None;
        }
        Some(self.id().cmp(other.id()))
    }

    /// Feed the id and [`IDENTITY_HASH_SALT`] into `state`.
    ///
    /// Transient entities all hash alike; they must not be used as keys in
    /// uniqueness-sensitive containers.
    fn identity_hash<H: Hasher>(&self, state: &mut H)
    where
        Self: Sized,
    {
        self.id().hash(state);
        state.write_u64(IDENTITY_HASH_SALT);
    }
}

/// Identity equality across possibly different entity kinds.
///
/// Returns `false` if either side is transient or the concrete types differ.
#[must_use]
pub fn same_identity<A, B>(a: &A, b: &B) -> bool
where
    A: Entity,
    B: Entity<Id = A::Id>,
{
    match (a.identity_key(), b.identity_key()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Implement `PartialEq`, `PartialOrd`, and `Hash` for entities from
/// their identity.
///
/// `Eq` and `Ord` are intentionally absent: a transient entity is not equal
/// to itself and is unordered against everything.
#[macro_export]
macro_rules! entity_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::Entity::identity_eq(self, other)
                }
            }

            impl ::core::cmp::PartialOrd for $ty {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    $crate::Entity::identity_cmp(self, other)
                }
            }

            impl ::core::hash::Hash for $ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    $crate::Entity::identity_hash(self, state);
                }
            }
        )+
    };
}

/// Embeddable identity and domain-event storage.
///
/// Concrete entities hold an `EntityBase` and delegate [`Entity::id`] to it.
/// The event list always exists and starts empty.
#[derive(Debug, Clone)]
pub struct EntityBase<Id, Event> {
    id: Id,
    events: Vec<Event>,
}

impl<Id: EntityId, Event> EntityBase<Id, Event> {
    /// Base for an entity whose id will be assigned by persistence.
    #[must_use]
    pub fn transient() -> Self {
        Self::with_id(Id::unassigned())
    }

    /// Base for an entity whose id is chosen by its creator.
    #[must_use]
    pub const fn with_id(id: Id) -> Self {
        Self {
            id,
            events: Vec::new(),
        }
    }

    /// Current id.
    #[must_use]
    pub const fn id(&self) -> &Id {
        &self.id
    }

    /// Whether the id is still the sentinel.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.id.is_unassigned()
    }

    /// Assign the persistent id once.
    ///
    /// Fails without changing the id when one is already assigned or when
    /// `id` is the sentinel itself.
    pub fn assign_id(&mut self, id: Id) -> Outcome {
        if !self.is_transient() {
            return Outcome::failure("Entity id is already assigned");
        }
        if id.is_unassigned() {
            return Outcome::failure("Entity id must not be the unassigned value");
        }
        self.id = id;
        Outcome::success(())
    }

    /// Pending domain events in the order they were recorded.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append a domain event.
    pub fn record_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove the first pending event equal to `event`.
    pub fn remove_event(&mut self, event: &Event) -> bool
    where
        Event: PartialEq,
    {
        match self.events.iter().position(|pending| pending == event) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop all pending events.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Drain pending events for dispatch.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl<Id: EntityId, Event> Default for EntityBase<Id, Event> {
    fn default() -> Self {
        Self::transient()
    }
}
