//! Domain-modelling kernel shared by the campus records service.
//!
//! Purpose: provide the small set of primitives every entity and operation
//! builds on, with no I/O of its own.
//!
//! Public surface:
//! - [`Outcome`]: success/failure result with railway-style combinators.
//! - [`Entity`], [`EntityBase`], [`entity_identity!`]: identity equality for
//!   mutable domain objects.
//! - [`ValueObject`], [`value_object_equality!`]: structural equality for
//!   immutable values.
//! - [`Enumeration`], [`enumeration!`]: closed sets of `'static` singletons
//!   resolved by value or name.
//! - [`Email`], [`UserType`], [`UserLevel`]: values shared by the campus
//!   domain.
//!
//! # Example
//!
//! ```
//! use shared_kernel::{Enumeration, Outcome, UserType};
//!
//! let doubled = Outcome::success(5)
//!     .ensure(|x| *x > 0, "must be positive")
//!     .map(|x| x * 2);
//! assert_eq!(doubled.value(), Some(&10));
//!
//! let student = UserType::from_name("STUDENT").expect("declared name");
//! assert!(std::ptr::eq(student, UserType::STUDENT));
//! ```

pub mod email;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod outcome;
pub mod users;
pub mod validation;
pub mod value_object;

pub use self::email::{EMAIL_MAX_LENGTH, Email, EmailValidationError};
pub use self::entity::{Entity, EntityBase, EntityId, EntityKey, same_identity};
pub use self::enumeration::{Enumeration, EnumerationRegistry, MemberValue};
pub use self::error::{EnumerationError, ErrorMessage, OutcomeContractError};
pub use self::outcome::Outcome;
pub use self::users::{UserLevel, UserType};
pub use self::validation::ValidationReport;
pub use self::value_object::{Component, ValueObject};
