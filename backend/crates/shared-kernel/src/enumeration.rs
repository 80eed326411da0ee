//! Closed, statically declared "smart enumerations".
//!
//! Purpose: model a fixed set of named, valued singletons (user roles, access
//! levels) that can be resolved from their backing value or, ignoring case,
//! from their name. Each enumeration declares its members explicitly with
//! [`crate::enumeration!`]; nothing is discovered at runtime and no member can
//! be created outside the declaration.
//!
//! The registry of members is built lazily, exactly once per enumeration
//! type, behind a [`std::sync::OnceLock`]. Concurrent first readers block
//! until the single build finishes and then all observe the same registry.

use std::fmt;
use std::hash::Hash;

use crate::error::EnumerationError;
use crate::value_object::Component;

/// Backing value of an enumeration member.
pub trait MemberValue: Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Whether `self` identifies the same member as `other`.
    #[must_use]
    fn matches(&self, other: &Self) -> bool {
        self == other
    }

    /// Equality component used for value-object comparison.
    fn equality_component(&self) -> Component<'_>;
}

macro_rules! integer_member_value {
    ($($ty:ty),+) => {
        $(
            impl MemberValue for $ty {
                fn equality_component(&self) -> Component<'_> {
                    Component::Integer(i128::from(*self))
                }
            }
        )+
    };
}

integer_member_value!(i16, i32, i64, u8, u16, u32, u64);

/// Text-valued members match case-insensitively.
impl MemberValue for &'static str {
    fn matches(&self, other: &Self) -> bool {
        self.to_lowercase() == other.to_lowercase()
    }

    fn equality_component(&self) -> Component<'_> {
        Component::IgnoreCase(self)
    }
}

/// Declaration-ordered member set of one enumeration type.
#[derive(Debug)]
pub struct EnumerationRegistry<E: 'static> {
    members: Vec<&'static E>,
}

impl<E: Enumeration> EnumerationRegistry<E> {
    /// Build the registry from the declared members.
    ///
    /// # Panics
    ///
    /// Panics when two members share a value or, ignoring case, a name.
    /// Redeclaration is a programming error no caller can recover from.
    #[must_use]
    pub fn build(declared: Vec<&'static E>) -> Self {
        for (index, member) in declared.iter().enumerate() {
            for earlier in declared.iter().take(index) {
                if earlier.value().matches(member.value()) {
                    panic!(
                        "{} redeclares value '{}' (members '{}' and '{}')",
                        E::TYPE_NAME,
                        member.value(),
                        earlier.name(),
                        member.name(),
                    );
                }
                if names_match(earlier.name(), member.name()) {
                    panic!("{} redeclares name '{}'", E::TYPE_NAME, member.name());
                }
            }
        }
        Self { members: declared }
    }

    /// All members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[&'static E] {
        &self.members
    }

    fn find_by_value(&self, value: &E::Value) -> Option<&'static E> {
        self.members
            .iter()
            .copied()
            .find(|member| member.value().matches(value))
    }

    fn find_by_name(&self, name: &str) -> Option<&'static E> {
        self.members
            .iter()
            .copied()
            .find(|member| names_match(member.name(), name))
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A closed set of named, valued singletons.
///
/// Implemented by [`crate::enumeration!`]; hand-written implementations must
/// keep [`Enumeration::registry`] backed by a per-type `OnceLock`.
pub trait Enumeration: Sized + Sync + 'static {
    /// Backing value type.
    type Value: MemberValue;

    /// Type name used in lookup errors.
    const TYPE_NAME: &'static str;

    /// Backing value of this member.
    fn value(&self) -> &Self::Value;

    /// Display name of this member.
    fn name(&self) -> &'static str;

    /// The declared members, in declaration order.
    ///
    /// Only the registry build calls this.
    fn declared() -> Vec<&'static Self>;

    /// Lazily built, process-wide registry.
    fn registry() -> &'static EnumerationRegistry<Self>;

    /// All members in declaration order.
    #[must_use]
    fn get_all() -> &'static [&'static Self] {
        Self::registry().members()
    }

    /// Member whose backing value matches `value`, if any.
    #[must_use]
    fn try_from_value(value: &Self::Value) -> Option<&'static Self> {
        Self::registry().find_by_value(value)
    }

    /// Member whose backing value matches `value`.
    fn from_value(value: &Self::Value) -> Result<&'static Self, EnumerationError> {
        Self::try_from_value(value)
            .ok_or_else(|| EnumerationError::not_a_member(value, "value", Self::TYPE_NAME))
    }

    /// Member whose name matches `name` ignoring case, if any.
    #[must_use]
    fn try_from_name(name: &str) -> Option<&'static Self> {
        Self::registry().find_by_name(name)
    }

    /// Member whose name matches `name` ignoring case.
    fn from_name(name: &str) -> Result<&'static Self, EnumerationError> {
        Self::try_from_name(name)
            .ok_or_else(|| EnumerationError::not_a_member(name, "name", Self::TYPE_NAME))
    }
}

/// Declare a closed enumeration.
///
/// Generates the member type, one `'static` singleton per member exposed as
/// an associated `&'static` constant, the [`Enumeration`] implementation,
/// value-object equality on the backing value, ordering by backing value,
/// and `Display` printing the name.
///
/// # Examples
/// ```
/// use shared_kernel::{Enumeration, enumeration};
///
/// enumeration! {
///     /// Traffic light colours.
///     pub struct Light: u8 {
///         /// Stop.
///         RED = (1, "red"),
///         /// Go.
///         GREEN = (2, "green"),
///     }
/// }
///
/// assert!(std::ptr::eq(Light::from_name("RED").expect("declared"), Light::RED));
/// assert_eq!(Light::get_all().len(), 2);
/// assert!(Light::try_from_value(&9).is_none());
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value_ty:ty {
            $(
                $(#[$member_meta:meta])*
                $member:ident = ($value:expr, $label:expr)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            value: $value_ty,
            name: &'static str,
        }

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: &'static $name = {
                    static MEMBER: $name = $name {
                        value: $value,
                        name: $label,
                    };
                    &MEMBER
                };
            )+
        }

        impl $crate::Enumeration for $name {
            type Value = $value_ty;

            const TYPE_NAME: &'static str = stringify!($name);

            fn value(&self) -> &$value_ty {
                &self.value
            }

            fn name(&self) -> &'static str {
                self.name
            }

            fn declared() -> ::std::vec::Vec<&'static Self> {
                ::std::vec![$(Self::$member),+]
            }

            fn registry() -> &'static $crate::EnumerationRegistry<Self> {
                static REGISTRY: ::std::sync::OnceLock<$crate::EnumerationRegistry<$name>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| $crate::EnumerationRegistry::build(Self::declared()))
            }
        }

        impl $crate::ValueObject for $name {
            fn equality_components(&self) -> ::std::vec::Vec<$crate::Component<'_>> {
                ::std::vec![$crate::MemberValue::equality_component(&self.value)]
            }
        }

        $crate::value_object_equality!($name);

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.value, &other.value)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name)
            }
        }
    };
}

/// Serde adapter writing members by name.
///
/// Use with `#[serde(with = "shared_kernel::enumeration::by_name")]` on a
/// `&'static E` field. Unknown names fail deserialisation.
pub mod by_name {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Enumeration;

    /// Serialise the member's name.
    pub fn serialize<E, S>(member: &&'static E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Enumeration,
        S: Serializer,
    {
        serializer.serialize_str(member.name())
    }

    /// Resolve a member from its name, ignoring case.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<&'static E, D::Error>
    where
        E: Enumeration,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        E::from_name(&name).map_err(D::Error::custom)
    }
}

/// Serde adapter writing members by backing value.
///
/// Unknown values fail deserialisation.
pub mod by_value {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Enumeration;

    /// Serialise the member's backing value.
    pub fn serialize<E, S>(member: &&'static E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Enumeration,
        E::Value: Serialize,
        S: Serializer,
    {
        member.value().serialize(serializer)
    }

    /// Resolve a member from its backing value.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<&'static E, D::Error>
    where
        E: Enumeration,
        E::Value: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = <E::Value as Deserialize<'de>>::deserialize(deserializer)?;
        E::from_value(&value).map_err(D::Error::custom)
    }
}
