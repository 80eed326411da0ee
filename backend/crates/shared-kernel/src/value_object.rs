//! Structural equality for immutable value objects.
//!
//! Purpose: let each value type declare, once, the ordered fields that define
//! it, and derive equality and hashing from that single list so the two can
//! never disagree.

use std::hash::{DefaultHasher, Hash, Hasher};

use uuid::Uuid;

/// Seed of the component hash fold.
pub const HASH_SEED: u64 = 1;
/// Multiplier of the component hash fold.
pub const HASH_MULTIPLIER: u64 = 23;

/// One field participating in a value object's equality.
///
/// Text is compared case-sensitively unless the owning type opts in with
/// [`Component::IgnoreCase`]. Floats compare by normalised bit pattern so
/// that `-0.0 == 0.0`, `NaN == NaN`, and equality stays reflexive.
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    /// Case-sensitive text.
    Text(&'a str),
    /// Text compared and hashed after lower-casing.
    IgnoreCase(&'a str),
    /// Any integer, widened.
    Integer(i128),
    /// Floating-point number.
    Float(f64),
    /// Boolean flag.
    Flag(bool),
    /// UUID identifier.
    Uuid(Uuid),
    /// Missing optional field.
    Absent,
}

impl Component<'_> {
    fn normalised_float_bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0_f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        }
    }

    /// Hash of this single component, independent of the caller's hasher.
    #[must_use]
    pub fn component_hash(&self) -> u64 {
        if matches!(self, Self::Absent) {
            return 0;
        }
        let mut hasher = DefaultHasher::new();
        match self {
            Self::Text(text) => {
                0_u8.hash(&mut hasher);
                text.hash(&mut hasher);
            }
            Self::IgnoreCase(text) => {
                1_u8.hash(&mut hasher);
                text.to_lowercase().hash(&mut hasher);
            }
            Self::Integer(value) => {
                2_u8.hash(&mut hasher);
                value.hash(&mut hasher);
            }
            Self::Float(value) => {
                3_u8.hash(&mut hasher);
                Self::normalised_float_bits(*value).hash(&mut hasher);
            }
            Self::Flag(value) => {
                4_u8.hash(&mut hasher);
                value.hash(&mut hasher);
            }
            Self::Uuid(value) => {
                5_u8.hash(&mut hasher);
                value.hash(&mut hasher);
            }
            Self::Absent => {}
        }
        hasher.finish()
    }
}

impl PartialEq for Component<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::IgnoreCase(a), Self::IgnoreCase(b)) => a.to_lowercase() == b.to_lowercase(),
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                Self::normalised_float_bits(*a) == Self::normalised_float_bits(*b)
            }
            (Self::Flag(a), Self::Flag(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}

impl Eq for Component<'_> {}

impl<'a> From<&'a str> for Component<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Component<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i32> for Component<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for Component<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<f64> for Component<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Component<'_> {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Uuid> for Component<'_> {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl<'a, T> From<Option<T>> for Component<'a>
where
    T: Into<Component<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// An immutable value compared by its declared components.
///
/// Implementors declare [`ValueObject::equality_components`] and then derive
/// `PartialEq`, `Eq`, and `Hash` with [`crate::value_object_equality!`].
///
/// # Examples
/// ```
/// use shared_kernel::{Component, ValueObject, value_object_equality};
///
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> Vec<Component<'_>> {
///         vec![self.amount.into(), Component::IgnoreCase(&self.currency)]
///     }
/// }
///
/// value_object_equality!(Money);
///
/// let a = Money { amount: 10, currency: "eur".to_owned() };
/// let b = Money { amount: 10, currency: "EUR".to_owned() };
/// assert!(a == b);
/// ```
pub trait ValueObject {
    /// Ordered fields defining equality. Must be the same list, in the same
    /// order, for every instance of the type.
    fn equality_components(&self) -> Vec<Component<'_>>;

    /// Element-wise comparison of the component sequences.
    #[must_use]
    fn structural_eq(&self, other: &Self) -> bool {
        self.equality_components() == other.equality_components()
    }

    /// Fold of the component hashes with [`HASH_SEED`] and [`HASH_MULTIPLIER`].
    #[must_use]
    fn structural_hash(&self) -> u64 {
        self.equality_components()
            .iter()
            .fold(HASH_SEED, |acc, component| {
                acc.wrapping_mul(HASH_MULTIPLIER)
                    .wrapping_add(component.component_hash())
            })
    }
}

/// Implement `PartialEq`, `Eq`, and `Hash` for value objects from their
/// declared components.
#[macro_export]
macro_rules! value_object_equality {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::ValueObject::structural_eq(self, other)
                }
            }

            impl ::core::cmp::Eq for $ty {}

            impl ::core::hash::Hash for $ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64($crate::ValueObject::structural_hash(self));
                }
            }
        )+
    };
}
