//! Field keys for keyed containers.
//!
//! A [`CodingKey`] names one slot in a keyed container. Every key has a string
//! identity; keys used by positionally keyed formats may also carry an integer
//! identity. Two keys address the same slot only when their string identities
//! match; the integer identity is a secondary channel a format may use.
//!
//! [`AnyKey`] is the erased key that travels through the object-safe container
//! traits. Typed containers convert their `K: CodingKey` to an `AnyKey` at the
//! call boundary and back again for [`all_keys`](crate::codable::KeyedDecodingContainer::all_keys).

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// String identity of the slot reserved for base-type payloads.
pub const SUPER_KEY: &str = "super";

/// A type that can name a field in a keyed container.
///
/// Field enums usually implement this by hand:
///
/// ```
/// use carton::codable::CodingKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum PointKey {
///     X,
///     Y,
/// }
///
/// impl CodingKey for PointKey {
///     fn string_value(&self) -> &str {
///         match self {
///             PointKey::X => "x",
///             PointKey::Y => "y",
///         }
///     }
///
///     fn from_string_value(value: &str) -> Option<Self> {
///         match value {
///             "x" => Some(PointKey::X),
///             "y" => Some(PointKey::Y),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(PointKey::from_string_value("y"), Some(PointKey::Y));
/// assert_eq!(PointKey::X.int_value(), None);
/// ```
pub trait CodingKey: fmt::Debug {
    /// The authoritative string identity of this key.
    fn string_value(&self) -> &str;

    /// The integer identity of this key, for positionally keyed formats.
    fn int_value(&self) -> Option<i64> {
        None
    }

    /// Rebuilds a key from its string identity.
    fn from_string_value(value: &str) -> Option<Self>
    where
        Self: Sized;

    /// Rebuilds a key from its integer identity.
    fn from_int_value(_value: i64) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

/// A key with no static field set.
///
/// `AnyKey` is what the object-safe container traits accept, what
/// [`CodingPath`](crate::codable::CodingPath) stores, and what formats report
/// from `all_keys`. It is also the natural key type for maps whose keys are
/// only known at runtime.
#[derive(Debug, Clone)]
pub struct AnyKey {
    string: String,
    int: Option<i64>,
    index: bool,
}

impl AnyKey {
    /// Creates a key with only a string identity.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string: value.into(),
            int: None,
            index: false,
        }
    }

    /// Creates a key whose string identity is the decimal form of `value`.
    pub fn int(value: i64) -> Self {
        Self {
            string: value.to_string(),
            int: Some(value),
            index: false,
        }
    }

    /// Creates a key from a string, recovering an integer identity when the
    /// string is the decimal form of an integer.
    pub fn from_string(value: impl Into<String>) -> Self {
        let string = value.into();
        let int = string.parse::<i64>().ok();
        Self {
            string,
            int,
            index: false,
        }
    }

    /// The synthetic key naming slot `index` of an unkeyed container.
    pub fn index(index: usize) -> Self {
        Self {
            string: format!("Index {index}"),
            int: i64::try_from(index).ok(),
            index: true,
        }
    }

    /// The reserved key used by `super_encoder` / `super_decoder`.
    pub fn super_key() -> Self {
        Self::string(SUPER_KEY)
    }

    /// Erases any typed key.
    pub fn from_key<K: CodingKey + ?Sized>(key: &K) -> Self {
        Self {
            string: key.string_value().to_string(),
            int: key.int_value(),
            index: false,
        }
    }

    /// Converts back to a typed key, preferring the string identity.
    pub fn to_key<K: CodingKey>(&self) -> Option<K> {
        K::from_string_value(&self.string).or_else(|| self.int.and_then(K::from_int_value))
    }

    /// Returns true for keys synthesized for unkeyed container slots.
    pub fn is_index(&self) -> bool {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl CodingKey for AnyKey {
    fn string_value(&self) -> &str {
        &self.string
    }

    fn int_value(&self) -> Option<i64> {
        self.int
    }

    fn from_string_value(value: &str) -> Option<Self> {
        Some(AnyKey::from_string(value))
    }

    fn from_int_value(value: i64) -> Option<Self> {
        Some(AnyKey::int(value))
    }
}

// Slot identity is the string form only.
impl PartialEq for AnyKey {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for AnyKey {}

impl Hash for AnyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

impl fmt::Display for AnyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.index, self.int) {
            (true, Some(i)) => write!(f, "[{i}]"),
            _ => f.write_str(&self.string),
        }
    }
}

impl From<&str> for AnyKey {
    fn from(value: &str) -> Self {
        AnyKey::string(value)
    }
}

impl From<String> for AnyKey {
    fn from(value: String) -> Self {
        AnyKey::string(value)
    }
}

impl CodingKey for String {
    fn string_value(&self) -> &str {
        self
    }

    fn from_string_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}
