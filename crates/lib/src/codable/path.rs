//! Coding paths.
//!
//! A [`CodingPath`] records the route from the document root to the container
//! currently being encoded or decoded. Each nested container receives its own
//! path, built as the parent's path plus one key, so paths are never shared
//! mutably between containers.
//!
//! # Usage
//!
//! ```rust
//! use carton::codable::{AnyKey, CodingPath};
//!
//! let root = CodingPath::new();
//! let user = root.appending(AnyKey::string("user"));
//! let first_friend = user
//!     .appending(AnyKey::string("friends"))
//!     .appending(AnyKey::index(0));
//!
//! assert!(root.is_empty());
//! assert_eq!(user.len(), 1);
//! assert_eq!(first_friend.to_string(), "user.friends[0]");
//! ```

use std::{fmt, ops::Deref};

use super::key::{AnyKey, CodingKey};

/// The ordered keys from the document root to a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    keys: Vec<AnyKey>,
}

impl CodingPath {
    /// Creates the root path.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Returns a new path with `key` appended, leaving `self` untouched.
    pub fn appending(&self, key: impl Into<AnyKey>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend(self.keys.iter().cloned());
        keys.push(key.into());
        Self { keys }
    }

    /// Appends a key, consuming the path.
    pub fn push(mut self, key: impl Into<AnyKey>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Appends any typed key.
    pub fn push_key<K: CodingKey + ?Sized>(self, key: &K) -> Self {
        self.push(AnyKey::from_key(key))
    }

    /// Returns a new path made of `prefix` followed by this path.
    pub fn prefixed_by(&self, prefix: &CodingPath) -> Self {
        let mut keys = Vec::with_capacity(prefix.len() + self.len());
        keys.extend(prefix.keys.iter().cloned());
        keys.extend(self.keys.iter().cloned());
        Self { keys }
    }

    /// Returns the keys as a slice.
    pub fn keys(&self) -> &[AnyKey] {
        &self.keys
    }

    /// Returns the last key, if any.
    pub fn last(&self) -> Option<&AnyKey> {
        self.keys.last()
    }

    /// Returns the path of the enclosing container.
    pub fn parent(&self) -> Option<CodingPath> {
        if self.keys.is_empty() {
            return None;
        }
        Some(Self {
            keys: self.keys[..self.keys.len() - 1].to_vec(),
        })
    }
}

impl Deref for CodingPath {
    type Target = [AnyKey];

    fn deref(&self) -> &Self::Target {
        &self.keys
    }
}

impl AsRef<[AnyKey]> for CodingPath {
    fn as_ref(&self) -> &[AnyKey] {
        &self.keys
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            return f.write_str("<root>");
        }
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 && !key.is_index() {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromIterator<AnyKey> for CodingPath {
    fn from_iter<T: IntoIterator<Item = AnyKey>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<AnyKey>> for CodingPath {
    fn from(keys: Vec<AnyKey>) -> Self {
        Self { keys }
    }
}

impl<'a> IntoIterator for &'a CodingPath {
    type Item = &'a AnyKey;
    type IntoIter = std::slice::Iter<'a, AnyKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
