//! Side-channel configuration passed to encoders and decoders.
//!
//! [`UserInfo`] lets callers hand cross-cutting settings (a date rendering
//! choice, a schema version, a lookup table) to every `Encode`/`Decode`
//! implementation in a document without threading them through each type.
//! Formats pass it read-only to every nested scope.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// Identifies one entry in a [`UserInfo`] map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserInfoKey(String);

impl UserInfoKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserInfoKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for UserInfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque key-value map fixed for the lifetime of an encoder or decoder.
///
/// # Examples
///
/// ```
/// use carton::codable::{UserInfo, UserInfoKey};
///
/// let info = UserInfo::new().with("schema", 3u32);
/// assert_eq!(info.get::<u32>(&UserInfoKey::from("schema")), Some(&3));
/// assert_eq!(info.get::<String>(&UserInfoKey::from("schema")), None);
/// ```
#[derive(Clone, Default)]
pub struct UserInfo {
    entries: HashMap<UserInfoKey, Arc<dyn Any + Send + Sync>>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous value under the same key.
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<UserInfoKey>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<UserInfoKey>, value: T) {
        self.entries.insert(key.into(), Arc::new(value));
    }

    /// Returns the entry under `key` if it holds a `T`.
    pub fn get<T: Any>(&self, key: &UserInfoKey) -> Option<&T> {
        self.entries.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Returns the raw entry under `key`.
    pub fn get_any(&self, key: &UserInfoKey) -> Option<&(dyn Any + Send + Sync)> {
        self.entries.get(key).map(|v| v.as_ref())
    }

    pub fn contains_key(&self, key: &UserInfoKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &UserInfoKey> {
        self.entries.keys()
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        f.debug_struct("UserInfo").field("keys", &keys).finish()
    }
}
