//! # Message Arguments
//!
//! The flat, string-keyed argument bag carried by every protocol message.
//!
//! The outer message and all of its extensions share one `MessageArgs`.
//! Each extension owns a bounded, namespaced subset of keys and MUST NOT
//! disturb keys it does not own.
//!
//! ## Ordering
//!
//! Keys enumerate in insertion order. Removing a key shifts later keys down
//! (`shift_remove`), so the relative order of the remaining keys is stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered string key-value bag shared by a message and its extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageArgs {
    entries: IndexMap<String, String>,
}

impl MessageArgs {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present (an empty value still counts as present).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite a value, returning the previous one.
    ///
    /// Overwriting keeps the key at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|k, v| keep(k, v));
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
