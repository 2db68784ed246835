//! # Raw Key Table
//!
//! The key/value data collected from record files, plus the set of keys the
//! scan phase is allowed to retain.
//!
//! A [`RawKeyTable`] distinguishes three states for a key:
//!
//! ```text
//! get(key) == None              key never seen in any record
//! get(key) == Some(None)        key seen as a bare key with no value
//! get(key) == Some(Some(v))     key seen with value v (possibly "")
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// One key/value pair read from a record line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPair {
    /// Raw key, quotes stripped and trimmed.
    pub key: String,
    /// Raw value; `None` for a bare key with no delimiter.
    pub value: Option<String>,
}

impl RecordPair {
    /// A pair with a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A bare key with an explicit null value.
    pub fn null(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Insertion-ordered, de-duplicated set of raw keys to retain while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequiredKeys {
    keys: Vec<String>,
}

impl RequiredKeys {
    /// Create an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Returns false if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Whether `key` must be retained.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RequiredKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys = Self::new();
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

/// Mapping from raw key to raw value, built fresh for each decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawKeyTable {
    entries: BTreeMap<String, Option<String>>,
}

impl RawKeyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a pair. The last writer for a key wins; the previous entry,
    /// if any, is returned.
    pub fn merge(&mut self, pair: RecordPair) -> Option<Option<String>> {
        self.entries.insert(pair.key, pair.value)
    }

    /// Look up a key, keeping the absent/null distinction.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(Option::as_deref)
    }

    /// The value for `key`, collapsing absent and null.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    /// Whether `key` was seen at all, with or without a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key was retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl FromIterator<RecordPair> for RawKeyTable {
    fn from_iter<I: IntoIterator<Item = RecordPair>>(iter: I) -> Self {
        let mut table = Self::new();
        for pair in iter {
            table.merge(pair);
        }
        table
    }
}
