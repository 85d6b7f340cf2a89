//! Ordered key/value diagnostic container.
//!
//! [`FieldStore`] keeps fields in insertion order, overwrites in place on key
//! collision, and merges other stores with the same rule. It backs the
//! diagnostic payload of a [`TracedError`](crate::TracedError); the reserved
//! `"stack"` key is written into it on first materialization.

use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single diagnostic value.
///
/// Conversions exist for the common primitive shapes, so call sites can pass
/// string slices, integers and booleans directly.
///
/// # Examples
///
/// ```
/// use error_trail::FieldValue;
///
/// assert_eq!(FieldValue::from(503).to_string(), "503");
/// assert_eq!(FieldValue::from("sda1").as_str(), Some("sda1"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// Returns the contained string, if this value is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for FieldValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FieldValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for FieldValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for FieldValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered key→value store for diagnostic fields.
///
/// Insertion order is preserved; setting an existing key overwrites it in
/// place without moving it. Inline storage covers the first four entries,
/// so typical faults never touch the heap for fields.
///
/// # Examples
///
/// ```
/// use error_trail::{FieldStore, FieldValue};
///
/// let mut store = FieldStore::new();
/// store.set("code", 503);
/// store.set("device", "sda1");
/// store.set("code", 507);
///
/// let keys: Vec<&str> = store.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["code", "device"]);
/// assert_eq!(store.get("code"), Some(&FieldValue::from(507)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStore {
    entries: SmallVec<[(String, FieldValue); 4]>,
}

impl FieldStore {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or overwrites a field.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::FieldStore;
    ///
    /// let store = FieldStore::new().with("code", 503).with("retry", true);
    /// assert_eq!(store.len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Merges `other` into this store.
    ///
    /// Colliding keys are overwritten in place, new keys are appended in
    /// `other`'s order, pre-existing keys keep their positions.
    pub fn merge(&mut self, other: FieldStore) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// Iterates over fields in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, FieldValue)> for FieldStore {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}
