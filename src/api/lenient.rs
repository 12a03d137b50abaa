//! Purpose: Plug shape-tolerant sequence decoding into serde-derived models.
//! Exports: `LenientVec`, `lenient_vec` (for `#[serde(with = "...")]`).
//! Role: Type-directed registration for list fields; serde picks it by the declared field type.
//! Invariants: The complete node is loaded before any shape decision is made.
//! Invariants: Serialization is the plain array form; object input shape is never echoed back.
//! Invariants: Array-path failures surface with the generic decoder's message, unwrapped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Deref, DerefMut};

/// A `Vec<T>` that decodes from an array, an object of items, or null.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LenientVec<T>(pub Vec<T>);

impl<T> LenientVec<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for LenientVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for LenientVec<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for LenientVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for LenientVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<LenientVec<T>> for Vec<T> {
    fn from(items: LenientVec<T>) -> Self {
        items.0
    }
}

impl<T> FromIterator<T> for LenientVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for LenientVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LenientVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for LenientVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_vec::deserialize(deserializer).map(LenientVec)
    }
}

impl<T: Serialize> Serialize for LenientVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        lenient_vec::serialize(&self.0, serializer)
    }
}

/// `#[serde(with = "shape_tolerant::api::lenient_vec")]` for plain `Vec<T>` fields.
///
/// Pair with `#[serde(default)]` so an omitted field also decodes as empty.
pub mod lenient_vec {
    use crate::core::materialize::JsonHost;
    use crate::core::sequence::ShapeTolerantSequence;
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use std::error::Error as StdError;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let node = Value::deserialize(deserializer)?;
        ShapeTolerantSequence::<T>::new()
            .decode(node, &JsonHost)
            .map_err(|err| match err.source() {
                // Generic decoder failures keep serde_json's own wording.
                Some(inner) => D::Error::custom(inner),
                None => D::Error::custom(&err),
            })
    }

    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        items.serialize(serializer)
    }
}
