//! Purpose: Decode "ordered sequence of T" from arrays, objects, null, or stray scalars.
//! Exports: `ShapeTolerantSequence`, `SequenceOptions`, `ScalarPolicy`.
//! Role: The lenient strategy registered for list fields some providers encode inconsistently.
//! Invariants: Array input decodes exactly as the generic decoder would (no reordering).
//! Invariants: Object values keep property order; keys are dropped; failed or null values are omitted.
//! Invariants: Null always yields an empty sequence; scalars do too under the default policy.
//! Invariants: Encode always emits the generic array shape.
//! Invariants: Stateless; every call depends only on its node, its options, and the host.

use crate::core::error::{Error, ErrorKind};
use crate::core::materialize::Materializer;
use crate::core::shape::JsonShape;
use crate::core::target::TypeKey;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use std::marker::PhantomData;

/// How a bare bool/number/string is treated where a list was declared.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScalarPolicy {
    #[default]
    Empty,
    Reject,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequenceOptions {
    pub scalar: ScalarPolicy,
    /// Treat a non-empty object whose values yield nothing as one whole item.
    pub wrap_single: bool,
}

impl SequenceOptions {
    pub fn new() -> Self {
        Self {
            scalar: ScalarPolicy::Empty,
            wrap_single: false,
        }
    }

    pub fn with_scalar(mut self, scalar: ScalarPolicy) -> Self {
        self.scalar = scalar;
        self
    }

    pub fn with_wrap_single(mut self, wrap_single: bool) -> Self {
        self.wrap_single = wrap_single;
        self
    }
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ShapeTolerantSequence<T> {
    options: SequenceOptions,
    _item: PhantomData<fn() -> T>,
}

impl<T> ShapeTolerantSequence<T> {
    pub fn new() -> Self {
        Self::with_options(SequenceOptions::new())
    }

    pub fn with_options(options: SequenceOptions) -> Self {
        Self {
            options,
            _item: PhantomData,
        }
    }

    pub fn options(&self) -> SequenceOptions {
        self.options
    }
}

impl<T> Default for ShapeTolerantSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ShapeTolerantSequence<T> {
    fn clone(&self) -> Self {
        Self::with_options(self.options)
    }
}

impl<T> std::fmt::Debug for ShapeTolerantSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeTolerantSequence")
            .field("item", &type_name::<T>())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: 'static> ShapeTolerantSequence<T> {
    pub fn target() -> TypeKey {
        TypeKey::sequence_of::<T>()
    }

    pub fn handles(&self, target: &TypeKey) -> bool {
        *target == Self::target()
    }
}

impl<T: DeserializeOwned> ShapeTolerantSequence<T> {
    pub fn decode<M: Materializer>(&self, node: Value, host: &M) -> Result<Vec<T>, Error> {
        match node {
            Value::Array(_) => host.decode_as::<Vec<T>>(node),
            Value::Object(map) => {
                let items = collect_values(&map, host);
                if items.is_empty() && self.options.wrap_single && !map.is_empty() {
                    let whole = Value::Object(map);
                    return Ok(host.try_materialize::<T>(&whole).into_iter().collect());
                }
                Ok(items)
            }
            Value::Null => Ok(Vec::new()),
            scalar => match self.options.scalar {
                ScalarPolicy::Empty => Ok(Vec::new()),
                ScalarPolicy::Reject => Err(Error::new(ErrorKind::Shape)
                    .with_message(format!(
                        "expected array or object, found {}",
                        JsonShape::of(&scalar).label()
                    ))
                    .with_target(type_name::<Vec<T>>())),
            },
        }
    }
}

impl<T: Serialize> ShapeTolerantSequence<T> {
    pub fn encode<M: Materializer>(&self, sequence: &[T], host: &M) -> Result<Value, Error> {
        host.encode_as(sequence)
    }
}

fn collect_values<T, M>(map: &serde_json::Map<String, Value>, host: &M) -> Vec<T>
where
    T: DeserializeOwned,
    M: Materializer,
{
    map.values()
        .filter_map(|value| host.try_materialize::<T>(value))
        .collect()
}
