//! Purpose: Define the generic decode capability strategies consume, plus the serde_json host.
//! Exports: `Materializer`, `JsonHost`.
//! Role: Injected seam between shape-tolerant strategies and the generic decoder.
//! Invariants: `materialize` returns `Ok(None)` for null input instead of failing.
//! Invariants: `try_materialize` never fails; conversion errors collapse to `None`.
//! Notes: Conversion failures are logged here at trace level, never by strategies.

use crate::core::error::{Error, ErrorKind};
use crate::core::shape::JsonShape;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;

pub trait Materializer {
    /// Converts `value` into a `U`; null input is absent rather than an error.
    fn materialize<U: DeserializeOwned>(&self, value: &Value) -> Result<Option<U>, Error>;

    /// Converts `value` into a declared composite type with no leniency applied.
    fn decode_as<U: DeserializeOwned>(&self, value: Value) -> Result<U, Error>;

    fn encode_as<U: Serialize + ?Sized>(&self, value: &U) -> Result<Value, Error>;

    fn try_materialize<U: DeserializeOwned>(&self, value: &Value) -> Option<U> {
        self.materialize(value).ok().flatten()
    }
}

/// serde_json-backed capability; uses whatever `Deserialize` impls `U` carries.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonHost;

impl JsonHost {
    pub fn new() -> Self {
        Self
    }
}

impl Materializer for JsonHost {
    fn materialize<U: DeserializeOwned>(&self, value: &Value) -> Result<Option<U>, Error> {
        if value.is_null() {
            return Ok(None);
        }
        match U::deserialize(value) {
            Ok(item) => Ok(Some(item)),
            Err(err) => {
                tracing::trace!(
                    target: "shape_tolerant",
                    element = type_name::<U>(),
                    shape = JsonShape::of(value).label(),
                    error = %err,
                    "element conversion failed"
                );
                Err(conversion_error(ErrorKind::Data, type_name::<U>(), err))
            }
        }
    }

    fn decode_as<U: DeserializeOwned>(&self, value: Value) -> Result<U, Error> {
        serde_json::from_value::<U>(value)
            .map_err(|err| conversion_error(ErrorKind::Data, type_name::<U>(), err))
    }

    fn encode_as<U: Serialize + ?Sized>(&self, value: &U) -> Result<Value, Error> {
        serde_json::to_value(value)
            .map_err(|err| conversion_error(ErrorKind::Encode, type_name::<U>(), err))
    }
}

fn conversion_error(kind: ErrorKind, target: &'static str, err: serde_json::Error) -> Error {
    Error::new(kind)
        .with_message(err.to_string())
        .with_target(target)
        .with_source(err)
}
