//! Purpose: Classify a parsed JSON node by structural shape.
//! Exports: `JsonShape`.
//! Role: Shape vocabulary for diagnostics: rejected-scalar errors and host-side tracing.
//! Invariants: Classification reads the node only; it never mutates or clones it.

use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonShape {
    Array,
    Object,
    Null,
    /// Bool, number or string.
    Scalar,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => JsonShape::Array,
            Value::Object(_) => JsonShape::Object,
            Value::Null => JsonShape::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => JsonShape::Scalar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JsonShape::Array => "array",
            JsonShape::Object => "object",
            JsonShape::Null => "null",
            JsonShape::Scalar => "scalar",
        }
    }
}
