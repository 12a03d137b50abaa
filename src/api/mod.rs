//! Purpose: Define the stable public Rust API boundary for shape-tolerant decoding.
//! Exports: Strategy, dispatcher, capability, serde adapters, and error types.
//! Role: Public, additive-only surface; internal module paths may move.
//! Invariants: Everything a host needs to register and run list strategies is re-exported here.

mod lenient;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::materialize::{JsonHost, Materializer};
pub use crate::core::registry::{Decoders, Strategy};
pub use crate::core::sequence::{ScalarPolicy, SequenceOptions, ShapeTolerantSequence};
pub use crate::core::shape::JsonShape;
pub use crate::core::target::TypeKey;
pub use crate::json::parse::{ParseFailureCategory, categorize_error, hint_for_error};
pub use lenient::{LenientVec, lenient_vec};
