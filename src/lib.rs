//! Purpose: Decode JSON list fields that providers emit as arrays, keyed objects, or null.
//! Exports: `api` (public surface), `core` (strategies, dispatch, errors), `json` (parse boundary).
//! Role: Library plugged into serde/serde_json hosts; owns no I/O and no global state.
//! Invariants: Array input decodes exactly like the generic decoder; other shapes degrade to fewer items.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub mod json;
