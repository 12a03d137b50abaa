//! Purpose: JSON document parsing boundary shared by dispatch entrypoints.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for document parsing so callsites avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
