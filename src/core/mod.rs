// Core modules implementing shape classification, strategies, dispatch, and errors.
pub mod error;
pub mod materialize;
pub mod registry;
pub mod sequence;
pub mod shape;
pub mod target;
