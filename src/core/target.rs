//! Purpose: Describe the statically declared type a decode call must produce.
//! Exports: `TypeKey`.
//! Role: Dispatch key for the strategy table; compared by `TypeId`, named for diagnostics.
//! Invariants: Two keys are equal iff they describe the same Rust type.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<U: 'static + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<U>(),
            name: type_name::<U>(),
        }
    }

    /// Key for "ordered sequence of `T`".
    pub fn sequence_of<T: 'static>() -> Self {
        Self::of::<Vec<T>>()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
