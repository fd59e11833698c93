//! Deterministic identity for runtime global values.
//!
//! The bytecode propagator recognises references to builtins (`len`,
//! `range`), modules (`math`) and module members (`math.sqrt`) by the
//! identity of the value the bytecode loads. [`ValueId`] is that identity:
//! a 64-bit hash computed from the value's qualified name, so the same
//! global always maps to the same id with no registration-order
//! dependency.
//!
//! # Examples
//!
//! ```
//! use pyrite_core::ValueId;
//!
//! let sqrt = ValueId::from_name("math.sqrt");
//! assert_eq!(sqrt, ValueId::from_name("math.sqrt"));
//! assert_ne!(sqrt, ValueId::from_name("math.sin"));
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain constant mixed into every global-value hash, keeping these ids
/// disjoint from any other xxh64 use in the embedding compiler.
const GLOBAL_DOMAIN: u64 = 0x6f1b_24c8_95ad_3e07;

/// A deterministic 64-bit identity for a runtime global value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ValueId(pub u64);

impl ValueId {
    /// Compute the identity of a global from its qualified name.
    pub fn from_name(name: &str) -> ValueId {
        ValueId(xxh64(name.as_bytes(), GLOBAL_DOMAIN))
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueId({:#018x})", self.0)
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}
