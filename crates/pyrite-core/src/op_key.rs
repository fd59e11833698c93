//! Registry keys for operations and attribute owners.
//!
//! Function templates are registered under an [`OpKey`]: either a symbolic
//! operation name (`"+"`, `"getitem"`, `"math.sqrt"`) or the type token of
//! a builtin callable (`range`, `len`, ...). Attribute templates are
//! registered under an [`AttrKey`] describing the owning type family.

use std::fmt::{self, Display, Formatter};

use crate::{BuiltinKind, Type, ValueId};

/// Identifier a function template is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKey {
    /// A symbolic operation name: an operator (`"+"`), a protocol
    /// operation (`"getitem"`, `"iternext"`), or a qualified function
    /// name (`"math.sqrt"`, `"array.flatten"`).
    Symbol(&'static str),
    /// The type token of a builtin callable; calling a value of type
    /// `Builtin(kind)` resolves through this key.
    Builtin(BuiltinKind),
}

impl Display for OpKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OpKey::Symbol(name) => write!(f, "{name}"),
            OpKey::Builtin(kind) => write!(f, "{kind}"),
        }
    }
}

/// Identifier an attribute template is registered under.
///
/// Attribute resolution first classifies the owner type into one of these
/// keys with [`AttrKey::of`], then looks the key up in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKey {
    /// Any `Array(dtype, ndim, layout)`.
    Array,
    Complex64,
    Complex128,
    /// A module value, by its global identity.
    Module(ValueId),
}

impl AttrKey {
    /// Classify a type into the attribute-template key that owns its
    /// attributes, if any template family covers it.
    pub fn of(ty: &Type) -> Option<AttrKey> {
        match ty {
            Type::Array { .. } => Some(AttrKey::Array),
            Type::Complex64 => Some(AttrKey::Complex64),
            Type::Complex128 => Some(AttrKey::Complex128),
            Type::Module(id) => Some(AttrKey::Module(*id)),
            _ => None,
        }
    }
}

impl Display for AttrKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AttrKey::Array => write!(f, "array"),
            AttrKey::Complex64 => write!(f, "complex64"),
            AttrKey::Complex128 => write!(f, "complex128"),
            AttrKey::Module(id) => write!(f, "module({id})"),
        }
    }
}
