//! The static type model for the numeric JIT front end.
//!
//! This module provides [`Type`], the structural description of every value
//! the type propagator can observe: the numeric tower (unsigned/signed
//! integers, floats, complex), the iteration protocol state types, uniform
//! tuples, N-dimensional arrays, and the callable wrappers (`Builtin`,
//! `Function`, `Method`, `Module`) the resolver hands back to the
//! propagator.
//!
//! `Type` is a plain value: `Clone + Eq + Hash`, no interning, no identity
//! beyond structure. Composite types own their element types by `Box`.
//!
//! # Example
//!
//! ```
//! use pyrite_core::{Layout, Type};
//!
//! let ary = Type::array(Type::Float32, 2, Layout::C);
//! assert!(ary.is_array());
//! assert_eq!(ary.to_string(), "array(float32, 2d, C)");
//!
//! let anylay = ary.with_layout(Layout::Any).unwrap();
//! assert_eq!(anylay.to_string(), "array(float32, 2d, A)");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::{OpKey, ValueId};

/// Memory order of an N-dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Row-major (contiguous last axis).
    C,
    /// Column-major (contiguous first axis).
    F,
    /// Arbitrary or unknown order.
    Any,
}

impl Layout {
    /// Single-letter code used in type renderings.
    pub fn code(self) -> char {
        match self {
            Layout::C => 'C',
            Layout::F => 'F',
            Layout::Any => 'A',
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The builtin callables the propagator can observe as first-class values.
///
/// Each variant doubles as the *type* of the corresponding builtin (what
/// the globals table binds `range`, `len`, ... to) and as the registry key
/// its call signatures are registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Range,
    Len,
    Slice,
    Abs,
    Print,
}

impl BuiltinKind {
    /// The source-level name of the builtin.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Range => "range",
            BuiltinKind::Len => "len",
            BuiltinKind::Slice => "slice",
            BuiltinKind::Abs => "abs",
            BuiltinKind::Print => "print",
        }
    }
}

impl Display for BuiltinKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A static type as seen by the bytecode type propagator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The boolean type produced by comparisons and `itervalid`.
    Boolean,
    /// The unit type: the "return value" of statements such as `print`
    /// and `setitem`.
    Unit,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    /// Loop state produced by calling `range` with 32-bit arguments.
    RangeState32,
    /// Loop state produced by calling `range` with 64-bit arguments.
    RangeState64,
    RangeIter32,
    RangeIter64,
    /// A `(start, stop)` slice.
    Slice2,
    /// A `(start, stop, step)` slice.
    Slice3,
    /// The type of a builtin callable value (`range`, `len`, ...).
    Builtin(BuiltinKind),
    /// A tuple whose elements all share one type.
    UniTuple { dtype: Box<Type>, count: usize },
    /// The iterator over a uniform tuple; holds the tuple type itself.
    UniTupleIter(Box<Type>),
    /// An N-dimensional array.
    Array {
        dtype: Box<Type>,
        ndim: usize,
        layout: Layout,
    },
    /// A free function value resolved from a module attribute or a global.
    Function(OpKey),
    /// A function bound to a receiver, produced by attribute resolution.
    Method { func: OpKey, recvr: Box<Type> },
    /// A module value, identified by its global identity.
    Module(ValueId),
}

/// The platform-sized integer used for indices, lengths and slice bounds.
#[cfg(target_pointer_width = "64")]
pub const INTP: Type = Type::Int64;
/// The platform-sized integer used for indices, lengths and slice bounds.
#[cfg(not(target_pointer_width = "64"))]
pub const INTP: Type = Type::Int32;

impl Type {
    // ==========================================================================
    // Constructors for composite types
    // ==========================================================================

    /// Build an array type.
    pub fn array(dtype: Type, ndim: usize, layout: Layout) -> Type {
        Type::Array {
            dtype: Box::new(dtype),
            ndim,
            layout,
        }
    }

    /// Build a uniform tuple type.
    pub fn uni_tuple(dtype: Type, count: usize) -> Type {
        Type::UniTuple {
            dtype: Box::new(dtype),
            count,
        }
    }

    /// Build the iterator type over a uniform tuple.
    pub fn uni_tuple_iter(tuple: Type) -> Type {
        Type::UniTupleIter(Box::new(tuple))
    }

    /// Build a bound-method type.
    pub fn method(func: OpKey, recvr: Type) -> Type {
        Type::Method {
            func,
            recvr: Box::new(recvr),
        }
    }

    // ==========================================================================
    // Predicates and accessors
    // ==========================================================================

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    pub fn is_uni_tuple(&self) -> bool {
        matches!(self, Type::UniTuple { .. })
    }

    /// Destructure an array type into `(dtype, ndim, layout)`.
    pub fn as_array(&self) -> Option<(&Type, usize, Layout)> {
        match self {
            Type::Array {
                dtype,
                ndim,
                layout,
            } => Some((dtype, *ndim, *layout)),
            _ => None,
        }
    }

    /// Destructure a uniform tuple into `(dtype, count)`.
    pub fn as_uni_tuple(&self) -> Option<(&Type, usize)> {
        match self {
            Type::UniTuple { dtype, count } => Some((dtype, *count)),
            _ => None,
        }
    }

    /// The tuple type a uniform-tuple iterator walks over.
    pub fn as_uni_tuple_iter(&self) -> Option<&Type> {
        match self {
            Type::UniTupleIter(tuple) => Some(tuple),
            _ => None,
        }
    }

    /// The registry key a value of this type resolves calls through, if it
    /// is callable at all.
    pub fn callable_key(&self) -> Option<OpKey> {
        match self {
            Type::Builtin(kind) => Some(OpKey::Builtin(*kind)),
            Type::Function(key) => Some(*key),
            Type::Method { func, .. } => Some(*func),
            _ => None,
        }
    }

    // ==========================================================================
    // Array copies with one component replaced
    // ==========================================================================

    /// Copy an array type with a different layout. `None` for non-arrays.
    pub fn with_layout(&self, layout: Layout) -> Option<Type> {
        let (dtype, ndim, _) = self.as_array()?;
        Some(Type::array(dtype.clone(), ndim, layout))
    }

    /// Copy an array type with a different rank. `None` for non-arrays.
    pub fn with_ndim(&self, ndim: usize) -> Option<Type> {
        let (dtype, _, layout) = self.as_array()?;
        Some(Type::array(dtype.clone(), ndim, layout))
    }

    /// Copy an array type with a different element type. `None` for
    /// non-arrays.
    pub fn with_dtype(&self, dtype: Type) -> Option<Type> {
        let (_, ndim, layout) = self.as_array()?;
        Some(Type::array(dtype, ndim, layout))
    }

    // ==========================================================================
    // Scalar structure, used by the compatibility oracle
    // ==========================================================================

    /// `(signed, bits)` for integer scalars.
    pub fn int_info(&self) -> Option<(bool, u8)> {
        match self {
            Type::Int8 => Some((true, 8)),
            Type::Int16 => Some((true, 16)),
            Type::Int32 => Some((true, 32)),
            Type::Int64 => Some((true, 64)),
            Type::UInt8 => Some((false, 8)),
            Type::UInt16 => Some((false, 16)),
            Type::UInt32 => Some((false, 32)),
            Type::UInt64 => Some((false, 64)),
            _ => None,
        }
    }

    /// Bit width of float scalars.
    pub fn float_bits(&self) -> Option<u8> {
        match self {
            Type::Float32 => Some(32),
            Type::Float64 => Some(64),
            _ => None,
        }
    }

    /// Total bit width of complex scalars (each component is half).
    pub fn complex_bits(&self) -> Option<u8> {
        match self {
            Type::Complex64 => Some(64),
            Type::Complex128 => Some(128),
            _ => None,
        }
    }

    // ==========================================================================
    // Numeric domains, enumerated in the order the catalogue lists cases
    // ==========================================================================

    /// All signed integer widths, narrowest first.
    pub fn signed_domain() -> [Type; 4] {
        [Type::Int8, Type::Int16, Type::Int32, Type::Int64]
    }

    /// All unsigned integer widths, narrowest first.
    pub fn unsigned_domain() -> [Type; 4] {
        [Type::UInt8, Type::UInt16, Type::UInt32, Type::UInt64]
    }

    /// Unsigned then signed integers.
    pub fn integer_domain() -> [Type; 8] {
        [
            Type::UInt8,
            Type::UInt16,
            Type::UInt32,
            Type::UInt64,
            Type::Int8,
            Type::Int16,
            Type::Int32,
            Type::Int64,
        ]
    }

    /// Both float widths, narrowest first.
    pub fn real_domain() -> [Type; 2] {
        [Type::Float32, Type::Float64]
    }

    /// Both complex widths, narrowest first.
    pub fn complex_domain() -> [Type; 2] {
        [Type::Complex64, Type::Complex128]
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Unit => write!(f, "unit"),
            Type::Int8 => write!(f, "int8"),
            Type::Int16 => write!(f, "int16"),
            Type::Int32 => write!(f, "int32"),
            Type::Int64 => write!(f, "int64"),
            Type::UInt8 => write!(f, "uint8"),
            Type::UInt16 => write!(f, "uint16"),
            Type::UInt32 => write!(f, "uint32"),
            Type::UInt64 => write!(f, "uint64"),
            Type::Float32 => write!(f, "float32"),
            Type::Float64 => write!(f, "float64"),
            Type::Complex64 => write!(f, "complex64"),
            Type::Complex128 => write!(f, "complex128"),
            Type::RangeState32 => write!(f, "range_state32"),
            Type::RangeState64 => write!(f, "range_state64"),
            Type::RangeIter32 => write!(f, "range_iter32"),
            Type::RangeIter64 => write!(f, "range_iter64"),
            Type::Slice2 => write!(f, "slice2"),
            Type::Slice3 => write!(f, "slice3"),
            Type::Builtin(kind) => write!(f, "{kind}"),
            Type::UniTuple { dtype, count } => write!(f, "({dtype} x {count})"),
            Type::UniTupleIter(tuple) => write!(f, "iter({tuple})"),
            Type::Array {
                dtype,
                ndim,
                layout,
            } => write!(f, "array({dtype}, {ndim}d, {layout})"),
            Type::Function(key) => write!(f, "function({key})"),
            Type::Method { func, recvr } => write!(f, "method({func}, bound: {recvr})"),
            Type::Module(id) => write!(f, "module({id})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intp_matches_pointer_width() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(INTP, Type::Int64);
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(INTP, Type::Int32);
    }

    #[test]
    fn array_accessors_roundtrip() {
        let ary = Type::array(Type::Float32, 2, Layout::C);
        let (dtype, ndim, layout) = ary.as_array().unwrap();
        assert_eq!(*dtype, Type::Float32);
        assert_eq!(ndim, 2);
        assert_eq!(layout, Layout::C);
        assert!(Type::Float32.as_array().is_none());
    }

    #[test]
    fn array_copies_replace_one_component() {
        let ary = Type::array(Type::Int32, 3, Layout::C);

        let anylay = ary.with_layout(Layout::Any).unwrap();
        assert_eq!(anylay, Type::array(Type::Int32, 3, Layout::Any));

        let flat = ary.with_ndim(1).unwrap();
        assert_eq!(flat, Type::array(Type::Int32, 1, Layout::C));

        let mask = ary.with_dtype(Type::Boolean).unwrap();
        assert_eq!(mask, Type::array(Type::Boolean, 3, Layout::C));

        assert!(Type::Int32.with_layout(Layout::Any).is_none());
    }

    #[test]
    fn domains_have_expected_members() {
        assert_eq!(Type::signed_domain().len(), 4);
        assert_eq!(Type::unsigned_domain().len(), 4);
        assert_eq!(Type::integer_domain().len(), 8);
        assert_eq!(Type::real_domain(), [Type::Float32, Type::Float64]);
        assert_eq!(Type::complex_domain(), [Type::Complex64, Type::Complex128]);

        for ty in Type::integer_domain() {
            assert!(ty.int_info().is_some());
        }
        for ty in Type::real_domain() {
            assert!(ty.float_bits().is_some());
        }
    }

    #[test]
    fn callable_key_covers_all_callable_forms() {
        assert_eq!(
            Type::Builtin(BuiltinKind::Len).callable_key(),
            Some(OpKey::Builtin(BuiltinKind::Len))
        );
        assert_eq!(
            Type::Function(OpKey::Symbol("math.sin")).callable_key(),
            Some(OpKey::Symbol("math.sin"))
        );
        let bound = Type::method(
            OpKey::Symbol("array.flatten"),
            Type::array(Type::Int32, 1, Layout::C),
        );
        assert_eq!(bound.callable_key(), Some(OpKey::Symbol("array.flatten")));
        assert_eq!(Type::Int32.callable_key(), None);
    }

    #[test]
    fn display_renderings() {
        assert_eq!(Type::uni_tuple(INTP, 3).to_string(), "(int64 x 3)");
        assert_eq!(
            Type::array(Type::Float32, 2, Layout::Any).to_string(),
            "array(float32, 2d, A)"
        );
        assert_eq!(
            Type::uni_tuple_iter(Type::uni_tuple(Type::Int32, 2)).to_string(),
            "iter((int32 x 2))"
        );
        assert_eq!(Type::Builtin(BuiltinKind::Range).to_string(), "range");
    }
}
