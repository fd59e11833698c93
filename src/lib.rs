//! Pyrite: the typing front end of a JIT compiler for a numeric subset of
//! a dynamic source language.
//!
//! This facade re-exports the two workspace crates:
//!
//! - [`pyrite_core`]: the static type model, signatures, registry keys and
//!   errors.
//! - [`pyrite_typing`]: overload resolution, typing templates, the sealed
//!   registry and the builtin catalogue.
//!
//! ## Quick start
//!
//! ```
//! use pyrite::{NumericCompat, OpKey, Type, TypingContext, TypingRegistry};
//!
//! let registry = TypingRegistry::builtins();
//! let compat = NumericCompat;
//! let ctx = TypingContext::new(&registry, &compat);
//!
//! let sig = ctx
//!     .resolve_function(OpKey::Symbol("/"), &[Type::Int32, Type::Int32], &[])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(sig.return_type, Type::Float64);
//! ```

pub use pyrite_core::{
    AttrKey, BuiltinKind, INTP, Layout, OpKey, RegistrationError, Signature, Type, TypingError,
    ValueId,
};
pub use pyrite_typing::{
    AttrHandler, AttributeTemplate, Compatibility, FunctionTemplate, GenericFn, NumericCompat,
    Rating, TemplateKind, TypeCompat, TypingContext, TypingRegistry, normalize_index,
};
