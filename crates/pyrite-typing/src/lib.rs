//! Typing templates and overload resolution for the pyrite JIT front end.
//!
//! This crate is the type-inference oracle between the bytecode type
//! propagator and the code generator: given an operation and the inferred
//! types of its operands, it answers with the concrete typed
//! [`Signature`](pyrite_core::Signature) the code generator will compile
//! against.
//!
//! ## Architecture
//!
//! - [`rating`]: conversion-cost triples ranking overload candidates.
//! - [`compat`]: the type-compatibility oracle interface and the default
//!   numeric-tower implementation.
//! - [`overload`]: the shared resolver (arity gate, per-argument rating,
//!   ambiguity detection).
//! - [`templates`]: concrete (case-list) and generic (computed) function
//!   templates, plus attribute templates.
//! - [`registry`]: the sealed tables of templates and global bindings.
//! - [`context`]: the resolution entry points the propagator calls.
//! - [`builtins`]: the full builtin catalogue.
//!
//! ## Example
//!
//! ```
//! use pyrite_core::{OpKey, Type};
//! use pyrite_typing::{NumericCompat, TypingContext, TypingRegistry};
//!
//! let registry = TypingRegistry::builtins();
//! let compat = NumericCompat;
//! let ctx = TypingContext::new(&registry, &compat);
//!
//! let sig = ctx
//!     .resolve_function(OpKey::Symbol("+"), &[Type::Int32, Type::Int32], &[])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(sig.return_type, Type::Int32);
//! ```

pub mod builtins;
pub mod compat;
pub mod context;
mod overload;
pub mod rating;
pub mod registry;
pub mod templates;

pub use builtins::normalize_index;
pub use compat::{Compatibility, NumericCompat, TypeCompat};
pub use context::TypingContext;
pub use rating::Rating;
pub use registry::TypingRegistry;
pub use templates::{AttrHandler, AttributeTemplate, FunctionTemplate, GenericFn, TemplateKind};
