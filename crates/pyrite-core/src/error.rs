//! Error types for the typing core.
//!
//! Two families:
//!
//! - [`TypingError`] - failures raised while resolving an operation or an
//!   attribute. "No matching overload" is *not* in this family: the
//!   resolver reports it as an absent result so the caller can try the
//!   next template registered under the same key.
//! - [`RegistrationError`] - failures raised while populating the registry
//!   during bootstrap.

use thiserror::Error;

use crate::{AttrKey, OpKey, Type, ValueId};

/// Render a list of argument types the way error messages embed them.
pub(crate) fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(Type::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised during operation or attribute resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypingError {
    /// Two or more candidates scored identically on the best rating.
    /// Resolution never picks one arbitrarily.
    #[error(
        "ambiguous overloading for {key}({}): {}",
        join_types(.args),
        .candidates.join("; ")
    )]
    AmbiguousOverload {
        /// The operation being resolved.
        key: OpKey,
        /// The actual argument types at the call site.
        args: Vec<Type>,
        /// Rendered signatures of every tied candidate.
        candidates: Vec<String>,
    },

    /// The owner type has no attribute with this name.
    #[error("unknown attribute '{name}' on {owner}")]
    UnknownAttribute {
        /// The type the attribute was looked up on.
        owner: Type,
        /// The attribute name that wasn't found.
        name: String,
    },

    /// Keyword arguments reached a template. No template supports them.
    #[error("keyword arguments are not supported, yet: {key}")]
    UnsupportedKwargs {
        /// The operation the call site targeted.
        key: OpKey,
    },

    /// A documented-unreachable branch was reached.
    #[error("internal typing error: {message}")]
    Internal {
        /// What went wrong.
        message: String,
    },
}

/// Errors raised while populating the registry during bootstrap.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The registry was sealed before this registration ran.
    #[error("registry is sealed: cannot register {what}")]
    Sealed {
        /// What kind of entity the registration carried.
        what: &'static str,
    },

    /// An attribute template is already registered for this owner key.
    #[error("duplicate attribute template for {key}")]
    DuplicateAttribute {
        /// The owner key that was duplicated.
        key: AttrKey,
    },

    /// A global value is already bound to a type.
    #[error("duplicate global binding for {id}")]
    DuplicateGlobal {
        /// The value identity that was duplicated.
        id: ValueId,
    },
}
