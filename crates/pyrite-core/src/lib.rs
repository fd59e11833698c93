//! Core data model for the pyrite typing front end.
//!
//! This crate holds the leaf types shared by the whole compiler: the
//! static [`Type`] model, typed calling contracts ([`Signature`]),
//! registry keys ([`OpKey`], [`AttrKey`]), global-value identities
//! ([`ValueId`]) and the error taxonomy. It has no opinion about how
//! resolution works; that lives in `pyrite-typing`.

mod error;
mod op_key;
mod signature;
mod types;
mod value_id;

pub use error::{RegistrationError, TypingError};
pub use op_key::{AttrKey, OpKey};
pub use signature::Signature;
pub use types::{BuiltinKind, INTP, Layout, Type};
pub use value_id::ValueId;
