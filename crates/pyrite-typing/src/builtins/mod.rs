//! The builtin catalogue.
//!
//! Installs every function template, attribute template and global value
//! binding the propagator can encounter, grouped by semantic family:
//!
//! - [`scalars`]: `print`/`abs`/`slice`/`range`, the range iteration
//!   protocol, complex component attributes.
//! - [`operators`]: binary arithmetic and comparisons over the numeric
//!   tower.
//! - [`containers`]: uniform tuples and arrays, including index
//!   normalisation.
//! - [`math`]: scalar transcendental functions.
//! - [`ufuncs`]: elementwise array operations.
//!
//! Registration order within a group is irrelevant (lookups are keyed),
//! but groups registering several templates under one key (`"getiter"`,
//! `"getitem"`, `"=="`) rely on concrete case lists being tried before the
//! generic hooks of later groups, which the group order below preserves.

mod containers;
mod math;
mod operators;
mod scalars;
mod ufuncs;

pub use containers::normalize_index;

use pyrite_core::RegistrationError;

use crate::registry::TypingRegistry;

/// Install the full catalogue into an unsealed registry.
pub fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    scalars::install(registry)?;
    operators::install(registry)?;
    containers::install(registry)?;
    math::install(registry)?;
    ufuncs::install(registry)?;
    Ok(())
}
