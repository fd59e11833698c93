//! The typing context: the resolution entry points the propagator calls.
//!
//! A [`TypingContext`] borrows the sealed registry and the
//! type-compatibility oracle and exposes the four queries of the typing
//! core: `resolve_function`, `resolve_method`, `resolve_attribute` and
//! `lookup_global`. It holds no mutable state; every query is a pure
//! function of its inputs and the sealed registry, so one context can be
//! shared freely across a compilation.

use pyrite_core::{AttrKey, OpKey, Signature, Type, TypingError, ValueId};

use crate::compat::{Compatibility, TypeCompat};
use crate::registry::TypingRegistry;

/// Read-only view over the registry plus the oracle.
pub struct TypingContext<'a> {
    registry: &'a TypingRegistry,
    compat: &'a dyn TypeCompat,
}

impl<'a> TypingContext<'a> {
    pub fn new(registry: &'a TypingRegistry, compat: &'a dyn TypeCompat) -> TypingContext<'a> {
        TypingContext { registry, compat }
    }

    /// Score one actual/formal pair through the oracle.
    pub fn type_compatibility(&self, actual: &Type, formal: &Type) -> Option<Compatibility> {
        self.compat.type_compatibility(actual, formal)
    }

    /// Resolve an operation against every template registered under `key`,
    /// in registration order. The first template producing a signature
    /// wins; `Ok(None)` means no template matched.
    pub fn resolve_function(
        &self,
        key: OpKey,
        args: &[Type],
        kws: &[(String, Type)],
    ) -> Result<Option<Signature>, TypingError> {
        let Some(templates) = self.registry.function_templates(key) else {
            return Ok(None);
        };
        for template in templates {
            if let Some(sig) = template.apply(self, args, kws, None)? {
                return Ok(Some(sig));
            }
        }
        Ok(None)
    }

    /// Resolve a call through a bound-method type.
    ///
    /// The receiver travels out of band: the argument list stays as the
    /// call site wrote it (no hidden self injection) and the winning
    /// signature carries the receiver in its `recvr` slot.
    pub fn resolve_method(
        &self,
        method: &Type,
        args: &[Type],
        kws: &[(String, Type)],
    ) -> Result<Option<Signature>, TypingError> {
        let Type::Method { func, recvr } = method else {
            return Err(TypingError::Internal {
                message: format!("resolve_method on non-method type {method}"),
            });
        };
        let Some(templates) = self.registry.function_templates(*func) else {
            return Ok(None);
        };
        for template in templates {
            if let Some(sig) = template.apply(self, args, kws, Some(recvr))? {
                return Ok(Some(sig));
            }
        }
        Ok(None)
    }

    /// The type of `owner.attr`.
    pub fn resolve_attribute(&self, owner: &Type, attr: &str) -> Result<Type, TypingError> {
        AttrKey::of(owner)
            .and_then(|key| self.registry.attribute_template(key))
            .and_then(|template| template.resolve(owner, attr))
            .ok_or_else(|| TypingError::UnknownAttribute {
                owner: owner.clone(),
                name: attr.to_string(),
            })
    }

    /// The type bound to a runtime global, for recognising builtins in the
    /// bytecode.
    pub fn lookup_global(&self, id: ValueId) -> Option<&'a Type> {
        self.registry.global(id)
    }

    pub fn registry(&self) -> &'a TypingRegistry {
        self.registry
    }
}
