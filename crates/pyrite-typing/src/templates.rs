//! Function and attribute templates.
//!
//! A [`FunctionTemplate`] answers "given these actual argument types,
//! which typed signature does the code generator use?" for one operation
//! key. Two kinds exist:
//!
//! - **Concrete**: an enumerated case list, every case a fixed
//!   [`Signature`].
//! - **Generic**: a hook that *computes* one candidate signature from the
//!   actuals (and the bound receiver, for method templates). The computed
//!   candidate still runs through the shared resolver, which validates
//!   each formal against each actual.
//!
//! An [`AttributeTemplate`] answers "what is the type of `owner.name`?"
//! for one owner family, either through per-name handler functions or a
//! plain name-to-type map.

use pyrite_core::{AttrKey, OpKey, Signature, Type, TypingError};
use rustc_hash::FxHashMap;

use crate::context::TypingContext;
use crate::overload::select_overload;

/// Hook computing a candidate signature for a generic template.
///
/// The third parameter is the bound receiver when the template resolves a
/// method call; free-function templates ignore it. Returning `None` means
/// "this template has no signature for these actuals", which is not an
/// error.
pub type GenericFn = fn(&TypingContext<'_>, &[Type], Option<&Type>) -> Option<Signature>;

/// Handler computing the type of one attribute from its owner type.
pub type AttrHandler = fn(&Type) -> Option<Type>;

/// The two template forms.
#[derive(Debug, Clone)]
pub enum TemplateKind {
    /// Fixed case list.
    Concrete { cases: Vec<Signature> },
    /// Computed candidate.
    Generic { generic: GenericFn },
}

/// A resolver for one operation key.
#[derive(Debug, Clone)]
pub struct FunctionTemplate {
    pub key: OpKey,
    pub kind: TemplateKind,
}

impl FunctionTemplate {
    /// A template with an enumerated case list.
    pub fn concrete(key: OpKey, cases: impl Into<Vec<Signature>>) -> FunctionTemplate {
        FunctionTemplate {
            key,
            kind: TemplateKind::Concrete { cases: cases.into() },
        }
    }

    /// A template computing its candidate from the actuals.
    pub fn generic(key: OpKey, generic: GenericFn) -> FunctionTemplate {
        FunctionTemplate {
            key,
            kind: TemplateKind::Generic { generic },
        }
    }

    /// Resolve a call against this template.
    ///
    /// `Ok(None)` means no case matched; the caller may try the next
    /// template registered under the same key. Keyword arguments are
    /// rejected outright.
    pub fn apply(
        &self,
        ctx: &TypingContext<'_>,
        args: &[Type],
        kws: &[(String, Type)],
        recvr: Option<&Type>,
    ) -> Result<Option<Signature>, TypingError> {
        if !kws.is_empty() {
            return Err(TypingError::UnsupportedKwargs { key: self.key });
        }
        match &self.kind {
            TemplateKind::Concrete { cases } => select_overload(ctx, self.key, cases, args),
            TemplateKind::Generic { generic } => match generic(ctx, args, recvr) {
                None => Ok(None),
                Some(sig) => select_overload(ctx, self.key, std::slice::from_ref(&sig), args),
            },
        }
    }
}

#[derive(Debug, Clone)]
enum AttrTemplateKind {
    /// Per-name handler functions, for attributes computed from the owner.
    Handlers(FxHashMap<&'static str, AttrHandler>),
    /// A direct name-to-type map, for attributes independent of the
    /// owner's structure.
    ClassAttr(FxHashMap<&'static str, Type>),
}

/// Resolves named attributes for one owner family.
#[derive(Debug, Clone)]
pub struct AttributeTemplate {
    pub key: AttrKey,
    kind: AttrTemplateKind,
}

impl AttributeTemplate {
    /// A template dispatching each attribute name to a handler function.
    pub fn with_handlers(
        key: AttrKey,
        handlers: impl IntoIterator<Item = (&'static str, AttrHandler)>,
    ) -> AttributeTemplate {
        AttributeTemplate {
            key,
            kind: AttrTemplateKind::Handlers(handlers.into_iter().collect()),
        }
    }

    /// A template resolving attributes through a fixed name-to-type map.
    pub fn class_attrs(
        key: AttrKey,
        attrs: impl IntoIterator<Item = (&'static str, Type)>,
    ) -> AttributeTemplate {
        AttributeTemplate {
            key,
            kind: AttrTemplateKind::ClassAttr(attrs.into_iter().collect()),
        }
    }

    /// The type of `owner.attr`, or `None` if this template does not know
    /// the name.
    pub fn resolve(&self, owner: &Type, attr: &str) -> Option<Type> {
        match &self.kind {
            AttrTemplateKind::Handlers(handlers) => handlers.get(attr)?(owner),
            AttrTemplateKind::ClassAttr(attrs) => attrs.get(attr).cloned(),
        }
    }
}
