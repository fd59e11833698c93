//! The typing registry: sealed tables of templates and globals.
//!
//! Three tables, populated once during process initialisation and sealed
//! before first use:
//!
//! - **Function templates** by [`OpKey`]. A key may carry several
//!   templates (e.g. `"getitem"` has a uniform-tuple and an array
//!   template); resolution tries them in registration order.
//! - **Attribute templates** by [`AttrKey`], one per owner family.
//! - **Globals** by [`ValueId`], binding runtime values (`len`, `math`,
//!   `math.sqrt`, ...) to their types.
//!
//! After [`seal`](TypingRegistry::seal) every `register_*` call fails and
//! the tables may be read concurrently without synchronisation.

use pyrite_core::{AttrKey, OpKey, RegistrationError, Type, ValueId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::builtins;
use crate::templates::{AttributeTemplate, FunctionTemplate};

/// Global tables of function templates, attribute templates and value
/// bindings.
#[derive(Debug, Default)]
pub struct TypingRegistry {
    functions: FxHashMap<OpKey, Vec<FunctionTemplate>>,
    attributes: FxHashMap<AttrKey, AttributeTemplate>,
    globals: FxHashMap<ValueId, Type>,
    sealed: bool,
}

impl TypingRegistry {
    /// Create a new empty, unsealed registry.
    pub fn new() -> TypingRegistry {
        TypingRegistry::default()
    }

    /// The full builtin catalogue, sealed and ready to resolve against.
    pub fn builtins() -> TypingRegistry {
        let mut registry = TypingRegistry::new();
        builtins::install(&mut registry)
            .expect("the builtin catalogue registers into a fresh registry without collisions");
        registry.seal();
        registry
    }

    // ==========================================================================
    // Registration (init-time only)
    // ==========================================================================

    fn ensure_unsealed(&self, what: &'static str) -> Result<(), RegistrationError> {
        if self.sealed {
            Err(RegistrationError::Sealed { what })
        } else {
            Ok(())
        }
    }

    /// Register a function template under its key.
    ///
    /// Duplicate case lists under one key are permitted by the data model;
    /// resolution reports them as ambiguous when they tie.
    pub fn register_function_template(
        &mut self,
        template: FunctionTemplate,
    ) -> Result<(), RegistrationError> {
        self.ensure_unsealed("function template")?;
        self.functions.entry(template.key).or_default().push(template);
        Ok(())
    }

    /// Register the attribute template for one owner family.
    pub fn register_attribute_template(
        &mut self,
        template: AttributeTemplate,
    ) -> Result<(), RegistrationError> {
        self.ensure_unsealed("attribute template")?;
        let key = template.key;
        if self.attributes.contains_key(&key) {
            return Err(RegistrationError::DuplicateAttribute { key });
        }
        self.attributes.insert(key, template);
        Ok(())
    }

    /// Bind a runtime global value to its type.
    pub fn register_global(&mut self, id: ValueId, ty: Type) -> Result<(), RegistrationError> {
        self.ensure_unsealed("global binding")?;
        if self.globals.contains_key(&id) {
            return Err(RegistrationError::DuplicateGlobal { id });
        }
        self.globals.insert(id, ty);
        Ok(())
    }

    /// Seal the registry: registration ends, concurrent reads begin.
    pub fn seal(&mut self) {
        self.sealed = true;
        debug!(
            functions = self.functions.len(),
            attributes = self.attributes.len(),
            globals = self.globals.len(),
            "typing registry sealed"
        );
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Every template registered under `key`, in registration order.
    pub fn function_templates(&self, key: OpKey) -> Option<&[FunctionTemplate]> {
        self.functions.get(&key).map(|v| v.as_slice())
    }

    /// The attribute template for one owner family.
    pub fn attribute_template(&self, key: AttrKey) -> Option<&AttributeTemplate> {
        self.attributes.get(&key)
    }

    /// The type bound to a runtime global value.
    pub fn global(&self, id: ValueId) -> Option<&Type> {
        self.globals.get(&id)
    }

    /// Number of distinct operation keys carrying templates.
    pub fn function_key_count(&self) -> usize {
        self.functions.len()
    }

    pub fn attribute_template_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn global_count(&self) -> usize {
        self.globals.len()
    }
}
