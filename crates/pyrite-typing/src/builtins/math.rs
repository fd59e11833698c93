//! The math module: scalar transcendental functions.
//!
//! Every function shares one case list over the 64-bit integers and both
//! float widths. Module attribute access resolves each name to a
//! function-typed value whose key carries the qualified name.

use pyrite_core::{AttrKey, OpKey, RegistrationError, Signature, Type, ValueId};

use crate::registry::TypingRegistry;
use crate::templates::{AttributeTemplate, FunctionTemplate};

/// `(attribute name, qualified operation key)` for every member.
const MATH_FUNCS: [(&str, &str); 16] = [
    ("fabs", "math.fabs"),
    ("exp", "math.exp"),
    ("sqrt", "math.sqrt"),
    ("log", "math.log"),
    ("sin", "math.sin"),
    ("cos", "math.cos"),
    ("tan", "math.tan"),
    ("sinh", "math.sinh"),
    ("cosh", "math.cosh"),
    ("tanh", "math.tanh"),
    ("asin", "math.asin"),
    ("acos", "math.acos"),
    ("atan", "math.atan"),
    ("asinh", "math.asinh"),
    ("acosh", "math.acosh"),
    ("atanh", "math.atanh"),
];

fn unary_cases() -> Vec<Signature> {
    vec![
        Signature::new(Type::Float64, [Type::Int64]),
        Signature::new(Type::Float64, [Type::UInt64]),
        Signature::new(Type::Float32, [Type::Float32]),
        Signature::new(Type::Float64, [Type::Float64]),
    ]
}

pub(super) fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    let module_id = ValueId::from_name("math");
    registry.register_global(module_id, Type::Module(module_id))?;

    let mut attrs = Vec::with_capacity(MATH_FUNCS.len());
    for (name, qualified) in MATH_FUNCS {
        let key = OpKey::Symbol(qualified);
        registry.register_function_template(FunctionTemplate::concrete(key, unary_cases()))?;
        registry.register_global(ValueId::from_name(qualified), Type::Function(key))?;
        attrs.push((name, Type::Function(key)));
    }

    registry.register_attribute_template(AttributeTemplate::class_attrs(
        AttrKey::Module(module_id),
        attrs,
    ))?;

    Ok(())
}
