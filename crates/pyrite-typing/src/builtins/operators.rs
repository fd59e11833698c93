//! Binary arithmetic and comparison operators over the numeric tower.

use pyrite_core::{OpKey, RegistrationError, Signature, Type};

use crate::registry::TypingRegistry;
use crate::templates::FunctionTemplate;

/// `(T, T) -> T` over the full tower: unsigned, signed, real, complex.
fn closed_binop_cases() -> Vec<Signature> {
    Type::unsigned_domain()
        .into_iter()
        .chain(Type::signed_domain())
        .chain(Type::real_domain())
        .chain(Type::complex_domain())
        .map(|ty| Signature::new(ty.clone(), [ty.clone(), ty]))
        .collect()
}

/// `(T, T) -> T` over everything but complex; `%` has no complex form.
fn modulo_cases() -> Vec<Signature> {
    Type::unsigned_domain()
        .into_iter()
        .chain(Type::signed_domain())
        .chain(Type::real_domain())
        .map(|ty| Signature::new(ty.clone(), [ty.clone(), ty]))
        .collect()
}

/// True division: integer pairs widen to `float64`; float and complex
/// pairs stay same-type.
fn true_div_cases() -> Vec<Signature> {
    let mut cases: Vec<Signature> = Type::unsigned_domain()
        .into_iter()
        .chain(Type::signed_domain())
        .map(|ty| Signature::new(Type::Float64, [ty.clone(), ty]))
        .collect();
    cases.extend(
        Type::real_domain()
            .into_iter()
            .chain(Type::complex_domain())
            .map(|ty| Signature::new(ty.clone(), [ty.clone(), ty])),
    );
    cases
}

/// Floor division: integer pairs stay integer; float pairs produce the
/// integer of matching width.
fn floor_div_cases() -> Vec<Signature> {
    let mut cases: Vec<Signature> = Type::signed_domain()
        .into_iter()
        .chain(Type::unsigned_domain())
        .map(|ty| Signature::new(ty.clone(), [ty.clone(), ty]))
        .collect();
    cases.push(Signature::new(Type::Int32, [Type::Float32, Type::Float32]));
    cases.push(Signature::new(Type::Int64, [Type::Float64, Type::Float64]));
    cases
}

/// Power: any integer exponent on a `float64` base stays `float64`; float
/// and complex pairs stay same-type.
fn power_cases() -> Vec<Signature> {
    let mut cases: Vec<Signature> = Type::unsigned_domain()
        .into_iter()
        .chain(Type::signed_domain())
        .map(|exp| Signature::new(Type::Float64, [Type::Float64, exp]))
        .collect();
    cases.extend(
        Type::real_domain()
            .into_iter()
            .chain(Type::complex_domain())
            .map(|ty| Signature::new(ty.clone(), [ty.clone(), ty])),
    );
    cases
}

/// `(T, T) -> boolean` over the real-valued widths.
fn comparison_cases() -> Vec<Signature> {
    Type::unsigned_domain()
        .into_iter()
        .chain(Type::signed_domain())
        .chain(Type::real_domain())
        .map(|ty| Signature::new(Type::Boolean, [ty.clone(), ty]))
        .collect()
}

pub(super) fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    // "/?" is the source language's version-dependent division opcode; it
    // carries the closed tower like the other arithmetic operators.
    for op in ["+", "-", "*", "/?"] {
        registry.register_function_template(FunctionTemplate::concrete(
            OpKey::Symbol(op),
            closed_binop_cases(),
        ))?;
    }

    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("%"),
        modulo_cases(),
    ))?;
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("/"),
        true_div_cases(),
    ))?;
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("//"),
        floor_div_cases(),
    ))?;
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("**"),
        power_cases(),
    ))?;

    for op in ["<", "<=", ">", ">=", "==", "!="] {
        registry.register_function_template(FunctionTemplate::concrete(
            OpKey::Symbol(op),
            comparison_cases(),
        ))?;
    }

    Ok(())
}
