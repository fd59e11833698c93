//! Scalar builtins: `print`, `abs`, `slice`, `range`, the range iteration
//! protocol, and the complex component attributes.

use pyrite_core::{AttrKey, BuiltinKind, INTP, OpKey, RegistrationError, Signature, Type, ValueId};

use crate::registry::TypingRegistry;
use crate::templates::{AttributeTemplate, FunctionTemplate};

pub(super) fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    // print accepts any single integer- or real-domain scalar.
    let print_cases: Vec<Signature> = Type::integer_domain()
        .into_iter()
        .chain(Type::real_domain())
        .map(|ty| Signature::new(Type::Unit, [ty]))
        .collect();
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Builtin(BuiltinKind::Print),
        print_cases,
    ))?;

    // abs is identity-typed over the signed widths.
    let abs_cases: Vec<Signature> = Type::signed_domain()
        .into_iter()
        .map(|ty| Signature::new(ty.clone(), [ty]))
        .collect();
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Builtin(BuiltinKind::Abs),
        abs_cases,
    ))?;

    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Builtin(BuiltinKind::Slice),
        [
            Signature::new(Type::Slice2, [INTP, INTP]),
            Signature::new(Type::Slice3, [INTP, INTP, INTP]),
        ],
    ))?;

    // The 32-bit set has no two-argument form.
    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Builtin(BuiltinKind::Range),
        [
            Signature::new(Type::RangeState32, [Type::Int32]),
            Signature::new(Type::RangeState32, [Type::Int32, Type::Int32, Type::Int32]),
            Signature::new(Type::RangeState64, [Type::Int64]),
            Signature::new(Type::RangeState64, [Type::Int64, Type::Int64]),
            Signature::new(Type::RangeState64, [Type::Int64, Type::Int64, Type::Int64]),
        ],
    ))?;

    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("getiter"),
        [
            Signature::new(Type::RangeIter32, [Type::RangeState32]),
            Signature::new(Type::RangeIter64, [Type::RangeState64]),
        ],
    ))?;

    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("iternext"),
        [
            Signature::new(Type::Int32, [Type::RangeIter32]),
            Signature::new(Type::Int64, [Type::RangeIter64]),
        ],
    ))?;

    registry.register_function_template(FunctionTemplate::concrete(
        OpKey::Symbol("itervalid"),
        [
            Signature::new(Type::Boolean, [Type::RangeIter32]),
            Signature::new(Type::Boolean, [Type::RangeIter64]),
        ],
    ))?;

    registry.register_attribute_template(AttributeTemplate::class_attrs(
        AttrKey::Complex64,
        [("real", Type::Float32), ("imag", Type::Float32)],
    ))?;
    registry.register_attribute_template(AttributeTemplate::class_attrs(
        AttrKey::Complex128,
        [("real", Type::Float64), ("imag", Type::Float64)],
    ))?;

    for kind in [
        BuiltinKind::Range,
        BuiltinKind::Len,
        BuiltinKind::Slice,
        BuiltinKind::Abs,
        BuiltinKind::Print,
    ] {
        registry.register_global(ValueId::from_name(kind.name()), Type::Builtin(kind))?;
    }
    // Legacy alias kept for sources compiled in compatibility mode.
    registry.register_global(
        ValueId::from_name("xrange"),
        Type::Builtin(BuiltinKind::Range),
    )?;

    Ok(())
}
