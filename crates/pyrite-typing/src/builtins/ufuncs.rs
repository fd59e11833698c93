//! The ndarray module: elementwise array operations.
//!
//! Ufuncs follow the explicit-output calling convention `(inputs..., out)`
//! and type as the output array. Mixed input dtypes are not handled yet;
//! the guard conditions below reject them.

use pyrite_core::{AttrKey, OpKey, RegistrationError, Signature, Type, ValueId};

use crate::context::TypingContext;
use crate::registry::TypingRegistry;
use crate::templates::{AttributeTemplate, FunctionTemplate, GenericFn};

const UNARY_UFUNCS: [(&str, &str); 5] = [
    ("absolute", "ndarray.absolute"),
    ("exp", "ndarray.exp"),
    ("sin", "ndarray.sin"),
    ("cos", "ndarray.cos"),
    ("tan", "ndarray.tan"),
];

const BINARY_UFUNCS: [(&str, &str); 4] = [
    ("add", "ndarray.add"),
    ("subtract", "ndarray.subtract"),
    ("multiply", "ndarray.multiply"),
    ("divide", "ndarray.divide"),
];

fn unary_ufunc(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [inp, out] = args else { return None };
    let (inp_dtype, _, _) = inp.as_array()?;
    let (out_dtype, _, _) = out.as_array()?;
    if inp_dtype != out_dtype {
        // TODO: handle differing dtypes
        return None;
    }
    Some(Signature::new(out.clone(), [inp.clone(), out.clone()]))
}

fn binary_ufunc(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [vx, vy, out] = args else { return None };
    let (vx_dtype, _, _) = vx.as_array()?;
    let (vy_dtype, _, _) = vy.as_array()?;
    let (out_dtype, _, _) = out.as_array()?;
    if vx_dtype != vy_dtype && vx_dtype != out_dtype {
        // TODO: handle differing dtypes
        return None;
    }
    Some(Signature::new(
        out.clone(),
        [vx.clone(), vy.clone(), out.clone()],
    ))
}

pub(super) fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    let module_id = ValueId::from_name("ndarray");
    registry.register_global(module_id, Type::Module(module_id))?;

    let mut attrs = Vec::with_capacity(UNARY_UFUNCS.len() + BINARY_UFUNCS.len());
    let groups: [(&[(&str, &str)], GenericFn); 2] = [
        (&UNARY_UFUNCS, unary_ufunc),
        (&BINARY_UFUNCS, binary_ufunc),
    ];
    for (members, hook) in groups {
        for &(name, qualified) in members {
            let key = OpKey::Symbol(qualified);
            registry.register_function_template(FunctionTemplate::generic(key, hook))?;
            registry.register_global(ValueId::from_name(qualified), Type::Function(key))?;
            attrs.push((name, Type::Function(key)));
        }
    }

    registry.register_attribute_template(AttributeTemplate::class_attrs(
        AttrKey::Module(module_id),
        attrs,
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pyrite_core::Layout;

    use super::*;
    use crate::compat::NumericCompat;

    fn with_ctx<T>(f: impl FnOnce(&TypingContext<'_>) -> T) -> T {
        let registry = TypingRegistry::builtins();
        let compat = NumericCompat;
        let ctx = TypingContext::new(&registry, &compat);
        f(&ctx)
    }

    fn f64_array(ndim: usize) -> Type {
        Type::array(Type::Float64, ndim, Layout::C)
    }

    #[test]
    fn module_attributes_cover_all_ufuncs() {
        with_ctx(|ctx| {
            let module = Type::Module(ValueId::from_name("ndarray"));
            for (name, qualified) in UNARY_UFUNCS.into_iter().chain(BINARY_UFUNCS) {
                let resolved = ctx.resolve_attribute(&module, name).unwrap();
                assert_eq!(resolved, Type::Function(OpKey::Symbol(qualified)));
            }
            assert!(ctx.resolve_attribute(&module, "matmul").is_err());
        });
    }

    #[test]
    fn unary_ufunc_types_as_the_output_array() {
        with_ctx(|ctx| {
            let inp = f64_array(2);
            let out = f64_array(2);
            let sig = ctx
                .resolve_function(
                    OpKey::Symbol("ndarray.exp"),
                    &[inp.clone(), out.clone()],
                    &[],
                )
                .unwrap()
                .unwrap();
            assert_eq!(sig.return_type, out);
            assert_eq!(sig.args, vec![inp, out]);
        });
    }

    #[test]
    fn unary_ufunc_rejects_differing_dtypes() {
        with_ctx(|ctx| {
            let inp = Type::array(Type::Float32, 2, Layout::C);
            let out = f64_array(2);
            let resolved = ctx
                .resolve_function(OpKey::Symbol("ndarray.sin"), &[inp, out], &[])
                .unwrap();
            assert!(resolved.is_none());
        });
    }

    #[test]
    fn unary_ufunc_rejects_scalar_operands() {
        with_ctx(|ctx| {
            let resolved = ctx
                .resolve_function(
                    OpKey::Symbol("ndarray.absolute"),
                    &[Type::Float64, f64_array(1)],
                    &[],
                )
                .unwrap();
            assert!(resolved.is_none());
        });
    }

    #[test]
    fn binary_ufunc_types_as_the_output_array() {
        with_ctx(|ctx| {
            let vx = f64_array(1);
            let vy = f64_array(1);
            let out = f64_array(1);
            let sig = ctx
                .resolve_function(
                    OpKey::Symbol("ndarray.add"),
                    &[vx.clone(), vy.clone(), out.clone()],
                    &[],
                )
                .unwrap()
                .unwrap();
            assert_eq!(sig.return_type, out);
            assert_eq!(sig.args, vec![vx, vy, out]);
        });
    }

    #[test]
    fn binary_ufunc_guard_rejects_fully_mismatched_dtypes() {
        with_ctx(|ctx| {
            let vx = Type::array(Type::Float32, 1, Layout::C);
            let vy = f64_array(1);
            let out = Type::array(Type::Int64, 1, Layout::C);
            let resolved = ctx
                .resolve_function(OpKey::Symbol("ndarray.multiply"), &[vx, vy, out], &[])
                .unwrap();
            assert!(resolved.is_none());
        });
    }

    #[test]
    fn binary_ufunc_guard_admits_first_input_matching_the_output() {
        // The guard only rejects when the first input's dtype matches
        // neither the second input nor the output; vx == out with a
        // differing vy passes through and types as the output.
        with_ctx(|ctx| {
            let vx = f64_array(1);
            let vy = Type::array(Type::Float32, 1, Layout::C);
            let out = f64_array(1);
            let sig = ctx
                .resolve_function(
                    OpKey::Symbol("ndarray.subtract"),
                    &[vx.clone(), vy.clone(), out.clone()],
                    &[],
                )
                .unwrap()
                .unwrap();
            assert_eq!(sig.args, vec![vx, vy, out]);
        });
    }
}
