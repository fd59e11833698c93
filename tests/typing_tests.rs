//! End-to-end resolution scenarios through the public API.

use pyrite::{
    BuiltinKind, FunctionTemplate, INTP, Layout, NumericCompat, OpKey, Signature, Type,
    TypingContext, TypingError, TypingRegistry, ValueId,
};

fn with_builtins<T>(f: impl FnOnce(&TypingContext<'_>) -> T) -> T {
    let registry = TypingRegistry::builtins();
    let compat = NumericCompat;
    let ctx = TypingContext::new(&registry, &compat);
    f(&ctx)
}

#[test]
fn addition_of_matching_int32_operands() {
    with_builtins(|ctx| {
        let sig = ctx
            .resolve_function(OpKey::Symbol("+"), &[Type::Int32, Type::Int32], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::Int32);
        assert_eq!(sig.args, vec![Type::Int32, Type::Int32]);
    });
}

#[test]
fn addition_of_mixed_width_operands_promotes_to_int64() {
    with_builtins(|ctx| {
        let sig = ctx
            .resolve_function(OpKey::Symbol("+"), &[Type::Int32, Type::Int64], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::Int64);
        assert_eq!(sig.args, vec![Type::Int64, Type::Int64]);
    });
}

#[test]
fn true_division_of_int32_pairs_returns_float64() {
    with_builtins(|ctx| {
        let sig = ctx
            .resolve_function(OpKey::Symbol("/"), &[Type::Int32, Type::Int32], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::Float64);
        assert_eq!(sig.args, vec![Type::Int32, Type::Int32]);
    });
}

#[test]
fn power_of_float64_base_and_int32_exponent() {
    with_builtins(|ctx| {
        let sig = ctx
            .resolve_function(OpKey::Symbol("**"), &[Type::Float64, Type::Int32], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::Float64);
        assert_eq!(sig.args, vec![Type::Float64, Type::Int32]);
    });
}

#[test]
fn array_getitem_with_full_rank_tuple_index() {
    with_builtins(|ctx| {
        let ary = Type::array(Type::Float32, 2, Layout::C);
        let idx = Type::uni_tuple(Type::Int64, 2);
        let sig = ctx
            .resolve_function(OpKey::Symbol("getitem"), &[ary.clone(), idx], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::Float32);
        assert_eq!(sig.args, vec![ary, Type::uni_tuple(INTP, 2)]);
    });
}

#[test]
fn array_getitem_with_slice_index_downgrades_layout() {
    with_builtins(|ctx| {
        let ary = Type::array(Type::Float32, 2, Layout::C);
        let sig = ctx
            .resolve_function(OpKey::Symbol("getitem"), &[ary.clone(), Type::Slice2], &[])
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, Type::array(Type::Float32, 2, Layout::Any));
        assert_eq!(sig.args, vec![ary, Type::Slice2]);
    });
}

#[test]
fn complex128_real_attribute_is_float64() {
    with_builtins(|ctx| {
        assert_eq!(
            ctx.resolve_attribute(&Type::Complex128, "real").unwrap(),
            Type::Float64
        );
    });
}

#[test]
fn array_shape_attribute_is_an_intp_tuple_of_the_rank() {
    with_builtins(|ctx| {
        let ary = Type::array(Type::Int32, 3, Layout::C);
        assert_eq!(
            ctx.resolve_attribute(&ary, "shape").unwrap(),
            Type::uni_tuple(INTP, 3)
        );
    });
}

#[test]
fn array_flatten_resolves_to_a_bound_rank_one_copy() {
    with_builtins(|ctx| {
        let ary = Type::array(Type::Int32, 3, Layout::C);
        let bound = ctx.resolve_attribute(&ary, "flatten").unwrap();

        let sig = ctx.resolve_method(&bound, &[], &[]).unwrap().unwrap();
        assert_eq!(sig.return_type, Type::array(Type::Int32, 1, Layout::C));
        assert_eq!(sig.recvr, Some(ary));
        assert!(sig.args.is_empty());
        assert!(sig.is_method());
    });
}

#[test]
fn duplicate_argument_patterns_register_but_resolve_ambiguously() {
    let mut registry = TypingRegistry::new();
    registry
        .register_function_template(FunctionTemplate::concrete(
            OpKey::Symbol("+"),
            [
                Signature::new(Type::Int32, [Type::Int32, Type::Int32]),
                Signature::new(Type::Int64, [Type::Int32, Type::Int32]),
            ],
        ))
        .unwrap();
    registry.seal();

    let compat = NumericCompat;
    let ctx = TypingContext::new(&registry, &compat);
    let err = ctx
        .resolve_function(OpKey::Symbol("+"), &[Type::Int32, Type::Int32], &[])
        .unwrap_err();
    match err {
        TypingError::AmbiguousOverload { candidates, .. } => {
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected AmbiguousOverload, got: {other:?}"),
    }
}

#[test]
fn resolution_is_deterministic() {
    with_builtins(|ctx| {
        let args = [Type::Int32, Type::Int64];
        let first = ctx.resolve_function(OpKey::Symbol("+"), &args, &[]).unwrap();
        for _ in 0..16 {
            let again = ctx.resolve_function(OpKey::Symbol("+"), &args, &[]).unwrap();
            assert_eq!(again, first);
            assert_eq!(
                again.as_ref().map(|s| s.return_type.clone()),
                first.as_ref().map(|s| s.return_type.clone())
            );
        }
    });
}

#[test]
fn kwargs_surface_a_compiler_internal_error() {
    with_builtins(|ctx| {
        let kws = vec![("base".to_string(), Type::Int32)];
        let err = ctx
            .resolve_function(OpKey::Symbol("**"), &[Type::Float64, Type::Int32], &kws)
            .unwrap_err();
        assert_eq!(
            err,
            TypingError::UnsupportedKwargs {
                key: OpKey::Symbol("**")
            }
        );
    });
}

#[test]
fn globals_identify_builtins_and_module_members() {
    with_builtins(|ctx| {
        assert_eq!(
            ctx.lookup_global(ValueId::from_name("len")),
            Some(&Type::Builtin(BuiltinKind::Len))
        );
        assert_eq!(
            ctx.lookup_global(ValueId::from_name("math")),
            Some(&Type::Module(ValueId::from_name("math")))
        );
        assert!(ctx.lookup_global(ValueId::from_name("no_such_global")).is_none());
    });
}

#[test]
fn a_global_function_value_resolves_calls_through_its_key() {
    // The full propagator path: recognise `math.sqrt` in the globals
    // table, pull its callable key, resolve a call through it.
    with_builtins(|ctx| {
        let value = ctx.lookup_global(ValueId::from_name("math.sqrt")).unwrap();
        let key = value.callable_key().unwrap();
        let sig = ctx.resolve_function(key, &[Type::Int64], &[]).unwrap().unwrap();
        assert_eq!(sig.return_type, Type::Float64);
    });
}

#[test]
fn unknown_operation_key_is_a_quiet_no_match() {
    with_builtins(|ctx| {
        let resolved = ctx
            .resolve_function(OpKey::Symbol("@"), &[Type::Int32, Type::Int32], &[])
            .unwrap();
        assert!(resolved.is_none());
    });
}

#[test]
fn for_loop_over_range_types_end_to_end() {
    // range(int32) -> state -> getiter -> iter -> iternext/itervalid.
    with_builtins(|ctx| {
        let state = ctx
            .resolve_function(OpKey::Builtin(BuiltinKind::Range), &[Type::Int32], &[])
            .unwrap()
            .unwrap()
            .return_type;
        assert_eq!(state, Type::RangeState32);

        let iter = ctx
            .resolve_function(OpKey::Symbol("getiter"), &[state], &[])
            .unwrap()
            .unwrap()
            .return_type;
        assert_eq!(iter, Type::RangeIter32);

        let item = ctx
            .resolve_function(OpKey::Symbol("iternext"), std::slice::from_ref(&iter), &[])
            .unwrap()
            .unwrap()
            .return_type;
        assert_eq!(item, Type::Int32);

        let valid = ctx
            .resolve_function(OpKey::Symbol("itervalid"), &[iter], &[])
            .unwrap()
            .unwrap()
            .return_type;
        assert_eq!(valid, Type::Boolean);
    });
}
