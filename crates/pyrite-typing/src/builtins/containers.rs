//! Container typing: uniform tuples and N-dimensional arrays.
//!
//! Covers tuple iteration, `getitem`/`setitem`, `len`, elementwise array
//! equality, and the array attributes (`shape`, `flatten`).

use pyrite_core::{
    AttrKey, BuiltinKind, INTP, Layout, OpKey, RegistrationError, Signature, Type,
};

use crate::context::TypingContext;
use crate::registry::TypingRegistry;
use crate::templates::{AttrHandler, AttributeTemplate, FunctionTemplate};

/// Normalise an index type the way the code generator consumes it:
/// tuple indices coerce their elements to the platform integer, slices
/// pass through, and everything else collapses to a single platform
/// integer.
pub fn normalize_index(index: &Type) -> Type {
    match index {
        Type::UniTuple { count, .. } => Type::uni_tuple(INTP, *count),
        Type::Slice2 => Type::Slice2,
        Type::Slice3 => Type::Slice3,
        _ => INTP,
    }
}

fn get_iter_uni_tuple(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [tup] = args else { return None };
    if !tup.is_uni_tuple() {
        return None;
    }
    Some(Signature::new(Type::uni_tuple_iter(tup.clone()), [tup.clone()]))
}

fn iter_next_safe(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [tupiter] = args else { return None };
    let (dtype, _) = tupiter.as_uni_tuple_iter()?.as_uni_tuple()?;
    Some(Signature::new(dtype.clone(), [tupiter.clone()]))
}

fn get_item_uni_tuple(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [tup, idx] = args else { return None };
    let (dtype, _) = tup.as_uni_tuple()?;
    Some(Signature::new(
        dtype.clone(),
        [tup.clone(), normalize_index(idx)],
    ))
}

fn get_item_array(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [ary, idx] = args else { return None };
    let (dtype, ndim, _) = ary.as_array()?;

    let idx = normalize_index(idx);
    let res = if matches!(idx, Type::Slice2 | Type::Slice3) {
        // A sliced view keeps the rank but the memory order is no longer
        // knowable statically.
        ary.with_layout(Layout::Any)?
    } else if let Type::UniTuple { count, .. } = &idx {
        if *count != ndim {
            return None;
        }
        dtype.clone()
    } else {
        // A single platform-integer index only applies to rank-1 arrays.
        if ndim != 1 {
            return None;
        }
        dtype.clone()
    };

    Some(Signature::new(res, [ary.clone(), idx]))
}

fn set_item_array(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [ary, idx, _val] = args else { return None };
    let (dtype, _, _) = ary.as_array()?;
    Some(Signature::new(
        Type::Unit,
        [ary.clone(), normalize_index(idx), dtype.clone()],
    ))
}

fn len_array(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [ary] = args else { return None };
    if !ary.is_array() {
        return None;
    }
    Some(Signature::new(INTP, [ary.clone()]))
}

fn eq_array(_ctx: &TypingContext<'_>, args: &[Type], _recvr: Option<&Type>) -> Option<Signature> {
    let [va, vb] = args else { return None };
    if !va.is_array() || va != vb {
        return None;
    }
    Some(Signature::new(
        va.with_dtype(Type::Boolean)?,
        [va.clone(), vb.clone()],
    ))
}

fn flatten_array(_ctx: &TypingContext<'_>, args: &[Type], recvr: Option<&Type>) -> Option<Signature> {
    if !args.is_empty() {
        return None;
    }
    let this = recvr?;
    let (_, _, layout) = this.as_array()?;
    // Only contiguous row-major data flattens without a copy.
    if layout != Layout::C {
        return None;
    }
    Some(Signature::method(this.with_ndim(1)?, [], this.clone()))
}

fn shape_attr(ary: &Type) -> Option<Type> {
    let (_, ndim, _) = ary.as_array()?;
    Some(Type::uni_tuple(INTP, ndim))
}

fn flatten_attr(ary: &Type) -> Option<Type> {
    if !ary.is_array() {
        return None;
    }
    Some(Type::method(OpKey::Symbol("array.flatten"), ary.clone()))
}

pub(super) fn install(registry: &mut TypingRegistry) -> Result<(), RegistrationError> {
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("getiter"),
        get_iter_uni_tuple,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("iternextsafe"),
        iter_next_safe,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("getitem"),
        get_item_uni_tuple,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("getitem"),
        get_item_array,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("setitem"),
        set_item_array,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Builtin(BuiltinKind::Len),
        len_array,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("=="),
        eq_array,
    ))?;
    registry.register_function_template(FunctionTemplate::generic(
        OpKey::Symbol("array.flatten"),
        flatten_array,
    ))?;

    registry.register_attribute_template(AttributeTemplate::with_handlers(
        AttrKey::Array,
        [
            ("shape", shape_attr as AttrHandler),
            ("flatten", flatten_attr as AttrHandler),
        ],
    ))?;

    Ok(())
}
