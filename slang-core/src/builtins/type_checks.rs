// slang-core - Type reflection built-ins
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! type, implements?, to-type.
//!
//! Reflection goes through the fixed table in [`SlangType`] and
//! [`slang_value::Interface`]; no value is ever inspected beyond its tag.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use slang_value::{SlangType, SlangVal};

use crate::error::{Error, Result};
use crate::host::Context;
use crate::realize::realize_value;

/// The type descriptor for `val`.
pub fn type_of(val: &SlangVal) -> SlangVal {
    SlangVal::Type(SlangType::of(val))
}

/// Whether `val` satisfies the interface `target`.
///
/// A reference type is dereferenced one level first. Anything other than an
/// interface is rejected.
pub fn implements(val: &SlangVal, target: &SlangType) -> Result<bool> {
    let target = target.deref();
    let iface = target
        .as_interface()
        .ok_or_else(|| Error::NotInterface(target.to_string()))?;
    Ok(iface.is_satisfied_by(&SlangType::of(val)))
}

/// Convert `val` to `target`.
///
/// Values already assignable to `target` come back unchanged. Numbers
/// convert between each other when the result is representable, and any
/// sequence can become a list or a vector.
pub fn to_type(val: &SlangVal, target: &SlangType) -> Result<SlangVal> {
    let val = val.unresolved();
    let target = target.deref();
    let from = SlangType::of(val);

    if from.is_assignable_to(target) {
        return Ok(val.clone());
    }

    let converted = match (val, target) {
        (SlangVal::Int(n), SlangType::Float) => n.to_f64().map(SlangVal::Float),
        (SlangVal::Int(n), SlangType::BigInt) => Some(SlangVal::bigint(BigInt::from(*n))),
        (SlangVal::Float(f), SlangType::Int) => f.to_i64().map(SlangVal::Int),
        (SlangVal::Float(f), SlangType::BigInt) => BigInt::from_f64(*f).map(SlangVal::bigint),
        (SlangVal::BigInt(n), SlangType::Int) => n.to_i64().map(SlangVal::Int),
        (SlangVal::BigInt(n), SlangType::Float) => n.to_f64().map(SlangVal::Float),
        (_, SlangType::List) if val.as_seq().is_some() => {
            Some(SlangVal::list(realize_value("to-type", val)?))
        }
        (_, SlangType::Vector) if val.as_seq().is_some() => {
            Some(SlangVal::vector(realize_value("to-type", val)?))
        }
        _ => None,
    };

    converted.ok_or_else(|| Error::cannot_convert(&from, target))
}

fn require_type(context: &'static str, val: &SlangVal) -> Result<SlangType> {
    match val.unresolved() {
        SlangVal::Type(ty) => Ok(ty.clone()),
        other => Err(Error::type_error_in(context, "type", other.type_name())),
    }
}

/// (type x) - the runtime type of x
pub(crate) fn builtin_type(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("type", 1, args.len()));
    }
    Ok(type_of(&args[0]))
}

/// (implements? x Interface) - does x satisfy the interface
pub(crate) fn builtin_implements_p(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("implements?", 2, args.len()));
    }
    let target = require_type("implements?", &args[1])?;
    Ok(SlangVal::Bool(implements(&args[0], &target)?))
}

/// (to-type x Type) - convert x to Type
pub(crate) fn builtin_to_type(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("to-type", 2, args.len()));
    }
    let target = require_type("to-type", &args[1])?;
    to_type(&args[0], &target)
}
