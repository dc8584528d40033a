// slang-core - Iteration and mutation special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! doseq and set!.
//!
//! Both write into the caller's scope directly. Bindings are never unwound:
//! after a `doseq` the loop symbol still holds the last element bound.

use log::trace;
use slang_value::{SlangVal, Symbol};

use crate::error::{Error, Result};
use crate::host::Context;

use super::eval_realized;

/// Split a `[sym seq-form]` binding vector.
fn binding_pair(binding: &SlangVal) -> Result<(Symbol, SlangVal)> {
    match binding.unresolved() {
        SlangVal::Vector(items) if items.len() == 2 => match &items[0] {
            SlangVal::Symbol(sym) => Ok((sym.clone(), items[1].clone())),
            other => Err(Error::type_error_in("doseq", "symbol", other.type_name())),
        },
        other => Err(Error::type_error_in(
            "doseq",
            "[symbol seq-form] binding",
            other.type_name(),
        )),
    }
}

/// (doseq [x coll] body...) - bind x to each element and run body
pub(crate) fn builtin_doseq(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    let Some((binding, body)) = args.split_first() else {
        return Err(Error::arity_at_least("doseq", 1, 0));
    };

    let (sym, coll_form) = binding_pair(binding)?;
    let items = eval_realized(ctx, "doseq", &coll_form)?;
    trace!("doseq: {} elements bound to {}", items.len(), sym);

    for item in items {
        ctx.bind(sym.clone(), item);
        for form in body {
            ctx.eval(form)?;
        }
    }

    Ok(SlangVal::Nil)
}

/// (set! sym value) - rebind sym in the current scope
pub(crate) fn builtin_set_bang(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("set!", 2, args.len()));
    }

    let sym = match args[0].unresolved() {
        SlangVal::Symbol(sym) => sym.clone(),
        other => return Err(Error::type_error_in("set!", "symbol", other.type_name())),
    };

    let val = ctx.eval(&args[1])?;
    ctx.bind(sym, val.clone());
    Ok(val)
}
