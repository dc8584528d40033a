// slang-core - Higher-order built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order special forms: map, filter, reduce.
//!
//! All three evaluate the function form once, then the collection form once,
//! realize the collection and walk it strictly in order. The first failing
//! application aborts the walk; later elements are never visited.

use log::trace;
use slang_value::SlangVal;

use crate::apply::invoke;
use crate::error::{Error, Result};
use crate::host::Context;

use super::{eval_invokable, eval_realized};

/// (map f coll) or (map f c1 c2 ...) - apply f to each element
pub(crate) fn builtin_map(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("map", 2, args.len()));
    }

    let func = eval_invokable(ctx, &args[0])?;

    if args.len() == 2 {
        let items = eval_realized(ctx, "map", &args[1])?;
        let mut result = Vec::with_capacity(items.len());
        for item in items {
            result.push(invoke(ctx, &func, &[item])?);
        }
        return Ok(SlangVal::list(result));
    }

    // Several collections - zip them, stopping at the shortest
    let colls = args[1..]
        .iter()
        .map(|form| eval_realized(ctx, "map", form))
        .collect::<Result<Vec<_>>>()?;
    let min_len = colls.iter().map(Vec::len).min().unwrap_or(0);

    let mut result = Vec::with_capacity(min_len);
    for i in 0..min_len {
        let call_args: Vec<SlangVal> = colls.iter().map(|c| c[i].clone()).collect();
        result.push(invoke(ctx, &func, &call_args)?);
    }
    Ok(SlangVal::list(result))
}

/// (filter pred coll) - return elements where (pred elem) is truthy
pub(crate) fn builtin_filter(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("filter", 2, args.len()));
    }
    if args.len() > 2 {
        return Err(Error::arity_named("filter", 2, args.len()));
    }

    let pred = eval_invokable(ctx, &args[0])?;
    let items = eval_realized(ctx, "filter", &args[1])?;

    let mut result = Vec::new();
    for item in items {
        let test = invoke(ctx, &pred, std::slice::from_ref(&item))?;
        if test.is_truthy() {
            result.push(item);
        }
    }
    Ok(SlangVal::list(result))
}

/// (reduce f coll) or (reduce f seed coll) - left fold
pub(crate) fn builtin_reduce(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("reduce", 2, args.len()));
    }
    if args.len() > 3 {
        return Err(Error::arity_range("reduce", 2, 3, args.len()));
    }

    let func = eval_invokable(ctx, &args[0])?;

    let (seed_form, coll_form) = if args.len() == 3 {
        (Some(&args[1]), &args[2])
    } else {
        (None, &args[1])
    };

    // The collection is realized before the seed form is evaluated.
    let mut items = eval_realized(ctx, "reduce", coll_form)?.into_iter();
    let mut acc = match seed_form {
        Some(form) => ctx.eval(form)?,
        None => {
            trace!("reduce: no seed, folding from the first element");
            items.next().ok_or(Error::EmptyReduce)?
        }
    };

    for item in items {
        acc = invoke(ctx, &func, &[acc, item])?;
    }
    Ok(acc)
}
