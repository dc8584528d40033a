// slang-core - Control flow special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Value dispatch: case.

use log::trace;
use slang_value::SlangVal;

use crate::error::{Error, Result};
use crate::host::Context;

/// (case subject key body key body ... default?) - literal value dispatch
///
/// The subject is evaluated once. Keys are compared literally, never
/// evaluated. A trailing odd form is the default.
pub(crate) fn builtin_case(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("case", 2, args.len()));
    }

    let subject = ctx.eval(&args[0])?;

    let mut clauses = &args[1..];
    while let [key, body, rest @ ..] = clauses {
        if *key == subject {
            trace!("case: {} matched", key);
            return ctx.eval(body);
        }
        clauses = rest;
    }

    if let [default] = clauses {
        trace!("case: no key matched {}, using default", subject);
        return ctx.eval(default);
    }

    Err(Error::no_matching_clause(&subject))
}
