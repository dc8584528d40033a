// slang-core - Utility built-ins
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use log::trace;
use slang_value::SlangVal;

use crate::error::{Error, Result};
use crate::host::Context;

/// Expand `form` through the host, dropping the "was expanded" flag.
pub fn macro_expand(ctx: &Context<'_>, form: &SlangVal) -> Result<SlangVal> {
    let (expanded, changed) = ctx.macro_expand(form.unresolved())?;
    trace!("macroexpand: {} (expanded: {})", expanded, changed);
    Ok(expanded)
}

/// (macroexpand form) - expand a quoted form once
pub(crate) fn builtin_macroexpand(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("macroexpand", 1, args.len()));
    }
    macro_expand(ctx, &args[0])
}
