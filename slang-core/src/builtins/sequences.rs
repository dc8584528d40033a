// slang-core - Sequence constructors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use slang_value::SlangVal;

use crate::error::{Error, Result};
use crate::host::Context;

use super::require_int;

/// Integers from `start` towards `end` (exclusive) by `step`.
///
/// A negative step counts down. Stops early rather than overflow.
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<SlangVal>> {
    if step == 0 {
        return Err(Error::EvalError("range step cannot be zero".into()));
    }

    let mut result = Vec::new();
    let mut i = start;
    while (step > 0 && i < end) || (step < 0 && i > end) {
        result.push(SlangVal::Int(i));
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(result)
}

/// (range end), (range start end), (range start end step)
pub(crate) fn builtin_range(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    let (start, end, step) = match args {
        [end] => (0, require_int("range", end)?, 1),
        [start, end] => (require_int("range", start)?, require_int("range", end)?, 1),
        [start, end, step] => (
            require_int("range", start)?,
            require_int("range", end)?,
            require_int("range", step)?,
        ),
        _ => return Err(Error::arity_range("range", 1, 3, args.len())),
    };

    Ok(SlangVal::list(range(start, end, step)?))
}
