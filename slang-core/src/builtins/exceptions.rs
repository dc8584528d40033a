// slang-core - Raising errors from Slang code
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use slang_value::SlangVal;

use crate::error::{Error, Result};
use crate::host::Context;

use super::strings::concat;

/// Build the error raised by `(throw vals...)`.
///
/// The message is the `str` rendering of `vals`.
pub fn throw(vals: &[SlangVal]) -> Error {
    Error::Thrown(concat(vals))
}

/// (throw & args) - raise an error with the concatenated message
pub(crate) fn builtin_throw(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    Err(throw(args))
}
