// slang-core - String coercion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use slang_value::SlangVal;

use crate::error::Result;
use crate::host::Context;

/// Strip one layer of surrounding double quotes.
fn unquoted(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Render one value for string concatenation.
///
/// Strings contribute their raw contents. Everything else contributes its
/// display form with one layer of surrounding quotes stripped.
pub fn render_string(val: &SlangVal) -> String {
    match val.unresolved() {
        SlangVal::String(s) => s.to_string(),
        other => unquoted(&other.to_string()).to_string(),
    }
}

pub(crate) fn concat(vals: &[SlangVal]) -> String {
    match vals {
        [] => String::new(),
        [only] if only.is_nil() => String::new(),
        _ => vals.iter().map(render_string).collect(),
    }
}

/// Concatenate the renderings of `vals` into a string value.
///
/// A lone nil renders as the empty string.
pub fn make_string(vals: &[SlangVal]) -> SlangVal {
    SlangVal::string(concat(vals))
}

/// (str & args) - concatenate args into a string
pub(crate) fn builtin_str(_ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    Ok(make_string(args))
}
