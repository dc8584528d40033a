// slang-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions and special forms for Slang.
//!
//! [`builtins`] returns every built-in keyed by the name a host should bind
//! it under. Nothing is registered globally: the host calls it (or
//! [`register_builtins`]) once at start-up and owns the result.

mod control;
mod exceptions;
mod higher_order;
mod iteration;
mod sequences;
mod strings;
mod threading;
mod type_checks;
mod utility;

use std::collections::BTreeMap;

use log::debug;
use num_traits::ToPrimitive;
use slang_value::{SlangType, SlangVal, Symbol};

use crate::apply::{is_invokable, make_native_fn, make_special_form};
use crate::error::{Error, Result};
use crate::host::{Context, Scope};
use crate::realize::realize_value;

pub use exceptions::throw;
pub use sequences::range;
pub use strings::{make_string, render_string};
pub use threading::{ThreadPosition, rewrite_step};
pub use type_checks::{implements, to_type, type_of};
pub use utility::macro_expand;

use control::builtin_case;
use exceptions::builtin_throw;
use higher_order::{builtin_filter, builtin_map, builtin_reduce};
use iteration::{builtin_doseq, builtin_set_bang};
use sequences::builtin_range;
use strings::builtin_str;
use threading::{builtin_thread_first, builtin_thread_last};
use type_checks::{builtin_implements_p, builtin_to_type, builtin_type};
use utility::builtin_macroexpand;

/// Signature shared by every built-in.
pub type BuiltinFn = fn(&Context<'_>, &[SlangVal]) -> Result<SlangVal>;

/// Name-to-value table of built-ins.
pub type BuiltinTable = BTreeMap<&'static str, SlangVal>;

/// Every built-in, keyed by its fixed name.
pub fn builtins() -> BuiltinTable {
    let mut table = BuiltinTable::new();

    // Control flow
    table.define_special("case", builtin_case);

    // Higher-order functions
    table.define_special("map", builtin_map);
    table.define_special("filter", builtin_filter);
    table.define_special("reduce", builtin_reduce);

    // Iteration and mutation
    table.define_special("doseq", builtin_doseq);
    table.define_special("set!", builtin_set_bang);

    // Threading
    table.define_special("->", builtin_thread_first);
    table.define_special("->>", builtin_thread_last);

    // Reflection
    table.define_native("type", builtin_type);
    table.define_native("implements?", builtin_implements_p);
    table.define_native("to-type", builtin_to_type);

    // Strings, sequences, utility
    table.define_native("str", builtin_str);
    table.define_native("range", builtin_range);
    table.define_native("macroexpand", builtin_macroexpand);
    table.define_native("throw", builtin_throw);

    table
}

/// Type descriptors keyed by the name they are exported under.
pub fn type_bindings() -> BuiltinTable {
    SlangType::named()
        .into_iter()
        .map(|(name, ty)| (name, SlangVal::Type(ty)))
        .collect()
}

/// Bind every built-in and type name into `scope`.
pub fn register_builtins(scope: &dyn Scope) {
    let table = builtins();
    let types = type_bindings();
    debug!(
        "registering {} built-ins and {} type names",
        table.len(),
        types.len()
    );
    for (name, val) in table.into_iter().chain(types) {
        scope.bind(Symbol::new(name), val);
    }
}

/// Helper trait to define built-ins more easily.
trait TableExt {
    fn define_native(&mut self, name: &'static str, func: BuiltinFn);
    fn define_special(&mut self, name: &'static str, func: BuiltinFn);
}

impl TableExt for BuiltinTable {
    fn define_native(&mut self, name: &'static str, func: BuiltinFn) {
        self.insert(name, SlangVal::NativeFn(make_native_fn(name, func)));
    }

    fn define_special(&mut self, name: &'static str, func: BuiltinFn) {
        self.insert(name, SlangVal::NativeFn(make_special_form(name, func)));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Evaluate a function-designator form and check that it is invokable.
pub(crate) fn eval_invokable(ctx: &Context<'_>, form: &SlangVal) -> Result<SlangVal> {
    let func = ctx.eval(form)?;
    if is_invokable(&func) {
        Ok(func)
    } else {
        Err(Error::NotInvokable(func.type_name()))
    }
}

/// Evaluate a collection form and realize the result.
pub(crate) fn eval_realized(
    ctx: &Context<'_>,
    context: &'static str,
    form: &SlangVal,
) -> Result<Vec<SlangVal>> {
    let val = ctx.eval(form)?;
    realize_value(context, &val)
}

/// Narrow an integer argument to `i64`.
pub(crate) fn require_int(context: &'static str, val: &SlangVal) -> Result<i64> {
    match val.unresolved() {
        SlangVal::Int(n) => Ok(*n),
        SlangVal::BigInt(n) => n
            .to_i64()
            .ok_or_else(|| Error::EvalError(format!("{}: integer {} out of range", context, n))),
        other => Err(Error::type_error_in(context, "int", other.type_name())),
    }
}
