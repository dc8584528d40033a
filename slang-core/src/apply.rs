// slang-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Invoking native functions and special forms.

use std::any::Any;
use std::rc::Rc;

use slang_value::{SlangNativeFn, SlangVal};

use crate::error::{Error, Result};
use crate::host::Context;

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&Context<'_>, &[SlangVal]) -> Result<SlangVal>;

fn erase(func: impl Fn(&Context<'_>, &[SlangVal]) -> Result<SlangVal> + 'static) -> Rc<dyn Any> {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    Rc::new(func_rc)
}

/// Create a native function that receives evaluated arguments.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&Context<'_>, &[SlangVal]) -> Result<SlangVal> + 'static,
) -> SlangNativeFn {
    SlangNativeFn::function(name, erase(func))
}

/// Create a special form that receives its argument forms unevaluated.
pub fn make_special_form(
    name: &'static str,
    func: impl Fn(&Context<'_>, &[SlangVal]) -> Result<SlangVal> + 'static,
) -> SlangNativeFn {
    SlangNativeFn::special_form(name, erase(func))
}

/// Whether `val` can be invoked with already-evaluated arguments.
///
/// Special forms are excluded: handing them evaluated values would evaluate
/// those values a second time.
pub fn is_invokable(val: &SlangVal) -> bool {
    matches!(val.unresolved(), SlangVal::NativeFn(nf) if !nf.is_special())
}

/// Invoke `func` with evaluated `args`.
pub fn invoke(ctx: &Context<'_>, func: &SlangVal, args: &[SlangVal]) -> Result<SlangVal> {
    match func.unresolved() {
        SlangVal::NativeFn(nf) if !nf.is_special() => call_native(ctx, nf, args),
        other => Err(Error::NotInvokable(other.type_name())),
    }
}

/// Call a native function or special form directly.
///
/// Hosts use this to dispatch special forms with their unevaluated argument
/// forms.
pub fn call_native(ctx: &Context<'_>, nf: &SlangNativeFn, args: &[SlangVal]) -> Result<SlangVal> {
    let func = nf.func().downcast_ref::<Rc<NativeFnImpl>>().ok_or_else(|| {
        Error::EvalError(format!(
            "native function '{}' was not created by make_native_fn",
            nf.name()
        ))
    })?;
    func(ctx, args)
}
