// slang-core - Threading macros
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Threading special forms: ->, ->>.

use im::Vector;
use log::trace;
use slang_value::SlangVal;

use crate::apply::{invoke, is_invokable};
use crate::error::{Error, Result};
use crate::host::Context;

/// Where the running result is spliced into each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPosition {
    /// Right after the operator: (f a b) -> (f x a b)
    First,
    /// After the last argument: (f a b) -> (f a b x)
    Last,
}

fn splice(items: &Vector<SlangVal>, value: SlangVal, position: ThreadPosition) -> SlangVal {
    let value = SlangVal::resolved(value);
    let mut rewritten = items.clone();
    match position {
        ThreadPosition::First => rewritten.insert(1, value),
        ThreadPosition::Last => rewritten.push_back(value),
    }
    SlangVal::List(rewritten)
}

/// Build a new call form with `value` spliced into `step`.
///
/// The step form is left untouched. The spliced value is wrapped as
/// [`SlangVal::Resolved`] so evaluating the new form does not evaluate it
/// again. Returns `None` when `step` is not a non-empty call form.
pub fn rewrite_step(step: &SlangVal, value: SlangVal, position: ThreadPosition) -> Option<SlangVal> {
    match step {
        SlangVal::List(items) if !items.is_empty() => Some(splice(items, value, position)),
        _ => None,
    }
}

fn thread(
    ctx: &Context<'_>,
    name: &'static str,
    args: &[SlangVal],
    position: ThreadPosition,
) -> Result<SlangVal> {
    let Some((seed, steps)) = args.split_first() else {
        return Err(Error::arity_at_least(name, 1, 0));
    };

    let mut result = ctx.eval(seed)?;

    for step in steps {
        result = match step {
            SlangVal::List(items) if !items.is_empty() => {
                let form = splice(items, result, position);
                trace!("{}: evaluating {}", name, form);
                ctx.eval(&form)?
            }
            other if is_invokable(other) => invoke(ctx, other, &[result])?,
            other => return Err(Error::NotInvokable(other.type_name())),
        };
    }

    Ok(result)
}

/// (-> x forms...) - thread first: insert x as second item in each form
pub(crate) fn builtin_thread_first(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    thread(ctx, "->", args, ThreadPosition::First)
}

/// (->> x forms...) - thread last: insert x as last item in each form
pub(crate) fn builtin_thread_last(ctx: &Context<'_>, args: &[SlangVal]) -> Result<SlangVal> {
    thread(ctx, "->>", args, ThreadPosition::Last)
}
