// slang-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and a minimal reference host for Slang integration
//! tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`read`] - Read source text into forms (test-only reader)
//! - [`eval_str`] - Evaluate code in a fresh environment with builtins
//! - [`eval_str_with_env`] - Evaluate code in an existing environment
//! - [`new_env`] - Create a new environment with builtins registered
//! - [`recorder`] - A native function that records every call it receives
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err_contains!`] - Assert that code fails with a message

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::iter::Peekable;
use std::rc::Rc;
use std::str::Chars;

pub use slang_core::{
    Context, Error, Host, Scope, SlangVal, Symbol, call_native, invoke, make_native_fn,
    make_special_form, register_builtins,
};
use slang_value::Unfold;

// =============================================================================
// Environment
// =============================================================================

/// A scope chain: own bindings plus an optional parent.
#[derive(Debug, Clone)]
pub struct TestEnv {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, SlangVal>,
    parent: Option<TestEnv>,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    #[must_use]
    pub fn child(&self) -> Self {
        TestEnv {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Whether `name` is bound directly in this scope.
    pub fn has_own(&self, name: &str) -> bool {
        self.inner.borrow().bindings.contains_key(&Symbol::new(name))
    }

    pub fn get(&self, name: &str) -> Option<SlangVal> {
        self.resolve(&Symbol::new(name)).ok()
    }
}

impl Scope for TestEnv {
    fn bind(&self, sym: Symbol, val: SlangVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    fn resolve(&self, sym: &Symbol) -> slang_core::Result<SlangVal> {
        let inner = self.inner.borrow();
        if let Some(val) = inner.bindings.get(sym) {
            return Ok(val.clone());
        }
        match &inner.parent {
            Some(parent) => parent.resolve(sym),
            None => Err(Error::UndefinedSymbol(sym.clone())),
        }
    }
}

// =============================================================================
// Evaluator
// =============================================================================

/// A bare-bones evaluator: symbols resolve, vectors evaluate their elements,
/// lists are calls, everything else evaluates to itself.
pub struct TestHost;

impl Host for TestHost {
    fn eval(&self, scope: &dyn Scope, form: &SlangVal) -> slang_core::Result<SlangVal> {
        let ctx = Context::new(self, scope);
        match form {
            SlangVal::Resolved(inner) => Ok((**inner).clone()),
            SlangVal::Symbol(sym) => scope.resolve(sym),
            SlangVal::Vector(items) => {
                let items: Vec<SlangVal> = items.iter().cloned().collect();
                Ok(SlangVal::vector(ctx.eval_all(&items)?))
            }
            SlangVal::List(items) if items.is_empty() => Ok(form.clone()),
            SlangVal::List(items) => {
                let (expanded, changed) = self.macro_expand(scope, form)?;
                if changed {
                    return self.eval(scope, &expanded);
                }
                let items: Vec<SlangVal> = items.iter().cloned().collect();
                let head = ctx.eval(&items[0])?;
                match &head {
                    SlangVal::NativeFn(nf) if nf.is_special() => {
                        call_native(&ctx, nf, &items[1..])
                    }
                    _ => {
                        let args = ctx.eval_all(&items[1..])?;
                        invoke(&ctx, &head, &args)
                    }
                }
            }
            other => Ok(other.clone()),
        }
    }

    /// Knows exactly one macro: `(inc! x)` expands to `(set! x (inc x))`.
    fn macro_expand(
        &self,
        _scope: &dyn Scope,
        form: &SlangVal,
    ) -> slang_core::Result<(SlangVal, bool)> {
        if let SlangVal::List(items) = form {
            if items.len() == 2 && items[0] == SlangVal::symbol("inc!") {
                let target = items[1].clone();
                let expanded = SlangVal::list(vec![
                    SlangVal::symbol("set!"),
                    target.clone(),
                    SlangVal::list(vec![SlangVal::symbol("inc"), target]),
                ]);
                return Ok((expanded, true));
            }
        }
        Ok((form.clone(), false))
    }
}

// =============================================================================
// Helper natives
// =============================================================================

fn int_args(name: &'static str, args: &[SlangVal]) -> slang_core::Result<Vec<i64>> {
    args.iter()
        .map(|a| match a {
            SlangVal::Int(n) => Ok(*n),
            other => Err(Error::type_error_in(name, "int", other.type_name())),
        })
        .collect()
}

fn install_helpers(env: &TestEnv) {
    let natives = [
        make_native_fn("+", |_, args| {
            Ok(SlangVal::int(int_args("+", args)?.into_iter().sum()))
        }),
        make_native_fn("*", |_, args| {
            Ok(SlangVal::int(int_args("*", args)?.into_iter().product()))
        }),
        make_native_fn("-", |_, args| {
            let nums = int_args("-", args)?;
            match nums.split_first() {
                None => Err(Error::arity_at_least("-", 1, 0)),
                Some((n, [])) => Ok(SlangVal::int(-n)),
                Some((n, rest)) => Ok(SlangVal::int(n - rest.iter().sum::<i64>())),
            }
        }),
        make_native_fn("inc", |_, args| match int_args("inc", args)?.as_slice() {
            [n] => Ok(SlangVal::int(n + 1)),
            _ => Err(Error::arity_named("inc", 1, args.len())),
        }),
        make_native_fn("even?", |_, args| match int_args("even?", args)?.as_slice() {
            [n] => Ok(SlangVal::bool(n % 2 == 0)),
            _ => Err(Error::arity_named("even?", 1, args.len())),
        }),
        make_native_fn("identity", |_, args| match args {
            [x] => Ok(x.clone()),
            _ => Err(Error::arity_named("identity", 1, args.len())),
        }),
        make_native_fn("always-true", |_, _| Ok(SlangVal::bool(true))),
        make_native_fn("always-false", |_, _| Ok(SlangVal::bool(false))),
        make_native_fn("list", |_, args| Ok(SlangVal::list(args.to_vec()))),
        make_native_fn("countdown", |_, args| match int_args("countdown", args)?.as_slice() {
            [n] => Ok(countdown(*n)),
            _ => Err(Error::arity_named("countdown", 1, args.len())),
        }),
        make_special_form("quote", |_, args| match args {
            [form] => Ok(form.clone()),
            _ => Err(Error::arity_named("quote", 1, args.len())),
        }),
    ];
    for nf in natives {
        env.bind(Symbol::new(nf.name()), SlangVal::NativeFn(nf));
    }
}

/// A lazy sequence n, n-1, ..., 1. Empty when n < 1.
pub fn countdown(n: i64) -> SlangVal {
    if n < 1 {
        return SlangVal::list(vec![]);
    }
    SlangVal::seq(Unfold::new(SlangVal::int(n), |v| match v {
        SlangVal::Int(n) if *n > 1 => Some(SlangVal::int(n - 1)),
        _ => None,
    }))
}

/// A native function that records each argument list it is called with and
/// fails when its first argument equals `fail_on`. Otherwise returns true.
pub fn recorder(fail_on: i64) -> (SlangVal, Rc<RefCell<Vec<Vec<SlangVal>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let nf = make_native_fn("watcher", move |_, args| {
        seen.borrow_mut().push(args.to_vec());
        match args.first() {
            Some(SlangVal::Int(n)) if *n == fail_on => {
                Err(Error::Thrown(format!("watcher failed on {}", n)))
            }
            _ => Ok(SlangVal::bool(true)),
        }
    });
    (SlangVal::NativeFn(nf), calls)
}

// =============================================================================
// Reader
// =============================================================================

/// Read every form in `src`.
///
/// # Panics
///
/// Panics on malformed input; this reader only serves tests.
pub fn read(src: &str) -> Vec<SlangVal> {
    let mut chars = src.chars().peekable();
    let mut forms = Vec::new();
    while let Some(form) = read_form(&mut chars) {
        forms.push(form);
    }
    forms
}

/// Read exactly one form.
pub fn read_one(src: &str) -> SlangVal {
    let mut forms = read(src);
    assert_eq!(forms.len(), 1, "expected one form in {:?}", src);
    forms.remove(0)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}
}

fn read_form(chars: &mut Peekable<Chars<'_>>) -> Option<SlangVal> {
    skip_whitespace(chars);
    let c = *chars.peek()?;
    match c {
        '(' | '[' => {
            chars.next();
            let close = if c == '(' { ')' } else { ']' };
            let mut items = Vec::new();
            loop {
                skip_whitespace(chars);
                match chars.peek() {
                    Some(&next) if next == close => {
                        chars.next();
                        break;
                    }
                    Some(_) => items.push(read_form(chars).expect("unterminated collection")),
                    None => panic!("unterminated collection"),
                }
            }
            Some(if c == '(' {
                SlangVal::list(items)
            } else {
                SlangVal::vector(items)
            })
        }
        ')' | ']' => panic!("unexpected '{}'", c),
        '\'' => {
            chars.next();
            let quoted = read_form(chars).expect("nothing to quote");
            Some(SlangVal::list(vec![SlangVal::symbol("quote"), quoted]))
        }
        '"' => {
            chars.next();
            let mut s = String::new();
            loop {
                match chars.next().expect("unterminated string") {
                    '"' => break,
                    '\\' => match chars.next().expect("unterminated escape") {
                        'n' => s.push('\n'),
                        't' => s.push('\t'),
                        other => s.push(other),
                    },
                    other => s.push(other),
                }
            }
            Some(SlangVal::string(s))
        }
        _ => {
            let mut token = String::new();
            while let Some(c) = chars.next_if(|c| {
                !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '"' | ',')
            }) {
                token.push(c);
            }
            Some(read_atom(&token))
        }
    }
}

fn read_atom(token: &str) -> SlangVal {
    match token {
        "nil" => return SlangVal::Nil,
        "true" => return SlangVal::bool(true),
        "false" => return SlangVal::bool(false),
        _ => {}
    }
    if let Some(name) = token.strip_prefix(':') {
        return SlangVal::keyword(name);
    }
    if let Ok(n) = token.parse::<i64>() {
        return SlangVal::int(n);
    }
    if token.contains('.') && token.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(f) = token.parse::<f64>() {
            return SlangVal::float(f);
        }
    }
    SlangVal::symbol(token)
}

// =============================================================================
// Evaluation helpers
// =============================================================================

/// Install a test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a new environment with builtins and helper natives registered.
#[must_use]
pub fn new_env() -> TestEnv {
    init_logging();
    let env = TestEnv::new();
    register_builtins(&env);
    install_helpers(&env);
    env
}

/// Evaluate one form in `env`.
pub fn eval_form(form: &SlangVal, env: &TestEnv) -> slang_core::Result<SlangVal> {
    TestHost.eval(env, form)
}

/// Evaluate every form in `s` in `env`, returning the last result.
pub fn eval_str_with_env(s: &str, env: &TestEnv) -> Result<SlangVal, String> {
    let mut result = SlangVal::Nil;
    for form in read(s) {
        result = eval_form(&form, env).map_err(|e| e.to_string())?;
    }
    Ok(result)
}

/// Evaluate `s` in a fresh environment.
pub fn eval_str(s: &str) -> Result<SlangVal, String> {
    eval_str_with_env(s, &new_env())
}

/// A list of integers.
pub fn ints(vals: &[i64]) -> SlangVal {
    SlangVal::list(vals.iter().copied().map(SlangVal::int).collect())
}

/// Assert that evaluating `input` produces the expected value.
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        pretty_assertions::assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error matching the given pattern.
#[macro_export]
macro_rules! assert_eval_err_contains {
    ($input:expr, $pattern:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
        let err_msg = result.unwrap_err();
        assert!(
            err_msg.to_lowercase().contains(&$pattern.to_lowercase()),
            "Error message '{}' does not contain '{}'",
            err_msg,
            $pattern
        );
    };
}
