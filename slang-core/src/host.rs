// slang-core - Host evaluator contracts
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The capabilities a host evaluator lends to the built-ins.
//!
//! The built-ins never own a scope or run their own eval loop. Each call
//! receives a [`Context`] that borrows the host and the current scope for
//! the duration of that one call.

use slang_value::{SlangVal, Symbol};

use crate::error::Result;

/// A chain of bindings owned by the host.
///
/// Scopes use interior mutability: bindings written through `bind` are
/// visible to every form evaluated afterwards in the same scope.
pub trait Scope {
    /// Create or overwrite `sym` in this scope.
    fn bind(&self, sym: Symbol, val: SlangVal);

    /// Look `sym` up through this scope and its parents.
    fn resolve(&self, sym: &Symbol) -> Result<SlangVal>;
}

/// The host's evaluator.
///
/// # Resolved values
///
/// Forms rewritten by `->` and `->>` contain [`SlangVal::Resolved`]
/// markers. `eval` must return the payload of such a marker as-is.
pub trait Host {
    /// Evaluate one form against one scope.
    fn eval(&self, scope: &dyn Scope, form: &SlangVal) -> Result<SlangVal>;

    /// Expand `form` if it is a macro call, reporting whether it was.
    fn macro_expand(&self, _scope: &dyn Scope, form: &SlangVal) -> Result<(SlangVal, bool)> {
        Ok((form.clone(), false))
    }
}

/// A host and scope borrowed for one built-in call.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    host: &'a dyn Host,
    scope: &'a dyn Scope,
}

impl<'a> Context<'a> {
    pub fn new(host: &'a dyn Host, scope: &'a dyn Scope) -> Self {
        Context { host, scope }
    }

    pub fn host(&self) -> &'a dyn Host {
        self.host
    }

    pub fn scope(&self) -> &'a dyn Scope {
        self.scope
    }

    /// Evaluate `form` in the borrowed scope.
    pub fn eval(&self, form: &SlangVal) -> Result<SlangVal> {
        self.host.eval(self.scope, form)
    }

    /// Evaluate each form in order, stopping at the first error.
    pub fn eval_all(&self, forms: &[SlangVal]) -> Result<Vec<SlangVal>> {
        forms.iter().map(|form| self.eval(form)).collect()
    }

    pub fn bind(&self, sym: Symbol, val: SlangVal) {
        self.scope.bind(sym, val);
    }

    pub fn macro_expand(&self, form: &SlangVal) -> Result<(SlangVal, bool)> {
        self.host.macro_expand(self.scope, form)
    }
}
