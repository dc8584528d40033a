// slang-core - Built-in functions for the Slang language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # slang-core
//!
//! Extension built-ins for Slang: value dispatch, higher-order sequence
//! processing, threading, iteration, mutation and reflection.
//!
//! The crate has no evaluator of its own. A host implements [`Host`] and
//! [`Scope`], binds [`builtins`] under their names at start-up, and calls
//! special forms with their unevaluated argument forms via [`call_native`].

pub mod apply;
pub mod builtins;
pub mod error;
pub mod host;
pub mod realize;

pub use apply::{NativeFnImpl, call_native, invoke, is_invokable, make_native_fn, make_special_form};
pub use builtins::{
    BuiltinFn, BuiltinTable, ThreadPosition, builtins, implements, macro_expand, make_string,
    range, register_builtins, render_string, rewrite_step, throw, to_type, type_bindings, type_of,
};
pub use error::{AritySpec, Error, Result};
pub use host::{Context, Host, Scope};
pub use realize::{realize, realize_value};

// Re-export value types for convenience
pub use slang_value::{Interface, Seq, SlangSeq, SlangType, SlangVal, Symbol};
