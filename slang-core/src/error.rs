// slang-core - Error types for the Slang built-ins
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Slang built-ins and the hosts that drive them.

use std::fmt;

use slang_value::{SlangVal, Symbol};
use thiserror::Error;

/// Result type for Slang evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by built-ins, or passed through from the host evaluator.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Wrong number of argument forms
    #[error("{}", arity_message(.expected, .got, .name))]
    ArityError {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// A value lacks a capability the operation requires
    #[error("{}", type_message(.expected, .got, .context))]
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Attempted to call something that isn't invokable
    #[error("{0} is not invokable")]
    NotInvokable(&'static str),
    /// `case` ran out of clauses without a default
    #[error("no matching clause for '{0}'")]
    NoMatchingClause(String),
    /// `implements?` was given a type that is not an interface
    #[error("type '{0}' is not an interface type")]
    NotInterface(String),
    /// `to-type` has no conversion between the two types
    #[error("cannot convert '{from}' to '{to}'")]
    CannotConvert { from: String, to: String },
    /// `reduce` without a seed over an empty sequence
    #[error("cannot reduce empty sequence without seed")]
    EmptyReduce,
    /// Malformed special form
    #[error("Invalid '{form}' syntax: {message}")]
    InvalidSyntax { form: &'static str, message: String },
    /// Host could not resolve a symbol
    #[error("Unable to resolve symbol: {0}")]
    UndefinedSymbol(Symbol),
    /// Raised by `throw`
    #[error("{0}")]
    Thrown(String),
    /// General evaluation error
    #[error("{0}")]
    EvalError(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

fn arity_message(expected: &AritySpec, got: &usize, name: &Option<String>) -> String {
    match name {
        Some(name) => format!(
            "invalid number of arguments to '{}': expected {}, got {}",
            name, expected, got
        ),
        None => format!(
            "invalid number of arguments: expected {}, got {}",
            expected, got
        ),
    }
}

fn type_message(expected: &str, got: &str, context: &Option<String>) -> String {
    match context {
        Some(ctx) => format!("{}: invalid type; expected {}, got {}", ctx, expected, got),
        None => format!("invalid type; expected {}, got {}", expected, got),
    }
}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for a bounded range of arities.
    pub fn arity_range(name: impl Into<String>, min: usize, max: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Range(min, max),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }

    /// Create a conversion error between two type renderings.
    pub fn cannot_convert(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Error::CannotConvert {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a no-match error for a `case` subject.
    pub fn no_matching_clause(subject: &SlangVal) -> Self {
        Error::NoMatchingClause(subject.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_messages() {
        assert_eq!(
            Error::arity_at_least("map", 2, 1).to_string(),
            "invalid number of arguments to 'map': expected at least 2, got 1"
        );
        assert_eq!(
            Error::arity_range("reduce", 2, 3, 4).to_string(),
            "invalid number of arguments to 'reduce': expected 2 to 3, got 4"
        );
        let unnamed = Error::ArityError {
            expected: AritySpec::Exact(2),
            got: 0,
            name: None,
        };
        assert_eq!(
            unnamed.to_string(),
            "invalid number of arguments: expected 2, got 0"
        );
    }

    #[test]
    fn test_type_messages() {
        assert_eq!(
            Error::type_error_in("map", "seqable", "int").to_string(),
            "map: invalid type; expected seqable, got int"
        );
        assert_eq!(Error::NotInvokable("int").to_string(), "int is not invokable");
    }

    #[test]
    fn test_no_match_renders_subject() {
        let err = Error::no_matching_clause(&SlangVal::string("x"));
        assert_eq!(err.to_string(), "no matching clause for '\"x\"'");
    }

    #[test]
    fn test_conversion_message() {
        assert_eq!(
            Error::cannot_convert("String", "Int").to_string(),
            "cannot convert 'String' to 'Int'"
        );
    }
}
