// slang-value - Value types for Slang
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Slang.
//!
//! `SlangVal` is the tagged union every host evaluator produces and the core
//! built-ins consume. Collections are persistent `im` vectors so that
//! splicing a value into a call form copies only a spine, never the
//! elements.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use im::Vector;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::seq::{Seq, SeqIter, SlangSeq, VectorSeq};
use crate::symbol::Symbol;
use crate::types::SlangType;

/// Elements of a host sequence rendered when no print-length is set.
pub const DEFAULT_SEQ_PRINT_LENGTH: usize = 32;

// Thread-local print settings (can be configured by the host)
thread_local! {
    /// Maximum number of elements to print in a sequence.
    /// None means lists and vectors print in full and host sequences print
    /// at most `DEFAULT_SEQ_PRINT_LENGTH` elements.
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}

/// A Slang runtime value.
#[derive(Clone)]
pub enum SlangVal {
    /// The nil value, representing nothing/absence
    Nil,
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Arbitrary precision integer
    BigInt(Rc<BigInt>),
    Float(f64),
    /// Immutable string
    String(Rc<str>),
    Symbol(Symbol),
    /// Self-evaluating name, rendered with a leading colon
    Keyword(Symbol),
    /// Call form or list data
    List(Vector<SlangVal>),
    Vector(Vector<SlangVal>),
    /// Host-supplied, possibly lazy, sequence
    Seq(SlangSeq),
    /// Native function or special form
    NativeFn(SlangNativeFn),
    /// Type descriptor
    Type(SlangType),
    /// Already-evaluated datum spliced into a form. Hosts evaluate it to the
    /// payload without evaluating the payload again.
    Resolved(Rc<SlangVal>),
}

// ============================================================================
// Native Functions
// ============================================================================

/// A native function or special form.
///
/// The implementation is type-erased so this crate does not depend on the
/// runtime's error and context types; `slang-core` downcasts it when
/// invoking.
#[derive(Clone)]
pub struct SlangNativeFn {
    name: &'static str,
    special: bool,
    func: Rc<dyn Any>,
}

impl SlangNativeFn {
    /// Wrap a function that receives evaluated arguments.
    pub fn function(name: &'static str, func: Rc<dyn Any>) -> Self {
        SlangNativeFn {
            name,
            special: false,
            func,
        }
    }

    /// Wrap a special form that receives unevaluated argument forms.
    pub fn special_form(name: &'static str, func: Rc<dyn Any>) -> Self {
        SlangNativeFn {
            name,
            special: true,
            func,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for SlangNativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.special {
            write!(f, "#<special-form {}>", self.name)
        } else {
            write!(f, "#<fn {}>", self.name)
        }
    }
}

impl PartialEq for SlangNativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.special == other.special
    }
}

// ============================================================================
// Constructors and Queries
// ============================================================================

impl SlangVal {
    pub fn nil() -> Self {
        SlangVal::Nil
    }

    pub fn bool(b: bool) -> Self {
        SlangVal::Bool(b)
    }

    pub fn int(n: i64) -> Self {
        SlangVal::Int(n)
    }

    pub fn bigint(n: BigInt) -> Self {
        SlangVal::BigInt(Rc::new(n))
    }

    pub fn float(n: f64) -> Self {
        SlangVal::Float(n)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        SlangVal::String(s.into())
    }

    pub fn symbol(name: &str) -> Self {
        SlangVal::Symbol(Symbol::new(name))
    }

    pub fn keyword(name: &str) -> Self {
        SlangVal::Keyword(Symbol::new(name))
    }

    pub fn list(elements: Vec<SlangVal>) -> Self {
        SlangVal::List(elements.into_iter().collect())
    }

    pub fn vector(elements: Vec<SlangVal>) -> Self {
        SlangVal::Vector(elements.into_iter().collect())
    }

    pub fn seq(seq: impl Seq + 'static) -> Self {
        SlangVal::Seq(SlangSeq::new(seq))
    }

    pub fn type_of(ty: SlangType) -> Self {
        SlangVal::Type(ty)
    }

    /// Mark `val` as already evaluated. Marking twice is a no-op.
    pub fn resolved(val: SlangVal) -> Self {
        match val {
            already @ SlangVal::Resolved(_) => already,
            other => SlangVal::Resolved(Rc::new(other)),
        }
    }

    /// The value with any resolved marker stripped.
    pub fn unresolved(&self) -> &SlangVal {
        match self {
            SlangVal::Resolved(inner) => inner.unresolved(),
            other => other,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.unresolved(), SlangVal::Nil)
    }

    /// Check if this value is truthy (not nil and not false)
    pub fn is_truthy(&self) -> bool {
        !matches!(self.unresolved(), SlangVal::Nil | SlangVal::Bool(false))
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            SlangVal::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// View this value through the sequence protocol.
    ///
    /// Nil is the empty sequence. Returns `None` for values that are not
    /// sequences at all.
    pub fn as_seq(&self) -> Option<Rc<dyn Seq>> {
        match self.unresolved() {
            SlangVal::Nil => Some(Rc::new(VectorSeq::new(Vector::new()))),
            SlangVal::List(items) | SlangVal::Vector(items) => {
                Some(Rc::new(VectorSeq::new(items.clone())))
            }
            SlangVal::Seq(seq) => Some(seq.as_seq()),
            _ => None,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            SlangVal::Nil => "nil",
            SlangVal::Bool(_) => "bool",
            SlangVal::Int(_) => "int",
            SlangVal::BigInt(_) => "bigint",
            SlangVal::Float(_) => "float",
            SlangVal::String(_) => "string",
            SlangVal::Symbol(_) => "symbol",
            SlangVal::Keyword(_) => "keyword",
            SlangVal::List(_) => "list",
            SlangVal::Vector(_) => "vector",
            SlangVal::Seq(_) => "seq",
            SlangVal::NativeFn(f) if f.is_special() => "special-form",
            SlangVal::NativeFn(_) => "fn",
            SlangVal::Type(_) => "type",
            SlangVal::Resolved(inner) => inner.type_name(),
        }
    }

    /// The runtime type descriptor of this value.
    pub fn slang_type(&self) -> SlangType {
        SlangType::of(self)
    }
}

impl From<i64> for SlangVal {
    fn from(n: i64) -> Self {
        SlangVal::Int(n)
    }
}

impl From<bool> for SlangVal {
    fn from(b: bool) -> Self {
        SlangVal::Bool(b)
    }
}

impl From<&str> for SlangVal {
    fn from(s: &str) -> Self {
        SlangVal::string(s)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

fn write_items(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: impl Iterator<Item = SlangVal>,
    limit: Option<usize>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if limit.is_some_and(|max| i >= max) {
            f.write_str(" ...")?;
            break;
        }
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

impl fmt::Display for SlangVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlangVal::Nil => write!(f, "nil"),
            SlangVal::Bool(b) => write!(f, "{}", b),
            SlangVal::Int(n) => write!(f, "{}", n),
            SlangVal::BigInt(n) => write!(f, "{}", n),
            SlangVal::Float(n) => {
                if n.is_nan() {
                    write!(f, "##NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "##Inf")
                    } else {
                        write!(f, "##-Inf")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            SlangVal::String(s) => write!(f, "\"{}\"", escape_string(s)),
            SlangVal::Symbol(sym) => write!(f, "{}", sym),
            SlangVal::Keyword(kw) => write!(f, ":{}", kw),
            SlangVal::List(items) => {
                write_items(f, "(", ")", items.iter().cloned(), get_print_length())
            }
            SlangVal::Vector(items) => {
                write_items(f, "[", "]", items.iter().cloned(), get_print_length())
            }
            SlangVal::Seq(seq) => {
                let limit = get_print_length().unwrap_or(DEFAULT_SEQ_PRINT_LENGTH);
                // One past the limit, so the ellipsis marks a real cut.
                let items = SeqIter::new(seq.as_seq()).take(limit.saturating_add(1));
                write_items(f, "(", ")", items, Some(limit))
            }
            SlangVal::NativeFn(nf) => write!(f, "{:?}", nf),
            SlangVal::Type(ty) => write!(f, "{}", ty),
            SlangVal::Resolved(inner) => write!(f, "{}", inner),
        }
    }
}

impl fmt::Debug for SlangVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for SlangVal {
    fn eq(&self, other: &Self) -> bool {
        match (self.unresolved(), other.unresolved()) {
            (SlangVal::Nil, SlangVal::Nil) => true,
            (SlangVal::Bool(a), SlangVal::Bool(b)) => a == b,
            (SlangVal::Int(a), SlangVal::Int(b)) => a == b,
            (SlangVal::BigInt(a), SlangVal::BigInt(b)) => a == b,
            (SlangVal::Int(a), SlangVal::BigInt(b)) | (SlangVal::BigInt(b), SlangVal::Int(a)) => {
                BigInt::from(*a) == **b
            }
            (SlangVal::Float(a), SlangVal::Float(b)) => a.to_bits() == b.to_bits(),
            (SlangVal::Int(a), SlangVal::Float(b)) | (SlangVal::Float(b), SlangVal::Int(a)) => {
                (*a as f64).to_bits() == b.to_bits()
            }
            (SlangVal::BigInt(a), SlangVal::Float(b)) | (SlangVal::Float(b), SlangVal::BigInt(a)) => {
                b.is_finite() && a.to_f64().is_some_and(|f| f.to_bits() == b.to_bits())
            }
            (SlangVal::String(a), SlangVal::String(b)) => a == b,
            (SlangVal::Symbol(a), SlangVal::Symbol(b)) => a == b,
            (SlangVal::Keyword(a), SlangVal::Keyword(b)) => a == b,
            (SlangVal::List(a), SlangVal::List(b)) => a == b,
            (SlangVal::Vector(a), SlangVal::Vector(b)) => a == b,
            (SlangVal::Seq(a), SlangVal::Seq(b)) => a == b,
            (SlangVal::NativeFn(a), SlangVal::NativeFn(b)) => a == b,
            (SlangVal::Type(a), SlangVal::Type(b)) => a == b,
            _ => false,
        }
    }
}
