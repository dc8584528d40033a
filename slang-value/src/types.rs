// slang-value - Type descriptors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime type descriptors and the interface table.
//!
//! Every [`SlangVal`] maps to exactly one concrete [`SlangType`]. Interfaces
//! are capabilities that several concrete types can satisfy; which types
//! satisfy which interface is fixed by [`Interface::is_satisfied_by`].

use std::fmt;

use crate::value::SlangVal;

/// Capability types usable with `implements?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// Satisfied by every type.
    Any,
    /// First/rest sequence access.
    Seqable,
    /// Callable with already-evaluated arguments.
    Invokable,
    /// Integers, big integers and floats.
    Number,
}

impl Interface {
    pub fn name(self) -> &'static str {
        match self {
            Interface::Any => "Any",
            Interface::Seqable => "Seqable",
            Interface::Invokable => "Invokable",
            Interface::Number => "Number",
        }
    }

    /// Whether values of type `ty` satisfy this interface.
    pub fn is_satisfied_by(self, ty: &SlangType) -> bool {
        match (self, ty) {
            (Interface::Any, _) => true,
            (
                Interface::Seqable,
                SlangType::Nil | SlangType::List | SlangType::Vector | SlangType::Seq,
            ) => true,
            (Interface::Invokable, SlangType::Fn) => true,
            (Interface::Number, SlangType::Int | SlangType::BigInt | SlangType::Float) => true,
            _ => false,
        }
    }
}

/// A runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlangType {
    Nil,
    Bool,
    Int,
    BigInt,
    Float,
    String,
    Symbol,
    Keyword,
    List,
    Vector,
    Seq,
    Fn,
    SpecialForm,
    Type,
    Interface(Interface),
    /// One level of indirection to another type.
    Ref(Box<SlangType>),
}

impl SlangType {
    /// The concrete type of `val`. Resolved markers report their payload.
    pub fn of(val: &SlangVal) -> SlangType {
        match val {
            SlangVal::Nil => SlangType::Nil,
            SlangVal::Bool(_) => SlangType::Bool,
            SlangVal::Int(_) => SlangType::Int,
            SlangVal::BigInt(_) => SlangType::BigInt,
            SlangVal::Float(_) => SlangType::Float,
            SlangVal::String(_) => SlangType::String,
            SlangVal::Symbol(_) => SlangType::Symbol,
            SlangVal::Keyword(_) => SlangType::Keyword,
            SlangVal::List(_) => SlangType::List,
            SlangVal::Vector(_) => SlangType::Vector,
            SlangVal::Seq(_) => SlangType::Seq,
            SlangVal::NativeFn(f) if f.is_special() => SlangType::SpecialForm,
            SlangVal::NativeFn(_) => SlangType::Fn,
            SlangVal::Type(_) => SlangType::Type,
            SlangVal::Resolved(inner) => SlangType::of(inner),
        }
    }

    /// Look up a type by the name it is exported under.
    pub fn lookup(name: &str) -> Option<SlangType> {
        Self::named()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ty)| ty)
    }

    /// Every named type, concrete types first, then interfaces.
    pub fn named() -> Vec<(&'static str, SlangType)> {
        vec![
            ("Nil", SlangType::Nil),
            ("Bool", SlangType::Bool),
            ("Int", SlangType::Int),
            ("BigInt", SlangType::BigInt),
            ("Float", SlangType::Float),
            ("String", SlangType::String),
            ("Symbol", SlangType::Symbol),
            ("Keyword", SlangType::Keyword),
            ("List", SlangType::List),
            ("Vector", SlangType::Vector),
            ("Seq", SlangType::Seq),
            ("Fn", SlangType::Fn),
            ("SpecialForm", SlangType::SpecialForm),
            ("Type", SlangType::Type),
            ("Any", SlangType::Interface(Interface::Any)),
            ("Seqable", SlangType::Interface(Interface::Seqable)),
            ("Invokable", SlangType::Interface(Interface::Invokable)),
            ("Number", SlangType::Interface(Interface::Number)),
        ]
    }

    /// Wrap this type in one level of indirection.
    #[must_use]
    pub fn reference(self) -> SlangType {
        SlangType::Ref(Box::new(self))
    }

    /// Strip one level of indirection, if any.
    pub fn deref(&self) -> &SlangType {
        match self {
            SlangType::Ref(inner) => inner,
            other => other,
        }
    }

    pub fn as_interface(&self) -> Option<Interface> {
        match self {
            SlangType::Interface(i) => Some(*i),
            _ => None,
        }
    }

    /// Whether a value of type `self` can be used where `target` is expected
    /// without any conversion.
    pub fn is_assignable_to(&self, target: &SlangType) -> bool {
        match target {
            SlangType::Interface(i) => i.is_satisfied_by(self),
            other => self == other,
        }
    }
}

impl fmt::Display for SlangType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlangType::Interface(i) => f.write_str(i.name()),
            SlangType::Ref(inner) => write!(f, "&{}", inner),
            concrete => {
                let name = Self::named()
                    .into_iter()
                    .find(|(_, ty)| ty == concrete)
                    .map(|(n, _)| n)
                    .unwrap_or("?");
                f.write_str(name)
            }
        }
    }
}
