// slang-value - Value model for the Slang language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # slang-value
//!
//! The dynamic value model shared by Slang host evaluators and the
//! `slang-core` built-ins: values, interned symbols, the sequence
//! capability and runtime type descriptors.

pub mod seq;
pub mod symbol;
pub mod types;
pub mod value;

pub use im::Vector;
pub use num_bigint::BigInt;
pub use seq::{Seq, SeqIter, SlangSeq, Unfold, UnfoldStep, VectorSeq};
pub use symbol::Symbol;
pub use types::{Interface, SlangType};
pub use value::{
    DEFAULT_SEQ_PRINT_LENGTH, SlangNativeFn, SlangVal, get_print_length, set_print_length,
};
