// slang-core - Sequence realization
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pulling a sequence to completion.

use std::rc::Rc;

use slang_value::{Seq, SlangVal};

use crate::error::{Error, Result};

/// Realize `seq` into an ordered, owned collection.
///
/// Walks `first`/`next` until `first` signals emptiness or no rest remains.
/// A nil element is kept; only the emptiness signal stops the walk. Never
/// call this on an infinite sequence.
pub fn realize(seq: Rc<dyn Seq>) -> Vec<SlangVal> {
    let mut items = Vec::new();
    let mut current = Some(seq);
    while let Some(seq) = current {
        let Some(first) = seq.first() else {
            break;
        };
        items.push(first);
        current = seq.next();
    }
    items
}

/// Realize a value that must satisfy the sequence capability.
pub fn realize_value(context: &'static str, val: &SlangVal) -> Result<Vec<SlangVal>> {
    match val.as_seq() {
        Some(seq) => Ok(realize(seq)),
        None => Err(Error::type_error_in(context, "seqable", val.type_name())),
    }
}
