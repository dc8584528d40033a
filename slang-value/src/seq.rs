// slang-value - Sequence capability
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The pull-based sequence protocol.
//!
//! A sequence is anything that can hand out its first element and the rest
//! of itself. Lists and vectors are walked through [`VectorSeq`]; hosts plug
//! in lazy or generated sequences by implementing [`Seq`] and wrapping the
//! result in [`SlangVal::Seq`](crate::SlangVal::Seq).

use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::value::SlangVal;

/// First/rest access to a possibly lazy sequence.
///
/// `first` returning `None` is the emptiness signal. It is distinct from
/// `Some(SlangVal::Nil)`, which is a sequence whose first element is nil.
pub trait Seq {
    /// The first element, or `None` when the sequence is exhausted.
    fn first(&self) -> Option<SlangVal>;

    /// Everything after the first element, or `None` when nothing follows.
    fn next(&self) -> Option<Rc<dyn Seq>>;
}

/// Cursor over the elements of a list or vector.
#[derive(Clone)]
pub struct VectorSeq {
    items: Vector<SlangVal>,
}

impl VectorSeq {
    pub fn new(items: Vector<SlangVal>) -> Self {
        VectorSeq { items }
    }
}

impl Seq for VectorSeq {
    fn first(&self) -> Option<SlangVal> {
        self.items.front().cloned()
    }

    fn next(&self) -> Option<Rc<dyn Seq>> {
        if self.items.len() <= 1 {
            return None;
        }
        Some(Rc::new(VectorSeq {
            items: self.items.skip(1),
        }))
    }
}

/// Step function for [`Unfold`]: produce the element after `current`.
pub type UnfoldStep = dyn Fn(&SlangVal) -> Option<SlangVal>;

/// A lazy sequence generated from a seed and a step function.
///
/// Elements are computed only as the sequence is walked, so an unfold whose
/// step never returns `None` is infinite. Realizing one never terminates.
#[derive(Clone)]
pub struct Unfold {
    current: SlangVal,
    step: Rc<UnfoldStep>,
}

impl Unfold {
    pub fn new(seed: SlangVal, step: impl Fn(&SlangVal) -> Option<SlangVal> + 'static) -> Self {
        Unfold {
            current: seed,
            step: Rc::new(step),
        }
    }
}

impl Seq for Unfold {
    fn first(&self) -> Option<SlangVal> {
        Some(self.current.clone())
    }

    fn next(&self) -> Option<Rc<dyn Seq>> {
        let following = (self.step)(&self.current)?;
        Some(Rc::new(Unfold {
            current: following,
            step: Rc::clone(&self.step),
        }))
    }
}

/// A host-supplied sequence carried inside a [`SlangVal`].
#[derive(Clone)]
pub struct SlangSeq {
    inner: Rc<dyn Seq>,
}

impl SlangSeq {
    pub fn new(seq: impl Seq + 'static) -> Self {
        SlangSeq {
            inner: Rc::new(seq),
        }
    }

    pub fn from_rc(inner: Rc<dyn Seq>) -> Self {
        SlangSeq { inner }
    }

    pub fn as_seq(&self) -> Rc<dyn Seq> {
        Rc::clone(&self.inner)
    }
}

impl fmt::Debug for SlangSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<seq>")
    }
}

impl PartialEq for SlangSeq {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Iterator that pulls elements through the [`Seq`] protocol.
pub struct SeqIter {
    current: Option<Rc<dyn Seq>>,
}

impl SeqIter {
    pub fn new(seq: Rc<dyn Seq>) -> Self {
        SeqIter { current: Some(seq) }
    }
}

impl Iterator for SeqIter {
    type Item = SlangVal;

    fn next(&mut self) -> Option<SlangVal> {
        let seq = self.current.take()?;
        let first = seq.first()?;
        self.current = seq.next();
        Some(first)
    }
}
