//! Ready-made producers: a shared replayable buffer, a single-pass wrapper
//! over any iterator, and a successor-function unfold.

use crate::error::Result;
use crate::sequence::traits::{Capability, Emission, PullSequence};
use std::iter::Fuse;
use std::rc::Rc;

/// Replayable sequence over a shared, immutable buffer
#[derive(Debug)]
pub struct Replay<T> {
    items: Rc<[T]>,
    cursor: usize,
}

impl<T> Replay<T> {
    /// Create a sequence that emits `items` in order
    pub fn new(items: impl Into<Rc<[T]>>) -> Self {
        Self {
            items: items.into(),
            cursor: 0,
        }
    }

    /// Number of values already pulled through this cursor
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of values in the buffer
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the buffer holds no values
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Manual impl: cloning shares the buffer, so `T: Clone` is only needed on pull.
impl<T> Clone for Replay<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            cursor: self.cursor,
        }
    }
}

impl<T: Clone> PullSequence for Replay<T> {
    type Item = T;

    fn next(&mut self) -> Result<Emission<T>> {
        match self.items.get(self.cursor) {
            Some(item) => {
                self.cursor += 1;
                Ok(Emission::Value(item.clone()))
            }
            None => Ok(Emission::End),
        }
    }

    fn capability(&self) -> Capability {
        Capability::Replayable
    }

    fn branch(&self) -> Option<Self> {
        Some(self.clone())
    }
}

impl<T> From<Vec<T>> for Replay<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Single-pass sequence draining an iterator
#[derive(Debug)]
pub struct OnePass<I: Iterator> {
    iter: Fuse<I>,
}

impl<I: Iterator> OnePass<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> PullSequence for OnePass<I> {
    type Item = I::Item;

    fn next(&mut self) -> Result<Emission<I::Item>> {
        Ok(self.iter.next().into())
    }
}

/// Sequence of successive states: `seed`, `step(seed)`, `step(step(seed))`, ...
/// ending the first time `step` returns `None`.
///
/// Replayable, since a cursor is fully described by its current state.
#[derive(Debug, Clone)]
pub struct Unfold<S, F> {
    state: Option<S>,
    step: F,
}

impl<S, F> Unfold<S, F> {
    pub fn new(seed: S, step: F) -> Self
    where
        F: Fn(&S) -> Option<S>,
    {
        Self {
            state: Some(seed),
            step,
        }
    }
}

impl<S, F> PullSequence for Unfold<S, F>
where
    S: Clone,
    F: Fn(&S) -> Option<S> + Clone,
{
    type Item = S;

    fn next(&mut self) -> Result<Emission<S>> {
        let Some(current) = self.state.take() else {
            return Ok(Emission::End);
        };
        self.state = (self.step)(&current);
        Ok(Emission::Value(current))
    }

    fn capability(&self) -> Capability {
        Capability::Replayable
    }

    fn branch(&self) -> Option<Self> {
        Some(self.clone())
    }
}
