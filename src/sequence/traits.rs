//! Core pull-sequence interfaces

use crate::error::Result;
use std::fmt;

/// One step of a pull sequence: either a value or the end marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emission<T> {
    /// The next value in emission order
    Value(T),
    /// The sequence is exhausted; every later pull returns `End` as well
    End,
}

impl<T> Emission<T> {
    /// Returns true if this is the end marker
    pub fn is_end(&self) -> bool {
        matches!(self, Emission::End)
    }

    /// Convert into an `Option`, dropping the end marker
    pub fn value(self) -> Option<T> {
        match self {
            Emission::Value(v) => Some(v),
            Emission::End => None,
        }
    }

    /// Map the carried value, keeping `End` as is
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Emission<U> {
        match self {
            Emission::Value(v) => Emission::Value(f(v)),
            Emission::End => Emission::End,
        }
    }
}

impl<T> From<Option<T>> for Emission<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Emission::Value(v),
            None => Emission::End,
        }
    }
}

/// What a producer allows its consumers to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Values can be observed once; no second cursor can be opened
    SinglePass,
    /// Independent cursors over the same values can be opened with `branch`
    Replayable,
}

impl Capability {
    /// Returns true if a producer with this capability can serve a consumer
    /// that needs `required`
    pub fn satisfies(self, required: Capability) -> bool {
        match required {
            Capability::SinglePass => true,
            Capability::Replayable => self == Capability::Replayable,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::SinglePass => write!(f, "single-pass"),
            Capability::Replayable => write!(f, "replayable"),
        }
    }
}

/// A producer of values pulled one at a time, with an explicit end signal.
///
/// Consumers never hold more than one outstanding `next` call, so an
/// implementation may block on I/O inside `next` without the consumer
/// needing to know. Once `End` has been returned, further calls keep
/// returning `End`.
pub trait PullSequence {
    /// Type of the emitted values
    type Item;

    /// Pull the next value, or `End` once the sequence is exhausted
    fn next(&mut self) -> Result<Emission<Self::Item>>;

    /// Declared capability of this producer
    fn capability(&self) -> Capability {
        Capability::SinglePass
    }

    /// Open an independent cursor positioned at the current read point.
    ///
    /// Replayable producers return `Some`; the new cursor observes the same
    /// remaining values as `self` without affecting it.
    fn branch(&self) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

impl<S: PullSequence> PullSequence for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Emission<Self::Item>> {
        (**self).next()
    }

    fn capability(&self) -> Capability {
        (**self).capability()
    }

    fn branch(&self) -> Option<Self> {
        (**self).branch().map(Box::new)
    }
}

/// A trait object cannot open a second cursor, whatever the boxed producer
/// could do, so it is always single-pass.
impl<'a, T> PullSequence for Box<dyn PullSequence<Item = T> + 'a> {
    type Item = T;

    fn next(&mut self) -> Result<Emission<T>> {
        (**self).next()
    }
}
