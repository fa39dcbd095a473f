//! Lazy, accumulator-threading mapping from one pull sequence to another.
//!
//! `transform(seed, transition, source)` emits one output per input. An
//! input is pulled from `source` only when the matching output is pulled,
//! so a detector that stops early leaves the rest of the source untouched.
//!
//! The output only opens second cursors after `branching()`, which needs a
//! `Clone` transition and accumulator. Without it the output is single-pass
//! whatever the source offers.

use crate::error::Result;
use crate::sequence::{Capability, Emission, PullSequence};

/// Pure step function `(accumulator, input) -> (new accumulator, output)`.
///
/// Implementations must be total over their declared input alphabet and
/// return `MalformedTransition` for anything outside it.
pub trait Transition<S, T> {
    type Output;

    fn apply(&self, acc: &S, input: T) -> Result<(S, Self::Output)>;
}

impl<S, T, U, F> Transition<S, T> for F
where
    F: Fn(&S, T) -> Result<(S, U)>,
{
    type Output = U;

    fn apply(&self, acc: &S, input: T) -> Result<(S, U)> {
        self(acc, input)
    }
}

type Fork<Tr, S> = fn(&Tr, &S) -> (Tr, S);

fn clone_parts<Tr: Clone, S: Clone>(transition: &Tr, acc: &S) -> (Tr, S) {
    (transition.clone(), acc.clone())
}

/// Output sequence of `transform`
#[derive(Debug, Clone)]
pub struct Transformed<Src, Tr, S> {
    source: Src,
    transition: Tr,
    acc: S,
    fork: Option<Fork<Tr, S>>,
}

impl<Src, Tr, S> Transformed<Src, Tr, S> {
    /// Current accumulator, i.e. the state after the last emitted output
    pub fn accumulator(&self) -> &S {
        &self.acc
    }
}

impl<Src, Tr: Clone, S: Clone> Transformed<Src, Tr, S> {
    /// Let `branch` open independent cursors when the source can. Each
    /// branch carries its own copy of the transition and accumulator.
    pub fn branching(mut self) -> Self {
        let fork: Fork<Tr, S> = clone_parts::<Tr, S>;
        self.fork = Some(fork);
        self
    }
}

/// Lazily map `source` through `transition`, threading `seed` as the
/// accumulator
pub fn transform<Src, Tr, S>(seed: S, transition: Tr, source: Src) -> Transformed<Src, Tr, S>
where
    Src: PullSequence,
    Tr: Transition<S, Src::Item>,
{
    Transformed {
        source,
        transition,
        acc: seed,
        fork: None,
    }
}

impl<Src, Tr, S> PullSequence for Transformed<Src, Tr, S>
where
    Src: PullSequence,
    Tr: Transition<S, Src::Item>,
{
    type Item = Tr::Output;

    fn next(&mut self) -> Result<Emission<Tr::Output>> {
        let input = match self.source.next()? {
            Emission::Value(input) => input,
            Emission::End => return Ok(Emission::End),
        };
        let (acc, output) = self.transition.apply(&self.acc, input)?;
        self.acc = acc;
        Ok(Emission::Value(output))
    }

    fn capability(&self) -> Capability {
        match self.fork {
            Some(_) => self.source.capability(),
            None => Capability::SinglePass,
        }
    }

    fn branch(&self) -> Option<Self> {
        let fork = self.fork?;
        let source = self.source.branch()?;
        let (transition, acc) = fork(&self.transition, &self.acc);
        Some(Self {
            source,
            transition,
            acc,
            fork: Some(fork),
        })
    }
}
