//! Set-based detection: remember every state, stop at the first repeat.
//!
//! Space grows with the number of distinct states seen, so for a finite
//! state space of size k the set never holds more than k keys.

use crate::detect::{CycleVerdict, DetectorState, drive};
use crate::error::Result;
use crate::identity::StateKey;
use crate::sequence::PullSequence;
use log::debug;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Push-driven visited-set detector
pub struct Visited<'p, T, P: StateKey<T> + ?Sized> {
    policy: &'p P,
    seen: HashSet<P::Key>,
    state: DetectorState,
    _values: PhantomData<fn(T)>,
}

impl<'p, T, P> Visited<'p, T, P>
where
    P: StateKey<T> + ?Sized,
{
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            seen: HashSet::new(),
            state: DetectorState::Running,
            _values: PhantomData,
        }
    }

    /// Offer the next value. Ignored once a verdict has been reached.
    pub fn observe(&mut self, value: T) -> DetectorState {
        if self.state.is_terminal() {
            return self.state;
        }
        if !self.seen.insert(self.policy.key(&value)) {
            debug!("set-based: repeat after {} distinct states", self.seen.len());
            self.state = DetectorState::Cycles;
        }
        self.state
    }

    /// Record the end of the sequence
    pub fn finish(&mut self) -> CycleVerdict {
        if !self.state.is_terminal() {
            debug!("set-based: sequence ended after {} distinct states", self.seen.len());
            self.state = DetectorState::Terminates;
        }
        self.state.verdict().unwrap_or(CycleVerdict::Terminates)
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Number of distinct states remembered
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub fn set_based<S, P>(mut source: S, same: &P) -> Result<CycleVerdict>
where
    S: PullSequence,
    P: StateKey<S::Item> + ?Sized,
{
    let mut visited = Visited::new(same);
    drive(&mut source, |value| visited.observe(value))?;
    Ok(visited.finish())
}
