//! Wrappers that observe or limit pulls without changing the values.
//!
//! Counters and budgets are shared between a wrapper and every cursor
//! branched from it, so reads by both Floyd cursors land in one tally.

use crate::error::{Result, TortoiseError};
use crate::sequence::traits::{Capability, Emission, PullSequence};
use std::cell::Cell;
use std::rc::Rc;

/// Running totals of pulls made through a `Counted` sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadTally {
    /// Values handed out
    pub values: usize,
    /// End markers handed out
    pub ends: usize,
}

/// Shared handle onto a tally; stays valid after the sequence is consumed
#[derive(Debug, Clone, Default)]
pub struct ReadCounter(Rc<Cell<ReadTally>>);

impl ReadCounter {
    pub fn tally(&self) -> ReadTally {
        self.0.get()
    }

    pub fn values(&self) -> usize {
        self.0.get().values
    }

    fn record(&self, emission_is_end: bool) {
        let mut tally = self.0.get();
        if emission_is_end {
            tally.ends += 1;
        } else {
            tally.values += 1;
        }
        self.0.set(tally);
    }
}

/// Sequence wrapper that counts every successful pull
#[derive(Debug)]
pub struct Counted<S> {
    inner: S,
    counter: ReadCounter,
}

impl<S> Counted<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counter: ReadCounter::default(),
        }
    }

    /// Handle for reading the tally once the sequence has been moved away
    pub fn counter(&self) -> ReadCounter {
        self.counter.clone()
    }
}

impl<S: PullSequence> PullSequence for Counted<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Emission<S::Item>> {
        let emission = self.inner.next()?;
        self.counter.record(emission.is_end());
        Ok(emission)
    }

    fn capability(&self) -> Capability {
        self.inner.capability()
    }

    fn branch(&self) -> Option<Self> {
        self.inner.branch().map(|inner| Self {
            inner,
            counter: self.counter.clone(),
        })
    }
}

/// Sequence wrapper that fails with `Undetermined` once more than `budget`
/// values have been pulled across all of its cursors.
///
/// The value that exceeds the budget is pulled from the producer and
/// discarded; reaching `End` within the budget is never an error.
#[derive(Debug)]
pub struct Budgeted<S> {
    inner: S,
    budget: usize,
    used: Rc<Cell<usize>>,
}

impl<S> Budgeted<S> {
    pub fn new(inner: S, budget: usize) -> Self {
        Self {
            inner,
            budget,
            used: Rc::new(Cell::new(0)),
        }
    }

    /// Values pulled so far across all cursors
    pub fn used(&self) -> usize {
        self.used.get()
    }
}

impl<S: PullSequence> PullSequence for Budgeted<S> {
    type Item = S::Item;

    fn next(&mut self) -> Result<Emission<S::Item>> {
        match self.inner.next()? {
            Emission::End => Ok(Emission::End),
            Emission::Value(value) => {
                if self.used.get() >= self.budget {
                    return Err(TortoiseError::Undetermined {
                        budget: self.budget,
                    });
                }
                self.used.set(self.used.get() + 1);
                Ok(Emission::Value(value))
            }
        }
    }

    fn capability(&self) -> Capability {
        self.inner.capability()
    }

    fn branch(&self) -> Option<Self> {
        self.inner.branch().map(|inner| Self {
            inner,
            budget: self.budget,
            used: Rc::clone(&self.used),
        })
    }
}

/// Iterator view of a pull sequence.
///
/// Yields `Ok` values until the end marker, or a single `Err` if the
/// producer fails; nothing is pulled after either.
#[derive(Debug)]
pub struct Values<S> {
    inner: S,
    done: bool,
}

impl<S> Values<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, done: false }
    }
}

impl<S: PullSequence> Iterator for Values<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Ok(Emission::Value(v)) => Some(Ok(v)),
            Ok(Emission::End) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{OnePass, Replay};

    #[test]
    fn test_counted_tallies_values_and_ends() {
        let mut seq = Counted::new(OnePass::new(vec![1, 2]));
        let counter = seq.counter();

        while !seq.next().unwrap().is_end() {}

        assert_eq!(counter.tally(), ReadTally { values: 2, ends: 1 });
        assert_eq!(counter.values(), 2);
    }

    #[test]
    fn test_counted_branches_share_tally() {
        let mut seq = Counted::new(Replay::new(vec![1, 2, 3]));
        let mut branch = seq.branch().unwrap();

        seq.next().unwrap();
        branch.next().unwrap();
        branch.next().unwrap();

        assert_eq!(seq.counter().values(), 3);
    }

    #[test]
    fn test_counted_keeps_capability() {
        assert_eq!(
            Counted::new(OnePass::new(vec![1])).capability(),
            Capability::SinglePass
        );
        assert!(Counted::new(OnePass::new(vec![1])).branch().is_none());
        assert_eq!(
            Counted::new(Replay::new(vec![1])).capability(),
            Capability::Replayable
        );
    }

    #[test]
    fn test_budgeted_allows_end_within_budget() {
        let mut seq = Budgeted::new(OnePass::new(vec!['a', 'b']), 2);
        assert_eq!(seq.next().unwrap(), Emission::Value('a'));
        assert_eq!(seq.next().unwrap(), Emission::Value('b'));
        assert!(seq.next().unwrap().is_end());
        assert_eq!(seq.used(), 2);
    }

    #[test]
    fn test_budgeted_fails_past_budget() {
        let mut seq = Budgeted::new(OnePass::new(0..), 3);
        for _ in 0..3 {
            seq.next().unwrap();
        }
        let err = seq.next().unwrap_err();
        assert!(matches!(err, TortoiseError::Undetermined { budget: 3 }));
    }

    #[test]
    fn test_budgeted_branches_share_budget() {
        let mut seq = Budgeted::new(Replay::new(vec![1, 2, 3, 4]), 3);
        let mut branch = seq.branch().unwrap();

        seq.next().unwrap();
        seq.next().unwrap();
        branch.next().unwrap();

        assert!(branch.next().is_err());
    }

    #[test]
    fn test_values_iterator() {
        let collected: Result<Vec<u8>> = Values::new(Replay::new(vec![4, 5, 6])).collect();
        assert_eq!(collected.unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_values_stops_after_error() {
        let mut values = Values::new(Budgeted::new(OnePass::new(0..), 1));
        assert_eq!(values.next().unwrap().unwrap(), 0);
        assert!(values.next().unwrap().is_err());
        assert!(values.next().is_none());
    }
}
