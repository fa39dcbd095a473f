//! Teleporting tortoise: single-cursor detection with a doubling window.
//!
//! One value is taken as the anchor, then up to `distance` following values
//! are compared against it. If none match, the window doubles and the next
//! unread value becomes the new anchor. Only one cursor is ever used, so
//! this works on a stream that can be observed once.
//!
//! Once the anchor sits inside the cycle and the window is at least the
//! cycle length, the next round finds the match; the number of values read
//! is bounded by a small multiple of tail length plus cycle length.

use crate::detect::{CycleVerdict, DetectorState, drive};
use crate::error::Result;
use crate::identity::SameState;
use crate::sequence::PullSequence;
use log::{debug, trace};

/// Push-driven teleporting tortoise. Feed it values with `observe` and call
/// `finish` when the producer ends.
#[derive(Debug)]
pub struct Teleporter<'p, T, P: ?Sized> {
    policy: &'p P,
    anchor: Option<T>,
    distance: usize,
    since_anchor: usize,
    observed: usize,
    cycle_length: Option<usize>,
    state: DetectorState,
}

impl<'p, T, P> Teleporter<'p, T, P>
where
    P: SameState<T> + ?Sized,
{
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            anchor: None,
            distance: 1,
            since_anchor: 0,
            observed: 0,
            cycle_length: None,
            state: DetectorState::Running,
        }
    }

    /// Offer the next value. Ignored once a verdict has been reached.
    pub fn observe(&mut self, value: T) -> DetectorState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.observed += 1;

        let Some(anchor) = &self.anchor else {
            self.anchor = Some(value);
            return self.state;
        };

        self.since_anchor += 1;
        if self.policy.same_state(anchor, &value) {
            debug!(
                "teleporting: repeat {} values after anchor, {} values read",
                self.since_anchor, self.observed
            );
            self.cycle_length = Some(self.since_anchor);
            self.state = DetectorState::Cycles;
            return self.state;
        }

        if self.since_anchor == self.distance {
            self.distance *= 2;
            self.since_anchor = 0;
            self.anchor = None;
            trace!("teleporting: window grows to {}", self.distance);
        }
        self.state
    }

    /// Record the end of the sequence
    pub fn finish(&mut self) -> CycleVerdict {
        if !self.state.is_terminal() {
            debug!("teleporting: sequence ended after {} values", self.observed);
            self.state = DetectorState::Terminates;
        }
        self.state.verdict().unwrap_or(CycleVerdict::Terminates)
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Current lookahead window
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Values accepted so far
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Gap between the anchor and its repeat. For a sequence produced by a
    /// deterministic state machine this is the cycle length.
    pub fn cycle_length(&self) -> Option<usize> {
        self.cycle_length
    }
}

pub fn teleporting<S, P>(mut source: S, same: &P) -> Result<CycleVerdict>
where
    S: PullSequence,
    P: SameState<S::Item> + ?Sized,
{
    let mut tortoise = Teleporter::new(same);
    drive(&mut source, |value| tortoise.observe(value))?;
    Ok(tortoise.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ValueEq;
    use crate::sequence::{Counted, OnePass, Unfold};

    #[test]
    fn test_window_doubles() {
        let mut tortoise = Teleporter::new(&ValueEq);
        assert_eq!(tortoise.distance(), 1);

        tortoise.observe(0); // anchor
        tortoise.observe(1); // window of 1 exhausted
        assert_eq!(tortoise.distance(), 2);

        tortoise.observe(2); // anchor
        tortoise.observe(3);
        tortoise.observe(4);
        assert_eq!(tortoise.distance(), 4);
        assert_eq!(tortoise.state(), DetectorState::Running);
    }

    #[test]
    fn test_finish_without_repeat() {
        let mut tortoise = Teleporter::new(&ValueEq);
        for v in 0..10 {
            tortoise.observe(v);
        }
        assert_eq!(tortoise.finish(), CycleVerdict::Terminates);
        assert_eq!(tortoise.state(), DetectorState::Terminates);
    }

    #[test]
    fn test_observe_after_verdict_is_ignored() {
        let mut tortoise = Teleporter::new(&ValueEq);
        tortoise.observe('a');
        assert_eq!(tortoise.observe('a'), DetectorState::Cycles);
        assert_eq!(tortoise.observe('b'), DetectorState::Cycles);
        assert_eq!(tortoise.observed(), 2);
        assert_eq!(tortoise.finish(), CycleVerdict::Cycles);
    }

    #[test]
    fn test_reports_cycle_length() {
        // tail 0 1 2, then 3 4 5 6 7 forever
        let seq = Unfold::new(0u32, |n| Some(if *n == 7 { 3 } else { n + 1 }));
        let mut tortoise = Teleporter::new(&ValueEq);
        drive(&mut Counted::new(seq), |v| tortoise.observe(v)).unwrap();
        assert_eq!(tortoise.state(), DetectorState::Cycles);
        assert_eq!(tortoise.cycle_length(), Some(5));
    }

    #[test]
    fn test_single_pass_source() {
        let verdict = teleporting(OnePass::new(vec![3, 1, 4, 1, 5]), &ValueEq).unwrap();
        // 1 repeats, but never while it is the anchor
        assert_eq!(verdict, CycleVerdict::Terminates);

        let looping = OnePass::new([1, 2, 3].into_iter().cycle());
        assert_eq!(teleporting(looping, &ValueEq).unwrap(), CycleVerdict::Cycles);
    }

    #[test]
    fn test_reads_exactly_the_sequence_when_acyclic() {
        let source = Counted::new(OnePass::new(0..37));
        let counter = source.counter();
        assert_eq!(teleporting(source, &ValueEq).unwrap(), CycleVerdict::Terminates);
        assert_eq!(counter.values(), 37);
        assert_eq!(counter.tally().ends, 1);
    }
}
