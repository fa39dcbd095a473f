//! Cycle detection over pull sequences.
//!
//! Three interchangeable algorithms answer the same question, "does this
//! sequence ever revisit a state?":
//! - `floyd`: tortoise and hare, O(1) space, needs a replayable source
//! - `teleporting`: single cursor with a doubling window, O(1) space
//! - `set_based`: visited set, O(distinct states) space
//!
//! Floyd and the teleporting tortoise assume that a repeated state is
//! followed by the same continuation, as it is for any sequence produced by
//! a deterministic state machine. The visited set reports the first repeat
//! of any kind.

pub mod algorithm;
pub mod floyd;
pub mod report;
pub mod teleporting;
pub mod verdict;
pub mod visited;

pub use algorithm::Algorithm;
pub use floyd::floyd;
pub use report::{Report, detect_report};
pub use teleporting::{Teleporter, teleporting};
pub use verdict::{CycleVerdict, DetectorState};
pub use visited::{Visited, set_based};

use crate::error::Result;
use crate::identity::{StateKey, ValueEq};
use crate::sequence::{Emission, PullSequence};
use crate::transform::{Transition, transform};
use std::hash::Hash;

/// Pull values into a push-style detector until it reaches a verdict or the
/// source ends. At most one pull is issued after the last `Running` state.
pub(crate) fn drive<S, F>(source: &mut S, mut observe: F) -> Result<()>
where
    S: PullSequence,
    F: FnMut(S::Item) -> DetectorState,
{
    while let Emission::Value(value) = source.next()? {
        if observe(value).is_terminal() {
            break;
        }
    }
    Ok(())
}

/// Run the selected algorithm over `source` using `policy` to compare states
pub fn detect<S, P>(algorithm: Algorithm, source: S, policy: &P) -> Result<CycleVerdict>
where
    S: PullSequence,
    P: StateKey<S::Item> + ?Sized,
{
    match algorithm {
        Algorithm::Floyd => floyd(source, policy),
        Algorithm::Teleporting => teleporting(source, policy),
        Algorithm::SetBased => set_based(source, policy),
    }
}

/// Turn a stream of moves into a stream of states and decide whether it
/// ever revisits one.
///
/// States are compared by value. Floyd is refused with
/// `UnsupportedCapability` when `moves` is single-pass, and a move outside
/// the transition's alphabet surfaces as `MalformedTransition`.
pub fn terminates<D, Tr, S>(
    moves: D,
    transition: Tr,
    initial: S,
    algorithm: Algorithm,
) -> Result<CycleVerdict>
where
    D: PullSequence,
    Tr: Transition<S, D::Item> + Clone,
    Tr::Output: Hash + Eq + Clone,
    S: Clone,
{
    detect(algorithm, transform(initial, transition, moves).branching(), &ValueEq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TortoiseError;
    use crate::sequence::{OnePass, Replay, Unfold};

    #[test]
    fn test_drive_stops_at_verdict() {
        let mut source = OnePass::new(0..);
        let mut seen = Vec::new();
        drive(&mut source, |v| {
            seen.push(v);
            if v == 3 {
                DetectorState::Cycles
            } else {
                DetectorState::Running
            }
        })
        .unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(source.next().unwrap(), Emission::Value(4));
    }

    #[test]
    fn test_detect_dispatch_agrees() {
        for algorithm in Algorithm::ALL {
            let acyclic = Replay::new(vec![5, 4, 3, 2, 1]);
            assert_eq!(
                detect(algorithm, acyclic, &ValueEq).unwrap(),
                CycleVerdict::Terminates,
                "{}",
                algorithm
            );

            let cyclic = Unfold::new(0u8, |n| Some((n + 1) % 4));
            assert_eq!(
                detect(algorithm, cyclic, &ValueEq).unwrap(),
                CycleVerdict::Cycles,
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_repeat_without_deterministic_continuation() {
        // 1 recurs but is followed by different values each time. Only the
        // visited set is guaranteed to see it; the teleporting tortoise
        // anchors on 0 and then 2 and never compares against 1.
        let values = Replay::new(vec![0, 1, 2, 1]);
        let verdicts: Vec<CycleVerdict> = Algorithm::ALL
            .iter()
            .map(|&algorithm| detect(algorithm, values.clone(), &ValueEq).unwrap())
            .collect();
        assert_eq!(
            verdicts,
            vec![CycleVerdict::Cycles, CycleVerdict::Terminates, CycleVerdict::Cycles]
        );
    }

    fn step(acc: &i32, delta: i32) -> Result<(i32, i32)> {
        Ok((acc + delta, acc + delta))
    }

    #[test]
    fn test_terminates_on_moves() {
        // +1 -1 +1 -1 ... oscillates between 1 and 0
        let moves = Unfold::new(1, |d: &i32| Some(-d));
        for algorithm in Algorithm::ALL {
            assert_eq!(
                terminates(moves.clone(), step, 0, algorithm).unwrap(),
                CycleVerdict::Cycles,
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_terminates_on_finite_moves() {
        let moves = Replay::new(vec![1, 1, 1]);
        for algorithm in Algorithm::ALL {
            assert_eq!(
                terminates(moves.clone(), step, 0, algorithm).unwrap(),
                CycleVerdict::Terminates
            );
        }
    }

    #[test]
    fn test_terminates_rejects_floyd_on_single_pass() {
        let err = terminates(OnePass::new(vec![1, -1]), step, 0, Algorithm::Floyd).unwrap_err();
        assert!(matches!(err, TortoiseError::UnsupportedCapability { .. }));
    }
}
