//! Caller-imposed bound on detection work.
//!
//! The algorithms themselves only ever answer `Terminates` or `Cycles`. A
//! caller that cannot afford an unbounded run wraps the source in a step
//! budget; running out surfaces as `TortoiseError::Undetermined`, which is
//! neither verdict.

use crate::detect::{Algorithm, CycleVerdict, Report, detect, detect_report};
use crate::error::Result;
use crate::identity::StateKey;
use crate::sequence::{Budgeted, PullSequence};
use log::debug;

/// Maximum number of values a detection run may pull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBudget {
    limit: usize,
}

impl StepBudget {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Run `algorithm` with this budget; `Undetermined` if it runs out
    pub fn detect<S, P>(&self, algorithm: Algorithm, source: S, policy: &P) -> Result<CycleVerdict>
    where
        S: PullSequence,
        P: StateKey<S::Item> + ?Sized,
    {
        debug!("{} with a budget of {} reads", algorithm, self.limit);
        detect(algorithm, Budgeted::new(source, self.limit), policy)
    }

    /// Like `detect`, returning the full report
    pub fn report<S, P>(&self, algorithm: Algorithm, source: S, policy: &P) -> Result<Report>
    where
        S: PullSequence,
        P: StateKey<S::Item> + ?Sized,
    {
        debug!("{} with a budget of {} reads", algorithm, self.limit);
        detect_report(algorithm, Budgeted::new(source, self.limit), policy)
    }
}

/// Report with an optional budget; `None` runs unbounded
pub fn detect_within<S, P>(
    budget: Option<StepBudget>,
    algorithm: Algorithm,
    source: S,
    policy: &P,
) -> Result<Report>
where
    S: PullSequence,
    P: StateKey<S::Item> + ?Sized,
{
    match budget {
        Some(budget) => budget.report(algorithm, source, policy),
        None => detect_report(algorithm, source, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TortoiseError;
    use crate::identity::ValueEq;
    use crate::sequence::{OnePass, Replay};

    #[test]
    fn test_budget_exhausted_is_undetermined() {
        for algorithm in [Algorithm::Teleporting, Algorithm::SetBased] {
            let endless = OnePass::new(0u64..);
            let err = StepBudget::new(100).detect(algorithm, endless, &ValueEq).unwrap_err();
            assert!(matches!(err, TortoiseError::Undetermined { budget: 100 }));
        }
    }

    #[test]
    fn test_budget_covers_both_floyd_cursors() {
        // 10 distinct values: the hare reads all ten, the tortoise six
        let source = Replay::new((0..10).collect::<Vec<_>>());
        let err = StepBudget::new(12).detect(Algorithm::Floyd, source.clone(), &ValueEq).unwrap_err();
        assert!(matches!(err, TortoiseError::Undetermined { budget: 12 }));

        let verdict = StepBudget::new(16).detect(Algorithm::Floyd, source, &ValueEq).unwrap();
        assert_eq!(verdict, CycleVerdict::Terminates);
    }

    #[test]
    fn test_verdict_within_budget_is_kept() {
        let seq = OnePass::new([1, 2].into_iter().cycle());
        let verdict = StepBudget::new(10).detect(Algorithm::SetBased, seq, &ValueEq).unwrap();
        assert_eq!(verdict, CycleVerdict::Cycles);
    }

    #[test]
    fn test_sequence_exactly_at_budget_terminates() {
        let seq = OnePass::new(vec![1, 2, 3]);
        let verdict = StepBudget::new(3).detect(Algorithm::Teleporting, seq, &ValueEq).unwrap();
        assert_eq!(verdict, CycleVerdict::Terminates);
    }

    #[test]
    fn test_detect_within_without_budget() {
        let report = detect_within(None, Algorithm::SetBased, OnePass::new(vec![1, 1]), &ValueEq).unwrap();
        assert_eq!(report.verdict, CycleVerdict::Cycles);
        assert_eq!(report.reads, 2);
    }

    #[test]
    fn test_detect_within_with_budget() {
        let err = detect_within(
            Some(StepBudget::new(5)),
            Algorithm::Teleporting,
            OnePass::new(0..),
            &ValueEq,
        )
        .unwrap_err();
        assert!(matches!(err, TortoiseError::Undetermined { budget: 5 }));
    }
}
