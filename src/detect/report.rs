//! Detection runs with bookkeeping: how much was read, how much was kept.

use crate::detect::{Algorithm, CycleVerdict, Teleporter, Visited, drive, floyd};
use crate::error::Result;
use crate::identity::StateKey;
use crate::sequence::{Counted, PullSequence};
use serde::Serialize;

/// Outcome of one detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub verdict: CycleVerdict,
    /// Values pulled from the source, across all cursors
    pub reads: usize,
    /// Distinct states held by the visited set; 0 for the constant-space
    /// algorithms
    pub peak_visited: usize,
    /// Anchor-to-repeat gap found by the teleporting tortoise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<usize>,
}

/// Run `algorithm` over `source` and report what it cost
pub fn detect_report<S, P>(algorithm: Algorithm, source: S, policy: &P) -> Result<Report>
where
    S: PullSequence,
    P: StateKey<S::Item> + ?Sized,
{
    let mut source = Counted::new(source);
    let counter = source.counter();

    let (verdict, peak_visited, cycle_length) = match algorithm {
        Algorithm::Floyd => (floyd(source, policy)?, 0, None),
        Algorithm::Teleporting => {
            let mut tortoise = Teleporter::new(policy);
            drive(&mut source, |value| tortoise.observe(value))?;
            let verdict = tortoise.finish();
            (verdict, 0, tortoise.cycle_length())
        }
        Algorithm::SetBased => {
            let mut visited = Visited::new(policy);
            drive(&mut source, |value| visited.observe(value))?;
            (visited.finish(), visited.len(), None)
        }
    };

    Ok(Report {
        algorithm,
        verdict,
        reads: counter.values(),
        peak_visited,
        cycle_length,
    })
}
