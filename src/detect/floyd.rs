//! Floyd's tortoise and hare.
//!
//! The hare is a second cursor branched from the source before anything is
//! read, advancing two values for each tortoise value. That makes the
//! algorithm valid only for replayable sources: over a call-out stream that
//! can be heard once there is no second cursor to open, and the request is
//! refused with `UnsupportedCapability` rather than silently reading the
//! stream twice.

use crate::detect::{Algorithm, CycleVerdict};
use crate::error::{Result, TortoiseError};
use crate::identity::SameState;
use crate::sequence::{Emission, PullSequence};
use log::debug;

pub fn floyd<S, P>(mut tortoise: S, same: &P) -> Result<CycleVerdict>
where
    S: PullSequence,
    P: SameState<S::Item> + ?Sized,
{
    Algorithm::Floyd.check(tortoise.capability())?;
    let mut hare = tortoise.branch().ok_or_else(|| TortoiseError::UnsupportedCapability {
        algorithm: Algorithm::Floyd.to_string(),
        capability: Algorithm::Floyd.requires().to_string(),
    })?;

    let mut steps = 0usize;
    loop {
        let Emission::Value(slow) = tortoise.next()? else {
            break;
        };
        let Emission::Value(_) = hare.next()? else {
            break;
        };
        let Emission::Value(fast) = hare.next()? else {
            break;
        };
        steps += 1;

        if same.same_state(&slow, &fast) {
            debug!("floyd: tortoise met hare after {} steps", steps);
            return Ok(CycleVerdict::Cycles);
        }
    }

    debug!("floyd: sequence ended after {} steps", steps);
    Ok(CycleVerdict::Terminates)
}
