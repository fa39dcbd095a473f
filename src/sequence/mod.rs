//! Pull sequences: the producer contract consumed by every detector.
//!
//! - `PullSequence`: one value per `next`, explicit `End`, declared capability
//! - Sources: `Replay`, `OnePass`, `Unfold`
//! - Adapters: `Counted`, `Budgeted`, `Values`

pub mod adapters;
pub mod sources;
pub mod traits;

pub use adapters::{Budgeted, Counted, ReadCounter, ReadTally, Values};
pub use sources::{OnePass, Replay, Unfold};
pub use traits::{Capability, Emission, PullSequence};
