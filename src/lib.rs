//! Tortoise - cycle detection over lazily pulled sequences
//!
//! Producers expose a pull interface with an explicit end marker. A stateful
//! transformer turns a stream of moves into a stream of states, and one of
//! three detectors decides whether that stream ends or revisits a state.
//! A checkerboard harness supplies move streams for the classic
//! "does the token ever leave the board" puzzle.

pub mod board;
pub mod detect;
pub mod error;
pub mod identity;
pub mod policy;
pub mod sequence;
pub mod transform;

pub use detect::{Algorithm, CycleVerdict, detect, terminates};
pub use error::{Result, TortoiseError};
