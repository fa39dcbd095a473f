//! Checkerboard harness producing move sequences for the detectors.
//!
//! - `Direction`, `Position`, `Arrows`: move alphabet and movement rule
//! - `Board`, `Game`: a token following arrows until it leaves the board
//! - `CallOut`: moves read once from a reader, e.g. stdin

pub mod callout;
pub mod direction;
pub mod grid;

pub use callout::CallOut;
pub use direction::{Arrows, Direction, Position};
pub use grid::{Board, Game, positions};
