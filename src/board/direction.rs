//! Move alphabet, board coordinates and the movement rule

use crate::error::{Result, TortoiseError};
use crate::transform::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four arrows that can sit on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Down, Direction::Up];

    /// Arrow glyph used in board diagrams
    pub fn glyph(self) -> char {
        match self {
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::Down => '↓',
            Direction::Up => '↑',
        }
    }

    /// Position one square away in this direction; `None` past the edge of
    /// the coordinate range
    pub fn step(self, from: Position) -> Option<Position> {
        let Position { x, y } = from;
        match self {
            Direction::Left => Some(Position::new(x.checked_sub(1)?, y)),
            Direction::Right => Some(Position::new(x.checked_add(1)?, y)),
            Direction::Down => Some(Position::new(x, y.checked_add(1)?)),
            Direction::Up => Some(Position::new(x, y.checked_sub(1)?)),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = TortoiseError;

    /// Accepts the arrow glyphs and the ASCII stand-ins `< > v ^`
    fn try_from(c: char) -> Result<Self> {
        match c {
            '←' | '<' => Ok(Direction::Left),
            '→' | '>' => Ok(Direction::Right),
            '↓' | 'v' => Ok(Direction::Down),
            '↑' | '^' => Ok(Direction::Up),
            other => Err(TortoiseError::MalformedTransition {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Square on the board, compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = TortoiseError;

    /// Parses `x,y`, optionally wrapped in parentheses
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let invalid = || TortoiseError::InvalidPosition(s.to_string());

        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// The arrow movement rule, `(position, arrow) -> next position`.
///
/// Over `Direction` it is total. Over raw `char` tokens, as heard from a
/// call-out stream, anything outside the arrow alphabet is a
/// `MalformedTransition`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arrows;

impl Transition<Position, Direction> for Arrows {
    type Output = Position;

    fn apply(&self, acc: &Position, input: Direction) -> Result<(Position, Position)> {
        let next = input
            .step(*acc)
            .ok_or_else(|| TortoiseError::InvalidPosition(format!("{} {} leaves the coordinate range", acc, input)))?;
        Ok((next, next))
    }
}

impl Transition<Position, char> for Arrows {
    type Output = Position;

    fn apply(&self, acc: &Position, input: char) -> Result<(Position, Position)> {
        let direction = Direction::try_from(input)?;
        Transition::<Position, Direction>::apply(self, acc, direction)
    }
}
