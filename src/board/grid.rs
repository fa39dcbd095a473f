//! Square arrow boards and the game that walks them

use crate::board::direction::{Arrows, Direction, Position};
use crate::error::{Result, TortoiseError};
use crate::sequence::{Capability, Emission, PullSequence};
use crate::transform::{Transformed, transform};
use std::fmt;
use std::fs;
use std::path::Path;

/// Square board with one arrow per square.
///
/// Squares are addressed `(x, y)` with `0 <= x, y < size`. In a diagram the
/// first line holds `x = size - 1` and the last line `x = 0`; characters
/// along a line run `y = 0, 1, ...`. Whitespace between glyphs is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    // cells[x][y]
    cells: Vec<Vec<Direction>>,
}

impl Board {
    /// Parse a diagram, one line per row of squares
    pub fn parse(diagram: &str) -> Result<Self> {
        let lines: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&lines)
    }

    /// Build from diagram lines, first line first
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(TortoiseError::InvalidBoard("board has no rows".to_string()));
        }

        let mut cells = vec![Vec::new(); size];
        for (line_no, row) in rows.iter().enumerate() {
            let row: Vec<Direction> = row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Direction::try_from(c).map_err(|_| {
                        TortoiseError::InvalidBoard(format!("unknown glyph {:?} on line {}", c, line_no + 1))
                    })
                })
                .collect::<Result<_>>()?;
            if row.len() != size {
                return Err(TortoiseError::InvalidBoard(format!(
                    "line {} has {} squares, expected {}",
                    line_no + 1,
                    row.len(),
                    size
                )));
            }
            cells[size - 1 - line_no] = row;
        }

        Ok(Self { size, cells })
    }

    /// Read and parse a diagram file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let diagram = fs::read_to_string(&path)?;
        let board = Self::parse(&diagram)?;
        log::debug!("Loaded {}x{} board from {}", board.size, board.size, path.as_ref().display());
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct squares a token can occupy
    pub fn state_space(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, at: Position) -> bool {
        let n = self.size as i64;
        (0..n).contains(&at.x) && (0..n).contains(&at.y)
    }

    /// Arrow on the square, `None` off the board
    pub fn get(&self, at: Position) -> Option<Direction> {
        if !self.contains(at) {
            return None;
        }
        Some(self.cells[at.x as usize][at.y as usize])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for squares in self.cells.iter().rev() {
            let line: String = squares.iter().map(|d| d.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A token walking a board: emits the arrow under it, follows it, and ends
/// once it has stepped off the board.
///
/// Replayable, since a cursor is just a board reference and a position.
#[derive(Debug, Clone, Copy)]
pub struct Game<'b> {
    board: &'b Board,
    start: Position,
    at: Option<Position>,
}

impl<'b> Game<'b> {
    pub fn new(board: &'b Board, start: Position) -> Self {
        Self {
            board,
            start,
            at: Some(start),
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }
}

impl PullSequence for Game<'_> {
    type Item = Direction;

    fn next(&mut self) -> Result<Emission<Direction>> {
        let Some(at) = self.at else {
            return Ok(Emission::End);
        };
        let Some(direction) = self.board.get(at) else {
            self.at = None;
            return Ok(Emission::End);
        };
        self.at = direction.step(at);
        Ok(Emission::Value(direction))
    }

    fn capability(&self) -> Capability {
        Capability::Replayable
    }

    fn branch(&self) -> Option<Self> {
        Some(*self)
    }
}

/// Positions the token visits after each move
pub fn positions(game: Game<'_>) -> Transformed<Game<'_>, Arrows, Position> {
    transform(game.start(), Arrows, game).branching()
}
