//! Moves called out over a reader, heard exactly once

use crate::error::Result;
use crate::sequence::{Emission, PullSequence};
use std::collections::VecDeque;
use std::io::BufRead;

/// Single-pass sequence of the non-whitespace characters read from `R`.
///
/// Tokens are passed on uninterpreted; the transition decides whether they
/// belong to the alphabet. The reader is released when the sequence is
/// dropped, whether or not it was read to the end.
#[derive(Debug)]
pub struct CallOut<R> {
    reader: R,
    pending: VecDeque<char>,
    line: String,
    ended: bool,
}

impl<R: BufRead> CallOut<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            ended: false,
        }
    }
}

impl<R: BufRead> PullSequence for CallOut<R> {
    type Item = char;

    fn next(&mut self) -> Result<Emission<char>> {
        while self.pending.is_empty() {
            if self.ended {
                return Ok(Emission::End);
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.ended = true;
                return Ok(Emission::End);
            }
            self.pending
                .extend(self.line.chars().filter(|c| !c.is_whitespace()));
        }
        Ok(self.pending.pop_front().into())
    }
}
