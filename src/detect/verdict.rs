//! Verdicts and the shared detector state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of a detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleVerdict {
    /// The sequence ended before any state repeated
    Terminates,
    /// Some state was seen twice
    Cycles,
}

impl CycleVerdict {
    pub fn terminates(self) -> bool {
        self == CycleVerdict::Terminates
    }

    pub fn cycles(self) -> bool {
        self == CycleVerdict::Cycles
    }
}

impl fmt::Display for CycleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleVerdict::Terminates => write!(f, "terminates"),
            CycleVerdict::Cycles => write!(f, "cycles"),
        }
    }
}

/// Status of a detector. `Running` is the only non-terminal state; once a
/// detector leaves it, no more values are pulled or accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorState {
    #[default]
    Running,
    Terminates,
    Cycles,
}

impl DetectorState {
    /// Returns true once a verdict has been reached
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetectorState::Running)
    }

    pub fn verdict(&self) -> Option<CycleVerdict> {
        match self {
            DetectorState::Running => None,
            DetectorState::Terminates => Some(CycleVerdict::Terminates),
            DetectorState::Cycles => Some(CycleVerdict::Cycles),
        }
    }
}

impl From<CycleVerdict> for DetectorState {
    fn from(verdict: CycleVerdict) -> Self {
        match verdict {
            CycleVerdict::Terminates => DetectorState::Terminates,
            CycleVerdict::Cycles => DetectorState::Cycles,
        }
    }
}
