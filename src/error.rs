use crate::plateau::Axis;
use serde::Serialize;
use thiserror::Error;

/// Result alias for whole-mission operations.
pub type Result<T> = std::result::Result<T, MissionError>;

/// A plateau that cannot be built, or a position that falls off one.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundsError {
    #[error("top-right {axis} coordinate should be more than {min}, got {value}")]
    Degenerate { axis: Axis, min: i64, value: i64 },
    #[error("rover {axis} coordinate should be at least {min}, got {value}")]
    BelowMin { axis: Axis, min: i64, value: i64 },
    #[error("rover {axis} coordinate should be at most {max}, got {value}")]
    AboveMax { axis: Axis, max: i64, value: i64 },
}

/// A command string the interpreter cannot execute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid command `{symbol}` at position {index}, use only M, L or R")]
    UnknownSymbol { symbol: char, index: usize },
}

/// A single input line that does not have the expected shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected top-right coordinates like \"X Y\", got \"{0}\"")]
    MalformedBounds(String),
    #[error("invalid rover position \"{0}\", expected \"X Y H\"")]
    MalformedRover(String),
    #[error("invalid heading \"{0}\", it can be one of N, S, W, E")]
    InvalidHeading(String),
}

/// What went wrong while reading or running a mission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MissionErrorKind {
    #[error("mission input is empty")]
    Empty,
    #[error("every rover needs 2 lines, one with its position and one with commands; got {0} lines")]
    OddRoverLines(usize),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A fatal mission error, tied to the 1-based input line it was found on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (line {line})")]
pub struct MissionError {
    pub line: usize,
    pub kind: MissionErrorKind,
}

impl MissionError {
    pub fn new(line: usize, kind: impl Into<MissionErrorKind>) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }
}
