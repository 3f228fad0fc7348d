//! Reads a mission document into a validated [`Mission`].
//!
//! The document is line oriented:
//!
//! ```text
//! 5 5        <- top-right corner of the plateau
//! 1 2 N      <- rover start: x, y, heading
//! LMLMLMLMM  <- rover commands
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Every error carries the 1-based number of the line it was found on.

use crate::error::{MissionError, MissionErrorKind, ParseError, Result};
use crate::interpreter::RoverConfig;
use crate::plateau::Plateau;
use crate::rover::{RoverState, parse_coordinate};
use glam::I64Vec2;
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, instrument};

/// One rover's start state and the commands it will receive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoverPlan {
    /// Input line holding the start state.
    pub line: usize,
    pub start: RoverState,
    pub commands: String,
}

/// A plateau together with the rovers to drive across it, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mission {
    pub plateau: Plateau,
    pub rovers: Vec<RoverPlan>,
}

impl Mission {
    /// Parses a mission document, anchoring the plateau at `config.lower_left`.
    ///
    /// Start positions are checked against the plateau here. Command strings are
    /// kept verbatim; the interpreter decides which symbols are valid.
    #[instrument(skip_all)]
    pub fn parse(input: &str, config: &RoverConfig) -> Result<Self> {
        let mut lines: Vec<&str> = input.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let (bounds_line, rover_lines) = lines
            .split_first()
            .ok_or_else(|| MissionError::new(1, MissionErrorKind::Empty))?;

        let upper_right =
            parse_upper_right(bounds_line).map_err(|e| MissionError::new(1, e))?;
        let plateau =
            Plateau::new(config.lower_left, upper_right).map_err(|e| MissionError::new(1, e))?;

        if rover_lines.len() % 2 != 0 {
            return Err(MissionError::new(
                lines.len(),
                MissionErrorKind::OddRoverLines(rover_lines.len()),
            ));
        }

        let mut rovers = Vec::with_capacity(rover_lines.len() / 2);
        for (pair_idx, pair) in rover_lines.chunks_exact(2).enumerate() {
            // The bounds line is line 1, so the first rover starts on line 2.
            let line = 2 + pair_idx * 2;
            let start: RoverState = pair[0].parse().map_err(|e| MissionError::new(line, e))?;
            plateau
                .check(start.position)
                .map_err(|e| MissionError::new(line, e))?;
            rovers.push(RoverPlan {
                line,
                start,
                commands: pair[1].to_string(),
            });
        }

        debug!(
            min = ?plateau.min(),
            max = ?plateau.max(),
            rovers = rovers.len(),
            "Parsed mission"
        );
        Ok(Self { plateau, rovers })
    }

    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }
}

impl FromStr for Mission {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &RoverConfig::default())
    }
}

/// Parses the `"X Y"` top-right line.
fn parse_upper_right(line: &str) -> std::result::Result<I64Vec2, ParseError> {
    let malformed = || ParseError::MalformedBounds(line.to_string());
    let (x, y) = line.split_once(' ').ok_or_else(malformed)?;
    let x = parse_coordinate(x).ok_or_else(malformed)?;
    let y = parse_coordinate(y).ok_or_else(malformed)?;
    Ok(I64Vec2::new(x, y))
}
