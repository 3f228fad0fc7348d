use crate::error::BoundsError;
use crate::rover::RoverState;
use serde::Serialize;
use std::fmt;

/// Where a rover ended up relative to the plateau.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum Outcome {
    OnPlateau,
    /// The final position broke this bound.
    LeftPlateau(BoundsError),
}

/// Snapshot of one rover after its commands ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoverReport {
    /// Input line holding the rover's start state.
    pub line: usize,
    pub start: RoverState,
    pub finish: RoverState,
    pub outcome: Outcome,
}

impl RoverReport {
    pub fn left_plateau(&self) -> bool {
        matches!(self.outcome, Outcome::LeftPlateau(_))
    }
}

/// `"X Y H"`, prefixed with a notice when the rover left the plateau.
impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::OnPlateau => write!(f, "{}", self.finish),
            Outcome::LeftPlateau(_) => write!(f, "Rover left the plateau: {}", self.finish),
        }
    }
}
