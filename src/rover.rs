//! Rover state and the heading/position transitions applied to it.

use crate::error::ParseError;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction a rover faces.
///
/// Right turns cycle `North -> East -> South -> West -> North`; left turns walk the
/// same cycle backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in right-turn order, starting from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading after a 90 degree turn to the left.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after a 90 degree turn to the right.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step on the grid for this heading. North is `+y`.
    pub const fn offset(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::South => I64Vec2::NEG_Y,
            Self::East => I64Vec2::X,
            Self::West => I64Vec2::NEG_X,
        }
    }

    /// Single-letter form used on the wire: `N`, `E`, `S` or `W`.
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            _ => Err(ParseError::InvalidHeading(c.to_string())),
        }
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseError::InvalidHeading(s.to_string())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Position and heading of a single rover.
///
/// Transitions consume the state and return the next one, so a finished run is
/// simply the last value produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell the rover occupies.
    pub position: I64Vec2,

    /// Direction the rover faces.
    pub heading: Heading,
}

impl RoverState {
    pub const fn new(position: I64Vec2, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Spins the rover 90 degrees left without moving it.
    pub const fn turn_left(self) -> Self {
        Self {
            heading: self.heading.left(),
            ..self
        }
    }

    /// Spins the rover 90 degrees right without moving it.
    pub const fn turn_right(self) -> Self {
        Self {
            heading: self.heading.right(),
            ..self
        }
    }

    /// Moves `distance` cells along the current heading.
    ///
    /// Coordinates are 64-bit while every input coordinate and step fits in 32 bits,
    /// so a rover pushed past any plateau edge lands off the plateau instead of
    /// wrapping. Accumulated runs saturate at the `i64` limits.
    pub fn advance(self, distance: i32) -> Self {
        let step = self.heading.offset() * i64::from(distance);
        Self {
            position: self.position.saturating_add(step),
            ..self
        }
    }

    /// Applies a single [`RoverOp`], moving `distance` cells for [`RoverOp::Move`].
    pub fn apply(self, op: RoverOp, distance: i32) -> Self {
        match op {
            RoverOp::TurnLeft => self.turn_left(),
            RoverOp::TurnRight => self.turn_right(),
            RoverOp::Move => self.advance(distance),
        }
    }
}

/// Parses `"X Y H"`: two non-negative integers and a heading letter, single-space separated.
impl FromStr for RoverState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(' ').collect();
        let [x, y, heading] = fields.as_slice() else {
            return Err(ParseError::MalformedRover(s.to_string()));
        };
        let x = parse_coordinate(x).ok_or_else(|| ParseError::MalformedRover(s.to_string()))?;
        let y = parse_coordinate(y).ok_or_else(|| ParseError::MalformedRover(s.to_string()))?;
        let heading = heading.parse()?;
        Ok(Self::new(I64Vec2::new(x, y), heading))
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// Parses a bare run of ASCII digits that fits in an `i32`. Signs and padding are rejected.
pub(crate) fn parse_coordinate(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i32>().ok().map(i64::from)
}

/// Operations a command symbol can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverOp {
    /// Spin 90 degrees left (`L`).
    TurnLeft,
    /// Spin 90 degrees right (`R`).
    TurnRight,
    /// Move forward one step along the heading (`M`).
    Move,
}
