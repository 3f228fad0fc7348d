//! Rectangular grid bounds and the checks made against them.

use crate::error::BoundsError;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two grid axes, used to say which bound was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// The grid rovers are landed on.
///
/// Both corners are inclusive. Construction guarantees `min < max` on each axis, so a
/// `Plateau` always has at least a 2x2 cell area. Deserialization goes through
/// [`Plateau::new`] as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Corners")]
pub struct Plateau {
    min: I64Vec2,
    max: I64Vec2,
}

/// Unchecked wire form of a [`Plateau`].
#[derive(Deserialize)]
struct Corners {
    min: I64Vec2,
    max: I64Vec2,
}

impl TryFrom<Corners> for Plateau {
    type Error = BoundsError;

    fn try_from(corners: Corners) -> Result<Self, Self::Error> {
        Self::new(corners.min, corners.max)
    }
}

impl Plateau {
    /// Builds a plateau from its lower-left and upper-right corners.
    ///
    /// Fails if the upper-right corner does not lie strictly above and to the right
    /// of the lower-left one. The X axis is checked first.
    pub fn new(lower_left: I64Vec2, upper_right: I64Vec2) -> Result<Self, BoundsError> {
        if upper_right.x <= lower_left.x {
            return Err(BoundsError::Degenerate {
                axis: Axis::X,
                min: lower_left.x,
                value: upper_right.x,
            });
        }
        if upper_right.y <= lower_left.y {
            return Err(BoundsError::Degenerate {
                axis: Axis::Y,
                min: lower_left.y,
                value: upper_right.y,
            });
        }
        Ok(Self {
            min: lower_left,
            max: upper_right,
        })
    }

    /// Plateau anchored at the origin.
    pub fn from_upper_right(upper_right: I64Vec2) -> Result<Self, BoundsError> {
        Self::new(I64Vec2::ZERO, upper_right)
    }

    pub fn min(&self) -> I64Vec2 {
        self.min
    }

    pub fn max(&self) -> I64Vec2 {
        self.max
    }

    /// Checks that `position` lies on the plateau.
    ///
    /// The error reports the first violated bound, in the order X min, X max, Y min, Y max.
    pub fn check(&self, position: I64Vec2) -> Result<(), BoundsError> {
        let axes = [
            (Axis::X, position.x, self.min.x, self.max.x),
            (Axis::Y, position.y, self.min.y, self.max.y),
        ];
        for (axis, value, min, max) in axes {
            if value < min {
                return Err(BoundsError::BelowMin { axis, min, value });
            }
            if value > max {
                return Err(BoundsError::AboveMax { axis, max, value });
            }
        }
        Ok(())
    }

    pub fn contains(&self, position: I64Vec2) -> bool {
        self.check(position).is_ok()
    }
}
