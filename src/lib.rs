//! # plateau-rover
//!
//! Drives robotic rovers across a bounded rectangular plateau.
//!
//! A rover is a grid position plus a cardinal heading. It receives a string of
//! single-letter commands (`L`/`R` spin it 90 degrees, `M` moves it one cell forward)
//! and the final position is checked against the plateau bounds. The square directly
//! North of `(x, y)` is `(x, y + 1)`.
//!
//! ```
//! use plateau_rover::{Mission, RoverConfig, RoverInterpreter};
//!
//! let mission: Mission = "5 5\n1 2 N\nLMLMLMLMM".parse().unwrap();
//! let reports = RoverInterpreter::standard(RoverConfig::default())
//!     .run_mission(&mission)
//!     .unwrap();
//! assert_eq!(reports[0].to_string(), "1 3 N");
//! ```

pub mod error;
pub mod interpreter;
pub mod mission;
pub mod plateau;
pub mod report;
pub mod rover;

pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use plateau::*;
pub use report::*;
pub use rover::*;
