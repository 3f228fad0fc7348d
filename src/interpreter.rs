//! Interpreter that drives a [`RoverState`] through a command string.
//!
//! The entry point is [`RoverInterpreter`]. Configure it with a [`RoverConfig`],
//! register symbol-to-operation mappings via [`RoverInterpreter::set_op`] or
//! [`RoverInterpreter::populate_standard_symbols`], then call
//! [`RoverInterpreter::execute`] for a single rover or
//! [`RoverInterpreter::run_mission`] for a whole [`Mission`].

use crate::error::{CommandError, MissionError, Result};
use crate::mission::Mission;
use crate::report::{Outcome, RoverReport};
use crate::rover::{RoverOp, RoverState};
use glam::I64Vec2;
use std::collections::HashMap;
use tracing::{debug, instrument, trace, warn};

/// Configuration for rover interpretation.
#[derive(Clone, Debug)]
pub struct RoverConfig {
    /// Lower-left corner of the plateau. Default: the origin.
    pub lower_left: I64Vec2,
    /// Grid cells covered by a single move. Default: 1.
    pub move_distance: i32,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            lower_left: I64Vec2::ZERO,
            move_distance: 1,
        }
    }
}

/// Interprets command strings to move rovers.
pub struct RoverInterpreter {
    op_map: HashMap<char, RoverOp>,
    config: RoverConfig,
}

impl RoverInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// Every symbol is rejected until operations are registered with
    /// [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols).
    pub fn new(config: RoverConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Creates an interpreter that understands `M`, `L` and `R`.
    pub fn standard(config: RoverConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RoverOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RoverOp`] to a command symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional mappings: `M` moves, `L` and `R` turn.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('M', RoverOp::Move),
            ('L', RoverOp::TurnLeft),
            ('R', RoverOp::TurnRight),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    pub fn config(&self) -> &RoverConfig {
        &self.config
    }

    /// Looks up the operation registered for `symbol`.
    pub fn op(&self, symbol: char) -> Option<RoverOp> {
        self.op_map.get(&symbol).copied()
    }

    /// Checks every symbol in `commands` without moving anything.
    pub fn validate(&self, commands: &str) -> std::result::Result<(), CommandError> {
        self.ops(commands).try_for_each(|op| op.map(|_| ()))
    }

    /// Applies `commands` to `start` left to right and returns the final state.
    ///
    /// Stops at the first symbol with no registered operation. Bounds are not
    /// consulted: a rover may wander off the plateau and come back.
    pub fn execute(
        &self,
        start: RoverState,
        commands: &str,
    ) -> std::result::Result<RoverState, CommandError> {
        let mut rover = start;
        for op in self.ops(commands) {
            let op = op?;
            rover = rover.apply(op, self.config.move_distance);
            trace!(?op, position = ?rover.position, heading = %rover.heading, "Applied op");
        }
        Ok(rover)
    }

    /// Runs every rover of `mission` in order and reports where each one ended up.
    ///
    /// All command strings are validated before any rover moves, so an invalid symbol
    /// anywhere fails the mission as a whole. A rover that finishes off the plateau is
    /// reported with [`Outcome::LeftPlateau`] and does not stop the others.
    #[instrument(skip_all, fields(rovers = mission.rovers.len()))]
    pub fn run_mission(&self, mission: &Mission) -> Result<Vec<RoverReport>> {
        for plan in &mission.rovers {
            self.validate(&plan.commands)
                .map_err(|e| MissionError::new(plan.line + 1, e))?;
        }

        let mut reports = Vec::with_capacity(mission.rovers.len());
        for plan in &mission.rovers {
            let finish = self
                .execute(plan.start, &plan.commands)
                .map_err(|e| MissionError::new(plan.line + 1, e))?;

            let outcome = match mission.plateau.check(finish.position) {
                Ok(()) => Outcome::OnPlateau,
                Err(violation) => {
                    warn!(line = plan.line, %finish, %violation, "Rover left the plateau");
                    Outcome::LeftPlateau(violation)
                }
            };
            debug!(line = plan.line, start = %plan.start, %finish, "Rover finished");

            reports.push(RoverReport {
                line: plan.line,
                start: plan.start,
                finish,
                outcome,
            });
        }
        Ok(reports)
    }

    fn ops<'a>(
        &'a self,
        commands: &'a str,
    ) -> impl Iterator<Item = std::result::Result<RoverOp, CommandError>> + 'a {
        commands.chars().enumerate().map(|(index, symbol)| {
            self.op(symbol)
                .ok_or(CommandError::UnknownSymbol { symbol, index })
        })
    }
}
