//! The step-transition engine.
//!
//! `Engine::step` is the single entry point: it validates an action
//! against a state, applies it, and returns the resulting state or the
//! specific rejection reason. The engine holds only configuration, so
//! one `Engine` can serve any number of independent games, and `step`
//! is a pure function of `(state, agent, action)`.
//!
//! ## Move legality
//!
//! Distances are taxicab. Distance 1 must cross an unblocked edge onto
//! a free cell. Distance 2 in a straight line is a jump and requires
//! the opponent on the midpoint with both half-edges open. Distance 2
//! diagonally requires the opponent adjacent at the elbow, the straight
//! jump over them unavailable (off board or walled), and an open edge
//! from the opponent to the destination.

use crate::board::BoardState;
use crate::core::action::Action;
use crate::core::agent::AgentId;
use crate::core::config::{goal_row, BOARD_SIZE, EngineConfig};
use crate::core::error::StepError;
use crate::core::position::Pos;

use super::walls::{place_wall, rotate_section, WallOrientation};

/// The Puoribor rules engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The game-start state for this configuration.
    #[must_use]
    pub fn initial_state(&self) -> BoardState {
        BoardState::initial(&self.config)
    }

    /// Step through the game: validate `action` for `agent` against
    /// `state` and produce the next state.
    ///
    /// On rejection the input state is untouched; the caller may treat
    /// the action as not taken and submit another for the same turn.
    pub fn step(
        &self,
        state: &BoardState,
        agent: AgentId,
        action: Action,
    ) -> Result<BoardState, StepError> {
        if !action.position().in_range() {
            return Err(StepError::OutOfBounds);
        }
        if !agent.is_valid() {
            return Err(StepError::InvalidAgent);
        }

        let mut next = match action {
            Action::Move(to) => self.apply_move(state, agent, to)?,
            Action::PlaceHorizontalWall(pivot) => {
                place_wall(state, agent, WallOrientation::Horizontal, pivot)?
            }
            Action::PlaceVerticalWall(pivot) => {
                place_wall(state, agent, WallOrientation::Vertical, pivot)?
            }
            Action::RotateSection(top_left) => rotate_section(state, agent, top_left)?,
        };

        next.done = self.check_win(&next);
        Ok(next)
    }

    /// Enumerate every action `step` would accept for `agent`.
    ///
    /// Brute-force over the coordinate space; the board is small enough
    /// that match-runners and tests use this directly.
    #[must_use]
    pub fn legal_actions(&self, state: &BoardState, agent: AgentId) -> Vec<Action> {
        let mut actions = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                for candidate in [
                    Action::Move(pos),
                    Action::PlaceHorizontalWall(pos),
                    Action::PlaceVerticalWall(pos),
                    Action::RotateSection(pos),
                ] {
                    if self.step(state, agent, candidate).is_ok() {
                        actions.push(candidate);
                    }
                }
            }
        }
        actions
    }

    fn apply_move(
        &self,
        state: &BoardState,
        agent: AgentId,
        to: Pos,
    ) -> Result<BoardState, StepError> {
        let from = state.position(agent);
        let opponent = state.position(agent.opponent());
        if to == opponent {
            return Err(StepError::OpponentCollision);
        }

        let dx = i32::from(to.x) - i32::from(from.x);
        let dy = i32::from(to.y) - i32::from(from.y);
        match dx.abs() + dy.abs() {
            0 => return Err(StepError::ZeroLengthMove),
            1 => {
                if state.is_blocked(from, to) {
                    return Err(StepError::InvalidJump);
                }
            }
            2 if dx == 0 || dy == 0 => {
                let midpoint = Pos::new((from.x + to.x) / 2, (from.y + to.y) / 2);
                if midpoint != opponent {
                    return Err(StepError::InvalidJump);
                }
                // Spans both half-edges: a wall before or behind the
                // opponent blocks the jump.
                if state.is_blocked(from, to) {
                    return Err(StepError::InvalidJump);
                }
            }
            2 => {
                let elbows = [Pos::new(from.x, to.y), Pos::new(to.x, from.y)];
                if opponent != elbows[0] && opponent != elbows[1] {
                    return Err(StepError::DiagonalMoveNotAllowed);
                }
                if state.is_blocked(from, opponent) {
                    return Err(StepError::InvalidJump);
                }
                let jump = Pos::from_signed(
                    i32::from(from.x) + 2 * (i32::from(opponent.x) - i32::from(from.x)),
                    i32::from(from.y) + 2 * (i32::from(opponent.y) - i32::from(from.y)),
                );
                if let Some(landing) = jump {
                    if !state.is_blocked(from, landing) {
                        return Err(StepError::StraightJumpAvailable);
                    }
                }
                if state.is_blocked(opponent, to) {
                    return Err(StepError::InvalidJump);
                }
            }
            _ => return Err(StepError::MoveTooFar),
        }

        let mut next = state.clone();
        next.positions[agent] = to;
        Ok(next)
    }

    fn check_win(&self, state: &BoardState) -> bool {
        AgentId::both()
            .into_iter()
            .any(|agent| state.position(agent).y == goal_row(agent))
    }
}
