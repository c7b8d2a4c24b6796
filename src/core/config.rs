//! Engine configuration and board convention constants.
//!
//! The board size is fixed at 9x9; only the wall budget varies between
//! rulesets (the two published variants disagree on it), so it is an
//! explicit configuration value rather than a hard-coded number.
//!
//! ## Orientation convention
//!
//! `(0, 0)` is the bottom-left cell. Agent 0 starts on the bottom
//! baseline `(4, 0)` and wins by reaching the top row `y = 8`; agent 1
//! starts at `(4, 8)` and wins on `y = 0`.

use serde::{Deserialize, Serialize};

use super::agent::AgentId;
use super::position::Pos;

/// Board width and height, in cells. Fixed for Puoribor.
pub const BOARD_SIZE: u8 = 9;

/// Default wall budget per agent.
pub const DEFAULT_MAX_WALLS: u8 = 10;

/// Goal row for agent 0 (moves upward from the bottom baseline).
pub const AGENT0_GOAL_ROW: u8 = BOARD_SIZE - 1;

/// Goal row for agent 1 (moves downward from the top baseline).
pub const AGENT1_GOAL_ROW: u8 = 0;

/// The row an agent must reach to win.
#[must_use]
pub const fn goal_row(agent: AgentId) -> u8 {
    if agent.index() == 0 {
        AGENT0_GOAL_ROW
    } else {
        AGENT1_GOAL_ROW
    }
}

/// An agent's starting position.
#[must_use]
pub const fn start_position(agent: AgentId) -> Pos {
    if agent.index() == 0 {
        Pos::new(BOARD_SIZE / 2, 0)
    } else {
        Pos::new(BOARD_SIZE / 2, BOARD_SIZE - 1)
    }
}

/// Engine configuration.
///
/// `max_walls` defaults to 10; the older ruleset variant used 20.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wall budget each agent starts the game with.
    pub max_walls: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_walls: DEFAULT_MAX_WALLS,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with an explicit wall budget.
    #[must_use]
    pub const fn new(max_walls: u8) -> Self {
        Self { max_walls }
    }
}
