//! The game state value.
//!
//! A `BoardState` is immutable per step: `Engine::step` never mutates
//! its input, it builds and returns a replacement. Everything needed to
//! validate an action is inside the value, so the engine itself holds
//! no state and distinct games are fully independent.

use serde::{Deserialize, Serialize};

use crate::core::agent::{AgentId, AgentPair};
use crate::core::config::{start_position, EngineConfig};
use crate::core::position::Pos;

use super::grid::WallGrid;

/// Complete state of a Puoribor game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Pawn position per agent. Never co-located.
    pub positions: AgentPair<Pos>,

    /// Horizontal wall pivot cells.
    pub horizontal_walls: WallGrid,

    /// Vertical wall pivot cells.
    pub vertical_walls: WallGrid,

    /// Walls each agent may still place.
    pub walls_remaining: AgentPair<u8>,

    /// True once some pawn stands on its goal row.
    pub done: bool,
}

impl BoardState {
    /// The game-start state: pawns at opposing baselines, empty grids,
    /// full wall budgets.
    #[must_use]
    pub fn initial(config: &EngineConfig) -> Self {
        Self {
            positions: AgentPair::new(
                start_position(AgentId::new(0)),
                start_position(AgentId::new(1)),
            ),
            horizontal_walls: WallGrid::empty(),
            vertical_walls: WallGrid::empty(),
            walls_remaining: AgentPair::with_value(config.max_walls),
            done: false,
        }
    }

    /// An agent's pawn position.
    #[must_use]
    pub fn position(&self, agent: AgentId) -> Pos {
        self.positions[agent]
    }

    /// Whether a wall interrupts the straight line from `from` to `to`.
    ///
    /// `from` and `to` must differ along exactly one axis. The whole
    /// span is inspected, so the same predicate serves single steps and
    /// two-cell jumps: a jump is blocked by a wall on either half-edge.
    #[must_use]
    pub fn is_blocked(&self, from: Pos, to: Pos) -> bool {
        let (fx, fy) = (i32::from(from.x), i32::from(from.y));
        let (tx, ty) = (i32::from(to.x), i32::from(to.y));
        if fy == ty && fx != tx {
            let (lo, hi) = if fx < tx { (fx, tx) } else { (tx, fx) };
            (lo..hi).any(|x| self.vertical_walls.get_clipped(x, fy))
        } else if fx == tx && fy != ty {
            let (lo, hi) = if fy < ty { (fy, ty) } else { (ty, fy) };
            (lo..hi).any(|y| self.horizontal_walls.get_clipped(fx, y))
        } else {
            false
        }
    }
}
