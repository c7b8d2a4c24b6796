//! Reachability check for the wall-connectivity invariant.
//!
//! Breadth-first search over the 4-connected cell grid. Pawns never
//! block the search; only walls remove edges, matching the movement
//! blocking predicate.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::position::Pos;

/// Whether a pawn at `start` can reach any cell on `goal_row`.
///
/// Called once per agent after every wall-affecting mutation; the grid
/// is 9x9 so the search is bounded and cheap.
#[must_use]
pub fn path_exists(state: &BoardState, start: Pos, goal_row: u8) -> bool {
    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();
    visited.insert(start);
    frontier.push_back(start);

    while let Some(here) = frontier.pop_front() {
        if here.y == goal_row {
            return true;
        }
        for there in neighbors(here) {
            if state.is_blocked(here, there) {
                continue;
            }
            if visited.insert(there) {
                frontier.push_back(there);
            }
        }
    }
    false
}

fn neighbors(pos: Pos) -> SmallVec<[Pos; 4]> {
    let mut out = SmallVec::new();
    for (dx, dy) in [(-1, 0), (0, -1), (0, 1), (1, 0)] {
        if let Some(there) = pos.offset(dx, dy) {
            out.push(there);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{goal_row, EngineConfig, BOARD_SIZE};
    use crate::core::AgentId;

    fn fresh() -> BoardState {
        BoardState::initial(&EngineConfig::default())
    }

    #[test]
    fn test_empty_board_reaches_both_goals() {
        let state = fresh();
        for agent in AgentId::both() {
            assert!(path_exists(
                &state,
                state.position(agent),
                goal_row(agent)
            ));
        }
    }

    #[test]
    fn test_start_on_goal_row_is_trivially_reachable() {
        let state = fresh();
        assert!(path_exists(&state, Pos::new(0, 0), 0));
    }

    #[test]
    fn test_sealed_corner_has_no_path() {
        let mut state = fresh();
        // Seal cells (0, 0) and (1, 0): a horizontal wall above them and
        // a vertical wall to their right.
        state.horizontal_walls.set(0, 0);
        state.horizontal_walls.set(1, 0);
        state.vertical_walls.set(1, 0);
        state.vertical_walls.set(1, 1);

        assert!(!path_exists(&state, Pos::new(0, 0), BOARD_SIZE - 1));
        assert!(!path_exists(&state, Pos::new(1, 0), BOARD_SIZE - 1));
        // The rest of the board is unaffected.
        assert!(path_exists(&state, Pos::new(2, 0), BOARD_SIZE - 1));
        // Reaching the sealed row itself from outside is impossible too,
        // but row 0 has open cells at x >= 2.
        assert!(path_exists(&state, Pos::new(4, 8), 0));
    }

    #[test]
    fn test_full_fence_blocks_everything() {
        let mut state = fresh();
        // A wall across the entire row channel y = 3.
        for x in 0..BOARD_SIZE {
            state.horizontal_walls.set(x, 3);
        }

        assert!(!path_exists(&state, Pos::new(4, 0), BOARD_SIZE - 1));
        assert!(!path_exists(&state, Pos::new(4, 8), 0));
        // Goals on the same side of the fence stay reachable.
        assert!(path_exists(&state, Pos::new(4, 8), BOARD_SIZE - 1));
    }
}
