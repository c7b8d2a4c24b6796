//! Wall placement and 4x4 section rotation.
//!
//! Both operations are validate-then-commit: they draft a copy of the
//! state, apply the mutation to the draft, and only return it once both
//! agents can still reach their goal rows. A rejection hands back the
//! error with the caller's state untouched.

use crate::board::BoardState;
use crate::core::agent::AgentId;
use crate::core::config::{goal_row, BOARD_SIZE};
use crate::core::error::StepError;
use crate::core::position::Pos;

use super::path::path_exists;

/// Wall orientation for placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallOrientation {
    /// Spans two columns; blocks vertical movement.
    Horizontal,
    /// Spans two rows; blocks horizontal movement.
    Vertical,
}

/// Validate and apply a wall placement.
///
/// Check order: wall budget, excluded edge row/column, same-orientation
/// overlap on either pivot cell, perpendicular wall crossing the same
/// midpoint, then connectivity for both agents on the draft.
pub fn place_wall(
    state: &BoardState,
    agent: AgentId,
    orientation: WallOrientation,
    pivot: Pos,
) -> Result<BoardState, StepError> {
    if state.walls_remaining[agent] == 0 {
        return Err(StepError::NoWallsRemaining);
    }

    let (x, y) = (pivot.x, pivot.y);
    let last = BOARD_SIZE - 1;
    if x == last || y == last {
        return Err(StepError::EdgeViolation);
    }

    let mut draft = state.clone();
    match orientation {
        WallOrientation::Horizontal => {
            if state.horizontal_walls.get(x, y) || state.horizontal_walls.get(x + 1, y) {
                return Err(StepError::WallOverlap);
            }
            if state.vertical_walls.get(x, y) && state.vertical_walls.get(x, y + 1) {
                return Err(StepError::WallIntersection);
            }
            draft.horizontal_walls.set(x, y);
            draft.horizontal_walls.set(x + 1, y);
        }
        WallOrientation::Vertical => {
            if state.vertical_walls.get(x, y) || state.vertical_walls.get(x, y + 1) {
                return Err(StepError::WallOverlap);
            }
            if state.horizontal_walls.get(x, y) && state.horizontal_walls.get(x + 1, y) {
                return Err(StepError::WallIntersection);
            }
            draft.vertical_walls.set(x, y);
            draft.vertical_walls.set(x, y + 1);
        }
    }

    ensure_goals_reachable(&draft)?;
    draft.walls_remaining[agent] -= 1;
    Ok(draft)
}

/// Validate and apply a 90-degree rotation of the 4x4 pivot region with
/// top-left corner `top_left`.
///
/// The horizontal and vertical grids swap roles inside the region. The
/// windows extend one pivot past the region on one side each, because
/// the wall channels bounding a 4x4 block of cells are 4x5 and 5x4;
/// reads and writes outside the board clip to "no wall". Costs two
/// walls from the acting agent's budget.
pub fn rotate_section(
    state: &BoardState,
    agent: AgentId,
    top_left: Pos,
) -> Result<BoardState, StepError> {
    let limit = BOARD_SIZE - 3;
    if top_left.x >= limit || top_left.y >= limit {
        return Err(StepError::RotationOutOfRange);
    }
    if state.walls_remaining[agent] < 2 {
        return Err(StepError::InsufficientWalls);
    }

    let (x, y) = (i32::from(top_left.x), i32::from(top_left.y));
    let mut draft = state.clone();

    // Horizontal window: columns x..x+4, channels y-1..y+4.
    for i in 0..4 {
        for j in 0..5 {
            let value = state.vertical_walls.get_clipped(x - 1 + j, y + 3 - i);
            draft.horizontal_walls.set_clipped(x + i, y - 1 + j, value);
        }
    }

    // Vertical window: channels x-1..x+4, rows y..y+4.
    for a in 0..5 {
        for b in 0..4 {
            let value = state.horizontal_walls.get_clipped(x + b, y + 3 - a);
            draft.vertical_walls.set_clipped(x - 1 + a, y + b, value);
        }
    }

    ensure_goals_reachable(&draft)?;
    draft.walls_remaining[agent] -= 2;
    Ok(draft)
}

fn ensure_goals_reachable(state: &BoardState) -> Result<(), StepError> {
    for agent in AgentId::both() {
        if !path_exists(state, state.position(agent), goal_row(agent)) {
            return Err(StepError::PathBlocked);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;

    fn fresh() -> BoardState {
        BoardState::initial(&EngineConfig::default())
    }

    const A0: AgentId = AgentId(0);

    #[test]
    fn test_place_horizontal_wall() {
        let state = fresh();
        let next = place_wall(&state, A0, WallOrientation::Horizontal, Pos::new(3, 3)).unwrap();

        assert!(next.horizontal_walls.get(3, 3));
        assert!(next.horizontal_walls.get(4, 3));
        assert_eq!(next.horizontal_walls.count(), 2);
        assert_eq!(next.walls_remaining[A0], 9);
        // Input untouched.
        assert_eq!(state.horizontal_walls.count(), 0);
        assert_eq!(state.walls_remaining[A0], 10);
    }

    #[test]
    fn test_place_vertical_wall() {
        let state = fresh();
        let next = place_wall(&state, A0, WallOrientation::Vertical, Pos::new(6, 2)).unwrap();

        assert!(next.vertical_walls.get(6, 2));
        assert!(next.vertical_walls.get(6, 3));
        assert_eq!(next.walls_remaining[A0], 9);
    }

    #[test]
    fn test_edge_violations() {
        let state = fresh();
        for orientation in [WallOrientation::Horizontal, WallOrientation::Vertical] {
            assert_eq!(
                place_wall(&state, A0, orientation, Pos::new(0, 8)),
                Err(StepError::EdgeViolation)
            );
            assert_eq!(
                place_wall(&state, A0, orientation, Pos::new(8, 0)),
                Err(StepError::EdgeViolation)
            );
        }
    }

    #[test]
    fn test_overlap_on_either_pivot_cell() {
        let state = fresh();
        let placed = place_wall(&state, A0, WallOrientation::Horizontal, Pos::new(3, 3)).unwrap();

        // Same pivot, shifted left onto cell (3, 3), shifted right onto (4, 3).
        for x in [2, 3, 4] {
            assert_eq!(
                place_wall(&placed, A0, WallOrientation::Horizontal, Pos::new(x, 3)),
                Err(StepError::WallOverlap)
            );
        }
        // One column further does not touch the placed wall.
        assert!(place_wall(&placed, A0, WallOrientation::Horizontal, Pos::new(5, 3)).is_ok());
    }

    #[test]
    fn test_perpendicular_crossing_rejected() {
        let state = fresh();
        let placed = place_wall(&state, A0, WallOrientation::Horizontal, Pos::new(3, 3)).unwrap();

        assert_eq!(
            place_wall(&placed, A0, WallOrientation::Vertical, Pos::new(3, 3)),
            Err(StepError::WallIntersection)
        );
        // A vertical wall merely touching one cell forms a T and is legal.
        assert!(place_wall(&placed, A0, WallOrientation::Vertical, Pos::new(4, 3)).is_ok());
    }

    #[test]
    fn test_no_walls_remaining() {
        let mut state = fresh();
        state.walls_remaining[A0] = 0;

        assert_eq!(
            place_wall(&state, A0, WallOrientation::Horizontal, Pos::new(3, 3)),
            Err(StepError::NoWallsRemaining)
        );
    }

    #[test]
    fn test_rotation_region_bounds() {
        let state = fresh();
        assert_eq!(
            rotate_section(&state, A0, Pos::new(6, 0)),
            Err(StepError::RotationOutOfRange)
        );
        assert_eq!(
            rotate_section(&state, A0, Pos::new(0, 7)),
            Err(StepError::RotationOutOfRange)
        );
        assert!(rotate_section(&state, A0, Pos::new(5, 5)).is_ok());
    }

    #[test]
    fn test_rotation_requires_two_walls() {
        let mut state = fresh();
        state.walls_remaining[A0] = 1;

        assert_eq!(
            rotate_section(&state, A0, Pos::new(3, 3)),
            Err(StepError::InsufficientWalls)
        );
    }

    #[test]
    fn test_rotation_of_empty_region_is_identity_there() {
        let state = fresh();
        let next = rotate_section(&state, A0, Pos::new(2, 2)).unwrap();

        assert_eq!(next.horizontal_walls.count(), 0);
        assert_eq!(next.vertical_walls.count(), 0);
        assert_eq!(next.walls_remaining[A0], 8);
    }

    #[test]
    fn test_rotation_turns_horizontal_into_vertical() {
        let mut state = fresh();
        // Horizontal wall with pivot (4, 5), fully inside the region at (3, 3).
        state.horizontal_walls.set(4, 5);
        state.horizontal_walls.set(5, 5);

        let next = rotate_section(&state, A0, Pos::new(3, 3)).unwrap();

        assert_eq!(next.horizontal_walls.count(), 0);
        assert_eq!(next.vertical_walls.count(), 2);
        assert!(next.vertical_walls.get(3, 4));
        assert!(next.vertical_walls.get(3, 5));
        assert_eq!(next.walls_remaining[A0], 8);
    }

    #[test]
    fn test_rotation_preserves_walls_outside_region() {
        let mut state = fresh();
        state.horizontal_walls.set(0, 7);
        state.horizontal_walls.set(1, 7);

        let next = rotate_section(&state, A0, Pos::new(3, 0)).unwrap();

        assert!(next.horizontal_walls.get(0, 7));
        assert!(next.horizontal_walls.get(1, 7));
        assert_eq!(next.horizontal_walls.count(), 2);
    }
}
