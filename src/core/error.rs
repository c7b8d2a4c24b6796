//! Step rejection reasons.
//!
//! Every way an action can be illegal surfaces as its own `StepError`
//! kind; none carry free-form message strings. All of them are
//! recoverable: a rejected action leaves the prior state untouched and
//! the caller may submit a different action for the same turn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why `Engine::step` rejected an action.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepError {
    /// The action's coordinates lie outside the board.
    #[error("position out of board")]
    OutOfBounds,

    /// The agent id is not 0 or 1.
    #[error("invalid agent id")]
    InvalidAgent,

    /// The wire encoding carried an unknown action tag.
    #[error("invalid action type")]
    InvalidActionType,

    /// A move onto the cell the pawn already occupies.
    #[error("cannot move zero cells")]
    ZeroLengthMove,

    /// A move of taxicab distance greater than two.
    #[error("cannot move more than two cells")]
    MoveTooFar,

    /// A jump over nothing, or any movement across a wall.
    #[error("cannot jump over nothing or across a wall")]
    InvalidJump,

    /// A diagonal move without the opponent at the elbow.
    #[error("cannot move diagonally")]
    DiagonalMoveNotAllowed,

    /// A diagonal jump attempted while the straight jump is open.
    #[error("cannot jump diagonally when a straight jump is possible")]
    StraightJumpAvailable,

    /// A move onto the opponent's cell.
    #[error("cannot move to the opponent's position")]
    OpponentCollision,

    /// Wall placement with an empty wall budget.
    #[error("no walls remaining")]
    NoWallsRemaining,

    /// Section rotation with fewer than two walls remaining.
    #[error("fewer than two walls remaining")]
    InsufficientWalls,

    /// Wall placement on the excluded edge row or column.
    #[error("cannot place a wall on the board edge")]
    EdgeViolation,

    /// A same-orientation wall already occupies a pivot cell.
    #[error("wall already placed")]
    WallOverlap,

    /// A perpendicular wall crosses the same midpoint.
    #[error("cannot create intersecting walls")]
    WallIntersection,

    /// The mutation would cut off an agent from its goal row.
    #[error("cannot block all paths to a goal row")]
    PathBlocked,

    /// The 4x4 rotation region does not fit on the board.
    #[error("rotation region out of board")]
    RotationOutOfRange,
}
