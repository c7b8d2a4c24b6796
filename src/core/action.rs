//! Action representation and wire codec.
//!
//! An action is a tagged variant with one coordinate payload per case,
//! matched exhaustively by the engine so a new case cannot be silently
//! ignored. For match-runner boundaries there is a fixed 3-integer wire
//! form `[action_type, x, y]`:
//!
//! - `0`: move the pawn to `(x, y)`
//! - `1`: place a horizontal wall with left pivot `(x, y)`
//! - `2`: place a vertical wall with top pivot `(x, y)`
//! - `3`: rotate the 4x4 section whose top-left corner is `(x, y)`

use serde::{Deserialize, Serialize};

use super::error::StepError;
use super::position::Pos;

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the acting agent's pawn to an absolute position.
    Move(Pos),
    /// Place a horizontal wall; the pivot is the wall's left cell.
    PlaceHorizontalWall(Pos),
    /// Place a vertical wall; the pivot is the wall's top cell.
    PlaceVerticalWall(Pos),
    /// Rotate a 4x4 pivot region given by its top-left corner.
    RotateSection(Pos),
}

impl Action {
    /// The coordinate payload, regardless of variant.
    #[must_use]
    pub const fn position(self) -> Pos {
        match self {
            Action::Move(pos)
            | Action::PlaceHorizontalWall(pos)
            | Action::PlaceVerticalWall(pos)
            | Action::RotateSection(pos) => pos,
        }
    }

    /// Decode the `[action_type, x, y]` wire form.
    ///
    /// Coordinates outside the board give `OutOfBounds`; unknown tags
    /// give `InvalidActionType`.
    pub fn from_wire(wire: [i32; 3]) -> Result<Self, StepError> {
        let [tag, x, y] = wire;
        let pos = Pos::from_signed(x, y).ok_or(StepError::OutOfBounds)?;
        match tag {
            0 => Ok(Action::Move(pos)),
            1 => Ok(Action::PlaceHorizontalWall(pos)),
            2 => Ok(Action::PlaceVerticalWall(pos)),
            3 => Ok(Action::RotateSection(pos)),
            _ => Err(StepError::InvalidActionType),
        }
    }

    /// Encode to the `[action_type, x, y]` wire form.
    #[must_use]
    pub fn to_wire(self) -> [i32; 3] {
        let tag = match self {
            Action::Move(_) => 0,
            Action::PlaceHorizontalWall(_) => 1,
            Action::PlaceVerticalWall(_) => 2,
            Action::RotateSection(_) => 3,
        };
        let pos = self.position();
        [tag, i32::from(pos.x), i32::from(pos.y)]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "move to {pos}"),
            Action::PlaceHorizontalWall(pos) => write!(f, "place horizontal wall at {pos}"),
            Action::PlaceVerticalWall(pos) => write!(f, "place vertical wall at {pos}"),
            Action::RotateSection(pos) => write!(f, "rotate section at {pos}"),
        }
    }
}
