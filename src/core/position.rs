//! Board cell coordinates.
//!
//! `(0, 0)` is the bottom-left cell; `+x` is right and `+y` is up.
//! All coordinates are absolute and do not change between agents.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;

/// A cell coordinate on the board.
///
/// Also used for wall pivots (the top/left cell of a wall segment) and
/// for the top-left corner of a rotation region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on the board.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Taxicab distance to another position.
    #[must_use]
    pub const fn taxicab(self, other: Pos) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The position offset by `(dx, dy)`, or `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        Self::from_signed(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// Build a position from signed coordinates, or `None` if off the board.
    #[must_use]
    pub fn from_signed(x: i32, y: i32) -> Option<Pos> {
        if (0..i32::from(BOARD_SIZE)).contains(&x) && (0..i32::from(BOARD_SIZE)).contains(&y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u8, u8)> for Pos {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}
