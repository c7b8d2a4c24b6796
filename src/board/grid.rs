//! Boolean grids over wall-pivot coordinates.
//!
//! Each wall orientation gets its own `WallGrid`. A horizontal wall
//! with pivot `(x, y)` occupies cells `(x, y)` and `(x + 1, y)` of the
//! horizontal grid and blocks vertical movement between rows `y` and
//! `y + 1`; a vertical wall with pivot `(x, y)` occupies `(x, y)` and
//! `(x, y + 1)` of the vertical grid and blocks horizontal movement
//! between columns `x` and `x + 1`.
//!
//! The clipped accessors treat everything outside the board as "no
//! wall". Section rotation reads and writes through them instead of
//! padding the grids physically, so its windows can overhang the board
//! edge by one channel.

use serde::{Deserialize, Serialize};

use crate::core::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A boolean grid over wall-pivot coordinates, indexed `[x][y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallGrid {
    cells: [[bool; N]; N],
}

impl Default for WallGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl WallGrid {
    /// A grid with no walls.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[false; N]; N],
        }
    }

    /// Whether the pivot cell is occupied. Coordinates must be on the board.
    #[must_use]
    pub fn get(&self, x: u8, y: u8) -> bool {
        self.cells[x as usize][y as usize]
    }

    /// Occupy a pivot cell. Coordinates must be on the board.
    pub fn set(&mut self, x: u8, y: u8) {
        self.cells[x as usize][y as usize] = true;
    }

    /// Whether a pivot cell is occupied, with off-board reads empty.
    #[must_use]
    pub fn get_clipped(&self, x: i32, y: i32) -> bool {
        if (0..N as i32).contains(&x) && (0..N as i32).contains(&y) {
            self.cells[x as usize][y as usize]
        } else {
            false
        }
    }

    /// Write a pivot cell, dropping off-board writes.
    pub fn set_clipped(&mut self, x: i32, y: i32, value: bool) {
        if (0..N as i32).contains(&x) && (0..N as i32).contains(&y) {
            self.cells[x as usize][y as usize] = value;
        }
    }

    /// Number of occupied pivot cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells
            .iter()
            .map(|column| column.iter().filter(|&&cell| cell).count())
            .sum()
    }
}
