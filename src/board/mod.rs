//! Board representation: wall grids and the game state value.
//!
//! ## Key Types
//!
//! - `WallGrid`: boolean grid over wall-pivot coordinates, one per
//!   wall orientation, with clipped accessors for edge-safe reads
//! - `BoardState`: the immutable-per-step state `Engine::step`
//!   consumes and produces

pub mod grid;
pub mod state;

pub use grid::WallGrid;
pub use state::BoardState;
