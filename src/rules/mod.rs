//! Game rules: the step engine and its collaborating checks.
//!
//! - `engine`: action dispatch, move legality, win detection
//! - `walls`: wall placement and 4x4 section rotation
//! - `path`: BFS reachability backing the connectivity invariant
//!
//! Wall-affecting operations draft a copy of the state and re-validate
//! connectivity before committing, so a rejected action can never leave
//! a partially applied state behind.

pub mod engine;
pub mod path;
pub mod walls;

pub use engine::Engine;
pub use path::path_exists;
pub use walls::WallOrientation;
