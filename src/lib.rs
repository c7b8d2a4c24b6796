//! # puoribor
//!
//! A deterministic rules engine for Puoribor, a Quoridor variant on a
//! fixed 9x9 board where four walls' worth of board can also be rotated
//! as a 4x4 section.
//!
//! ## Design Principles
//!
//! 1. **Stateless Engine**: `Engine` holds configuration only. `step`
//!    is a pure function of `(state, agent, action)`; distinct games
//!    are independent state values and need no synchronization.
//!
//! 2. **States Are Values**: a step never mutates its input. Wall
//!    placement and rotation validate against a private draft and only
//!    the draft is published, so a rejected action leaves the prior
//!    state byte-for-byte unchanged.
//!
//! 3. **Closed Error Taxonomy**: every rejection is a `StepError`
//!    variant, never a message string. Callers dispatch on the kind.
//!
//! ## Modules
//!
//! - `core`: agents, positions, actions, errors, configuration
//! - `board`: wall grids and the `BoardState` value
//! - `rules`: the step engine, wall logic, and pathfinding
//!
//! ## Example
//!
//! ```
//! use puoribor::{Action, AgentId, Engine, EngineConfig, Pos, StepError};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let state = engine.initial_state();
//!
//! let state = engine
//!     .step(&state, AgentId::new(0), Action::Move(Pos::new(4, 1)))
//!     .unwrap();
//! assert_eq!(state.position(AgentId::new(0)), Pos::new(4, 1));
//!
//! // Rejections name their reason and leave the state untouched.
//! let err = engine
//!     .step(&state, AgentId::new(0), Action::Move(Pos::new(4, 5)))
//!     .unwrap_err();
//! assert_eq!(err, StepError::MoveTooFar);
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    goal_row, start_position, Action, AgentId, AgentPair, EngineConfig, Pos, StepError,
    AGENT0_GOAL_ROW, AGENT1_GOAL_ROW, BOARD_SIZE, DEFAULT_MAX_WALLS,
};

pub use crate::board::{BoardState, WallGrid};

pub use crate::rules::{path_exists, Engine, WallOrientation};
