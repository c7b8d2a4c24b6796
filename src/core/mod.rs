//! Core engine types: agents, positions, actions, errors, configuration.
//!
//! These are the value types the rules engine operates on. They carry
//! no behavior beyond construction and encoding; all game semantics
//! live under `rules`.

pub mod action;
pub mod agent;
pub mod config;
pub mod error;
pub mod position;

pub use action::Action;
pub use agent::{AgentId, AgentPair};
pub use config::{
    goal_row, start_position, EngineConfig, AGENT0_GOAL_ROW, AGENT1_GOAL_ROW, BOARD_SIZE,
    DEFAULT_MAX_WALLS,
};
pub use error::StepError;
pub use position::Pos;
