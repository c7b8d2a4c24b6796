//! Agent identification and per-agent data storage.
//!
//! ## AgentId
//!
//! Type-safe agent identifier. Puoribor is a two-agent game, so only
//! ids 0 and 1 are meaningful; `Engine::step` rejects anything else
//! with `StepError::InvalidAgent`.
//!
//! ## AgentPair
//!
//! Fixed two-slot per-agent storage, indexable by `AgentId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Agent identifier (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is one of the two valid agent ids.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 <= 1
    }

    /// The other agent.
    ///
    /// Only meaningful for valid ids; callers validate first.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Both agent ids, in order.
    #[must_use]
    pub const fn both() -> [AgentId; 2] {
        [AgentId(0), AgentId(1)]
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per agent.
///
/// ## Example
///
/// ```
/// use puoribor::core::{AgentId, AgentPair};
///
/// let mut walls = AgentPair::with_value(10u8);
/// walls[AgentId::new(1)] -= 1;
///
/// assert_eq!(walls[AgentId::new(0)], 10);
/// assert_eq!(walls[AgentId::new(1)], 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentPair<T> {
    data: [T; 2],
}

impl<T> AgentPair<T> {
    /// Create a pair from both agents' values, in agent order.
    pub const fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to an agent's data.
    #[must_use]
    pub fn get(&self, agent: AgentId) -> &T {
        &self.data[agent.index()]
    }

    /// Get a mutable reference to an agent's data.
    pub fn get_mut(&mut self, agent: AgentId) -> &mut T {
        &mut self.data[agent.index()]
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }
}

impl<T> Index<AgentId> for AgentPair<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        self.get(agent)
    }
}

impl<T> IndexMut<AgentId> for AgentPair<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        self.get_mut(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_basics() {
        let a0 = AgentId::new(0);
        let a1 = AgentId::new(1);

        assert_eq!(a0.index(), 0);
        assert_eq!(a1.index(), 1);
        assert!(a0.is_valid());
        assert!(a1.is_valid());
        assert!(!AgentId::new(2).is_valid());
        assert_eq!(format!("{}", a0), "Agent 0");
    }

    #[test]
    fn test_agent_id_opponent() {
        assert_eq!(AgentId::new(0).opponent(), AgentId::new(1));
        assert_eq!(AgentId::new(1).opponent(), AgentId::new(0));
    }

    #[test]
    fn test_agent_pair_indexing() {
        let mut pair = AgentPair::new(3u8, 7u8);

        assert_eq!(pair[AgentId::new(0)], 3);
        assert_eq!(pair[AgentId::new(1)], 7);

        pair[AgentId::new(0)] = 1;
        assert_eq!(pair[AgentId::new(0)], 1);
    }

    #[test]
    fn test_agent_pair_iter() {
        let pair = AgentPair::with_value(5i32);

        let entries: Vec<_> = pair.iter().collect();
        assert_eq!(entries, vec![(AgentId::new(0), &5), (AgentId::new(1), &5)]);
    }

    #[test]
    fn test_agent_pair_serialization() {
        let pair = AgentPair::new(10u8, 8u8);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: AgentPair<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
