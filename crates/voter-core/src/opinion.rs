//! Opinion State
//!
//! The per-agent opinion vector. Agents are identified by index and the
//! population never changes size after initialization.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{validate_agents, SimError, SimResult};

/// A binary opinion, serialized as -1 or +1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Opinion {
    Negative,
    Positive,
}

impl Opinion {
    /// Numeric value: -1 or +1
    pub fn value(self) -> i8 {
        match self {
            Opinion::Negative => -1,
            Opinion::Positive => 1,
        }
    }

    /// Draws an opinion uniformly from {-1, +1}.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Opinion::Positive
        } else {
            Opinion::Negative
        }
    }
}

impl From<Opinion> for i8 {
    fn from(opinion: Opinion) -> Self {
        opinion.value()
    }
}

impl TryFrom<i8> for Opinion {
    type Error = SimError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Opinion::Negative),
            1 => Ok(Opinion::Positive),
            other => Err(SimError::invalid(
                "opinion",
                format!("{} is not one of -1, +1", other),
            )),
        }
    }
}

impl std::fmt::Display for Opinion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opinion::Negative => write!(f, "-1"),
            Opinion::Positive => write!(f, "+1"),
        }
    }
}

/// Opinions of all agents, indexed by agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Opinion>", try_from = "Vec<Opinion>")]
pub struct OpinionState {
    opinions: Vec<Opinion>,
}

impl TryFrom<Vec<Opinion>> for OpinionState {
    type Error = SimError;

    fn try_from(opinions: Vec<Opinion>) -> Result<Self, Self::Error> {
        Self::from_values(opinions)
    }
}

impl From<OpinionState> for Vec<Opinion> {
    fn from(state: OpinionState) -> Self {
        state.opinions
    }
}

impl OpinionState {
    /// Draws `agents` independent uniform opinions.
    pub fn random<R: Rng + ?Sized>(agents: usize, rng: &mut R) -> SimResult<Self> {
        validate_agents(agents)?;
        let opinions = (0..agents).map(|_| Opinion::random(rng)).collect();
        Ok(Self { opinions })
    }

    /// Wraps an explicit opinion vector. The vector must not be empty.
    pub fn from_values(opinions: Vec<Opinion>) -> SimResult<Self> {
        validate_agents(opinions.len())?;
        Ok(Self { opinions })
    }

    /// Builds a state from raw -1/+1 values.
    pub fn from_raw(values: &[i8]) -> SimResult<Self> {
        let opinions = values
            .iter()
            .map(|&v| Opinion::try_from(v))
            .collect::<SimResult<Vec<_>>>()?;
        Self::from_values(opinions)
    }

    /// Every agent holds `opinion`.
    pub fn uniform(agents: usize, opinion: Opinion) -> SimResult<Self> {
        Self::from_values(vec![opinion; agents])
    }

    /// Number of agents
    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    /// Always false: a state holds at least one agent
    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }

    pub fn get(&self, agent: usize) -> Option<Opinion> {
        self.opinions.get(agent).copied()
    }

    pub fn as_slice(&self) -> &[Opinion] {
        &self.opinions
    }

    /// Raw -1/+1 values, in agent order
    pub fn to_raw(&self) -> Vec<i8> {
        self.opinions.iter().map(|o| o.value()).collect()
    }

    /// Overwrites one agent's opinion, returning the previous one.
    ///
    /// Panics if `agent` is out of range; callers index with sampled agents.
    pub(crate) fn set(&mut self, agent: usize, opinion: Opinion) -> Opinion {
        std::mem::replace(&mut self.opinions[agent], opinion)
    }

    /// Number of agents holding +1
    pub fn count_positive(&self) -> usize {
        self.opinions
            .iter()
            .filter(|&&o| o == Opinion::Positive)
            .count()
    }

    /// The shared opinion if every agent agrees
    pub fn consensus(&self) -> Option<Opinion> {
        let first = *self.opinions.first()?;
        self.opinions.iter().all(|&o| o == first).then_some(first)
    }

    pub fn is_consensus(&self) -> bool {
        self.consensus().is_some()
    }
}
