//! Configuration for the point-robot environments.
//!
//! An environment is assembled from independent strategy choices (task
//! sampling, transition, observation, reward shaping, reset) rather than from
//! a fixed set of hard-coded variants. Registry presets live in
//! [`crate::registry`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// Seed used for randomized task generation unless overridden.
pub const DEFAULT_TASK_SEED: u64 = 1337;

/// How the goal set is generated at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TaskSampling {
    /// The eight hand-coded debugging goals. Ignores `n_tasks`.
    Fixed,
    /// `n_tasks` goals uniform over `[-1, 1]^2`.
    UniformSquare,
    /// `n_tasks` goals equally spaced over the upper unit half-circle, shuffled.
    HalfCircle,
}

/// How an action moves the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionMode {
    /// `next = state + action`.
    Plain,
    /// Teleports the agent onto a far circle when it starts the step near the
    /// hazard point, otherwise behaves like [`TransitionMode::Plain`].
    HazardRedirect,
}

/// What the agent observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObservationMode {
    /// `[x, y]`.
    Plain,
    /// `[x, y, noise]` with a position-dependent noise channel.
    Noisy,
}

/// How the dense distance reward is reshaped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardShaping {
    /// Negative distance to goal.
    Dense,
    /// Masked outside the goal radius, +1 inside.
    Sparse { goal_radius: f64 },
    /// [`RewardShaping::Sparse`] minus `lava_cost` inside the lava box.
    SparseLava { goal_radius: f64, lava_cost: f64 },
    /// [`RewardShaping::Sparse`] plus a proximity bonus near the hazard point.
    /// Returns the bonus-overridden dense channel as the step reward.
    SparseSecondaryBonus { goal_radius: f64 },
}

impl RewardShaping {
    /// Goal radius of sparse shapings, `None` for [`RewardShaping::Dense`].
    pub fn goal_radius(&self) -> Option<f64> {
        match *self {
            RewardShaping::Dense => None,
            RewardShaping::Sparse { goal_radius }
            | RewardShaping::SparseLava { goal_radius, .. }
            | RewardShaping::SparseSecondaryBonus { goal_radius } => Some(goal_radius),
        }
    }

    /// Returns true if the step info carries a sparse reward.
    pub fn is_sparse(&self) -> bool {
        !matches!(self, RewardShaping::Dense)
    }
}

/// Where the agent starts every episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResetPolicy {
    /// Uniform over `[-1, 1]^2`.
    UniformSquare,
    /// Always `(0, 0)`.
    Origin,
}

/// Source of per-episode randomness (reset position, noise, teleport angle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RngMode {
    /// Reproducible stream from a fixed seed.
    Seeded(u64),
    /// Fresh OS entropy; differs run to run.
    Entropy,
}

/// Configuration for a point-robot environment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    // --- Tasks ---
    /// Goal generation strategy.
    pub task_sampling: TaskSampling,
    /// Requested number of goals (ignored by [`TaskSampling::Fixed`]).
    pub n_tasks: usize,
    /// Seed for randomized goal generation.
    pub task_seed: u64,

    // --- Dynamics and sensing ---
    pub transition: TransitionMode,
    pub observation: ObservationMode,
    pub reset: ResetPolicy,

    // --- Reward ---
    pub reward: RewardShaping,

    // --- Randomness ---
    pub rng: RngMode,
}

impl EnvConfig {
    /// Observation vector length produced under this configuration.
    pub fn observation_dim(&self) -> usize {
        match self.observation {
            ObservationMode::Plain => 2,
            ObservationMode::Noisy => 3,
        }
    }

    /// Checks reward parameters for finiteness and sign.
    pub fn validate(&self) -> Result<(), EnvError> {
        if let Some(goal_radius) = self.reward.goal_radius() {
            if !goal_radius.is_finite() || goal_radius < 0.0 {
                return Err(EnvError::InvalidConfig(format!(
                    "goal_radius must be finite and non-negative, got {goal_radius}"
                )));
            }
        }
        if let RewardShaping::SparseLava { lava_cost, .. } = self.reward {
            if !lava_cost.is_finite() || lava_cost < 0.0 {
                return Err(EnvError::InvalidConfig(format!(
                    "lava_cost must be finite and non-negative, got {lava_cost}"
                )));
            }
        }
        Ok(())
    }

    /// Returns a copy using a reproducible per-episode generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RngMode::Seeded(seed);
        self
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            task_sampling: TaskSampling::Fixed,
            n_tasks: 2,
            task_seed: DEFAULT_TASK_SEED,
            transition: TransitionMode::Plain,
            observation: ObservationMode::Plain,
            reset: ResetPolicy::UniformSquare,
            reward: RewardShaping::Dense,
            rng: RngMode::Entropy,
        }
    }
}
