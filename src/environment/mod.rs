//! Point-robot environment.
//!
//! A point agent moves on the plane by additive displacements and is rewarded
//! for approaching the active goal. Task sampling, transition, observation and
//! reward shaping are chosen independently through [`EnvConfig`].

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{EnvConfig, ResetPolicy, RngMode};
use crate::error::EnvError;
use crate::observation::ObservationBuilder;
use crate::reward::RewardComputer;
use crate::tasks::TaskSet;
use crate::transition;
use crate::types::{Action, Observation, Position};

#[cfg(test)]
mod tests;

/// Auxiliary per-step diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepInfo {
    /// Sparse reward, present under every sparse shaping.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sparse_reward: Option<f64>,
}

impl StepInfo {
    /// Key under which the sparse reward is reported.
    pub const SPARSE_REWARD_KEY: &'static str = "sparse_reward";

    /// Looks up an info entry by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            Self::SPARSE_REWARD_KEY => self.sparse_reward,
            _ => None,
        }
    }

    /// Returns true if no entries are set.
    pub fn is_empty(&self) -> bool {
        self.sparse_reward.is_none()
    }
}

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Observation after the step.
    pub observation: Observation,
    /// Reward returned to the learner.
    pub reward: f64,
    /// Always `false`; episode length is controlled by the caller.
    pub done: bool,
    /// Auxiliary diagnostics.
    pub info: StepInfo,
}

/// A point-robot goal-reaching environment.
///
/// # Lifecycle
///
/// 1. Call [`PointEnv::new`]; it builds the task set and resets to task 0.
/// 2. Call [`PointEnv::reset_task`] to switch goals, or [`PointEnv::reset`]
///    to start a new episode on the current goal.
/// 3. Repeatedly call [`PointEnv::step`]. The environment never terminates
///    an episode on its own.
#[derive(Debug)]
pub struct PointEnv {
    config: EnvConfig,
    tasks: TaskSet,
    task_index: usize,
    goal: Position,
    state: Position,
    rng: StdRng,
}

impl PointEnv {
    /// Creates a new environment and resets it onto task 0.
    ///
    /// # Errors
    ///
    /// * [`EnvError::InvalidConfig`] if reward parameters are invalid
    /// * [`EnvError::EmptyTaskSet`] if the sampler produced no goals
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        let tasks = TaskSet::generate(config.task_sampling, config.n_tasks, config.task_seed);
        if tasks.is_empty() {
            return Err(EnvError::EmptyTaskSet);
        }
        let rng = match config.rng {
            RngMode::Seeded(seed) => StdRng::seed_from_u64(seed),
            RngMode::Entropy => StdRng::from_entropy(),
        };
        tracing::debug!(
            sampling = ?config.task_sampling,
            n_tasks = tasks.len(),
            reward = ?config.reward,
            "point env created"
        );

        let goal = tasks.get(0)?;
        let mut env = Self {
            config,
            tasks,
            task_index: 0,
            goal,
            state: Position::origin(),
            rng,
        };
        env.reset_task(0)?;
        Ok(env)
    }

    /// Selects goal `idx` and starts a new episode on it.
    ///
    /// # Errors
    ///
    /// [`EnvError::TaskIndexOutOfRange`] if `idx` is not a valid task index.
    /// The current goal is kept in that case.
    pub fn reset_task(&mut self, idx: usize) -> Result<Observation, EnvError> {
        self.goal = self.tasks.get(idx)?;
        self.task_index = idx;
        tracing::debug!(task = idx, goal = %self.goal, "task reset");
        Ok(self.reset())
    }

    /// Starts a new episode on the current goal and returns the first
    /// observation.
    pub fn reset(&mut self) -> Observation {
        self.state = match self.config.reset {
            ResetPolicy::UniformSquare => Position::new(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
            ),
            ResetPolicy::Origin => Position::origin(),
        };
        self.observe()
    }

    /// Applies `action` and returns the resulting observation and reward.
    ///
    /// Actions are not validated; non-finite input propagates into state and
    /// reward.
    pub fn step(&mut self, action: Action) -> StepResult {
        let outcome = transition::apply(self.config.transition, self.state, action, &mut self.rng);
        self.state = outcome.next;

        let dense = RewardComputer::dense(self.state, self.goal);
        let observation = self.observe();
        let shaped = RewardComputer::shape(self.config.reward, dense, self.state, &observation);

        StepResult {
            observation,
            reward: shaped.reward,
            done: false,
            info: StepInfo {
                sparse_reward: shaped.sparse,
            },
        }
    }

    /// Range of valid task indices.
    pub fn get_all_task_idx(&self) -> Range<usize> {
        self.tasks.indices()
    }

    /// Masks a dense reward by the goal radius.
    ///
    /// Identity under [`crate::config::RewardShaping::Dense`].
    pub fn sparsify_rewards(&self, reward: f64) -> f64 {
        match self.config.reward.goal_radius() {
            Some(goal_radius) => RewardComputer::sparsify(reward, goal_radius),
            None => reward,
        }
    }

    /// Places the agent at `position` without starting a new episode.
    pub fn set_state(&mut self, position: Position) {
        self.state = position;
    }

    /// Current agent position.
    pub fn state(&self) -> Position {
        self.state
    }

    /// Active goal.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Index of the active goal.
    pub fn task_index(&self) -> usize {
        self.task_index
    }

    /// All goals in index order.
    pub fn goals(&self) -> &[Position] {
        self.tasks.goals()
    }

    /// Number of goals in the task set.
    pub fn n_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Length of the observation vector.
    pub fn observation_dim(&self) -> usize {
        self.config.observation_dim()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    fn observe(&mut self) -> Observation {
        ObservationBuilder::build(self.config.observation, self.state, &mut self.rng)
    }
}
