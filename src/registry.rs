//! Named environment variants.
//!
//! Each variant is a preset combination of strategies from [`crate::config`]
//! with its own default constructor parameters. Harnesses look variants up by
//! name and may override `randomize_tasks`, `n_tasks`, `goal_radius` and
//! `lava_cost`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{
    EnvConfig, ObservationMode, ResetPolicy, RewardShaping, RngMode, TaskSampling,
    TransitionMode, DEFAULT_TASK_SEED,
};
use crate::environment::PointEnv;
use crate::error::EnvError;

/// Constructor parameters a harness may override.
///
/// `None` keeps the variant's default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VariantParams {
    pub randomize_tasks: Option<bool>,
    pub n_tasks: Option<usize>,
    pub goal_radius: Option<f64>,
    pub lava_cost: Option<f64>,
    /// Per-episode randomness; defaults to [`RngMode::Entropy`].
    pub rng: Option<RngMode>,
}

/// The registered point-robot variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EnvVariant {
    /// Dense reward, random start in the unit square.
    PointRobot,
    /// Sparse reward, half-circle goals.
    SparsePointRobot,
    /// Sparse reward with a noisy third observation channel.
    SparsePointRobotNoise,
    /// Sparse reward with the hazard redirect.
    SparsePointRobotRandom,
    /// Sparse reward with the hazard redirect and a lava penalty.
    SparseLavaPoint,
    /// Sparse info reward, bonus-overridden dense step reward.
    SparsePointRobotSub,
}

impl EnvVariant {
    /// All variants in registration order.
    pub const ALL: [EnvVariant; 6] = [
        EnvVariant::PointRobot,
        EnvVariant::SparsePointRobot,
        EnvVariant::SparsePointRobotNoise,
        EnvVariant::SparsePointRobotRandom,
        EnvVariant::SparseLavaPoint,
        EnvVariant::SparsePointRobotSub,
    ];

    /// Registry name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            EnvVariant::PointRobot => "point-robot",
            EnvVariant::SparsePointRobot => "sparse-point-robot",
            EnvVariant::SparsePointRobotNoise => "sparse-point-robot-noise",
            EnvVariant::SparsePointRobotRandom => "sparse-point-robot-random",
            EnvVariant::SparseLavaPoint => "sparse-lava-point",
            EnvVariant::SparsePointRobotSub => "sparse-point-robot-sub",
        }
    }

    /// Looks a variant up by registry name.
    pub fn from_name(name: &str) -> Result<Self, EnvError> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| EnvError::UnknownVariant(name.to_string()))
    }

    /// Whether goals are randomized unless overridden.
    pub fn default_randomize_tasks(&self) -> bool {
        matches!(
            self,
            EnvVariant::SparsePointRobotRandom | EnvVariant::SparseLavaPoint
        )
    }

    /// Requested goal count unless overridden.
    pub fn default_n_tasks(&self) -> usize {
        match self {
            EnvVariant::SparsePointRobot => 20_000,
            EnvVariant::SparseLavaPoint => 1,
            _ => 2,
        }
    }

    /// Goal radius unless overridden, `None` for the dense variant.
    pub fn default_goal_radius(&self) -> Option<f64> {
        match self {
            EnvVariant::PointRobot => None,
            EnvVariant::SparsePointRobot | EnvVariant::SparseLavaPoint => Some(0.2),
            _ => Some(0.3),
        }
    }

    /// Lava cost unless overridden, `None` for variants without lava.
    pub fn default_lava_cost(&self) -> Option<f64> {
        match self {
            EnvVariant::SparseLavaPoint => Some(5.0),
            _ => None,
        }
    }

    /// Goal sampler used when tasks are randomized.
    fn randomized_sampling(&self) -> TaskSampling {
        match self {
            EnvVariant::PointRobot => TaskSampling::UniformSquare,
            _ => TaskSampling::HalfCircle,
        }
    }

    /// Builds the environment configuration for this variant.
    ///
    /// Overrides that do not apply to the variant (a goal radius for the dense
    /// variant, a lava cost without lava) are ignored.
    pub fn config(&self, params: &VariantParams) -> EnvConfig {
        let randomize = params
            .randomize_tasks
            .unwrap_or_else(|| self.default_randomize_tasks());
        let task_sampling = if randomize {
            self.randomized_sampling()
        } else {
            TaskSampling::Fixed
        };
        let goal_radius = params
            .goal_radius
            .or_else(|| self.default_goal_radius())
            .unwrap_or_default();
        let lava_cost = params
            .lava_cost
            .or_else(|| self.default_lava_cost())
            .unwrap_or_default();

        let (transition, observation, reward) = match self {
            EnvVariant::PointRobot => (
                TransitionMode::Plain,
                ObservationMode::Plain,
                RewardShaping::Dense,
            ),
            EnvVariant::SparsePointRobot => (
                TransitionMode::Plain,
                ObservationMode::Plain,
                RewardShaping::Sparse { goal_radius },
            ),
            EnvVariant::SparsePointRobotNoise => (
                TransitionMode::Plain,
                ObservationMode::Noisy,
                RewardShaping::Sparse { goal_radius },
            ),
            EnvVariant::SparsePointRobotRandom => (
                TransitionMode::HazardRedirect,
                ObservationMode::Plain,
                RewardShaping::Sparse { goal_radius },
            ),
            EnvVariant::SparseLavaPoint => (
                TransitionMode::HazardRedirect,
                ObservationMode::Plain,
                RewardShaping::SparseLava {
                    goal_radius,
                    lava_cost,
                },
            ),
            EnvVariant::SparsePointRobotSub => (
                TransitionMode::Plain,
                ObservationMode::Plain,
                RewardShaping::SparseSecondaryBonus { goal_radius },
            ),
        };
        let reset = match self {
            EnvVariant::PointRobot => ResetPolicy::UniformSquare,
            _ => ResetPolicy::Origin,
        };

        EnvConfig {
            task_sampling,
            n_tasks: params.n_tasks.unwrap_or_else(|| self.default_n_tasks()),
            task_seed: DEFAULT_TASK_SEED,
            transition,
            observation,
            reset,
            reward,
            rng: params.rng.unwrap_or(RngMode::Entropy),
        }
    }

    /// Builds a ready environment for this variant.
    pub fn make(&self, params: &VariantParams) -> Result<PointEnv, EnvError> {
        tracing::debug!(variant = self.name(), ?params, "building environment");
        PointEnv::new(self.config(params))
    }
}

impl fmt::Display for EnvVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnvVariant {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Builds the environment registered under `name`.
pub fn make_env(name: &str, params: &VariantParams) -> Result<PointEnv, EnvError> {
    EnvVariant::from_name(name)?.make(params)
}

/// Registry names of all variants.
pub fn registered_names() -> Vec<&'static str> {
    EnvVariant::ALL.iter().map(EnvVariant::name).collect()
}
