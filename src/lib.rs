//! point_robot - 2D point-robot goal-reaching environments
//!
//! A family of meta-reinforcement-learning task environments in which a
//! point agent moves on the plane and is rewarded for reaching one goal from
//! a fixed or randomized task set. Variants differ only in task sampling,
//! transition, observation and reward shaping, composed through
//! [`config::EnvConfig`] and exposed by name through [`registry`].

pub mod config;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod registry;
pub mod reward;
pub mod tasks;
pub mod transition;
pub mod types;

pub use config::{
    EnvConfig, ObservationMode, ResetPolicy, RewardShaping, RngMode, TaskSampling, TransitionMode,
};
pub use environment::{PointEnv, StepInfo, StepResult};
pub use error::EnvError;
pub use metrics::EvaluationMetrics;
pub use policy::{GoalSeekingPolicy, Policy, RandomPolicy};
pub use registry::{make_env, EnvVariant, VariantParams};
pub use tasks::TaskSet;
pub use types::{Action, Observation, Position, ACTION_HIGH, ACTION_LOW};
