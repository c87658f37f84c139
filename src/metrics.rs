//! Evaluation metrics for the point-robot environments.
//!
//! Runs fixed-length episodes, cycling through the task set, and aggregates
//! per-episode returns and final distances.

use std::fmt;

use crate::environment::PointEnv;
use crate::error::EnvError;
use crate::policy::Policy;

/// Success radius used when the environment has no goal radius.
pub const DENSE_SUCCESS_RADIUS: f64 = 0.1;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Mean sum of step rewards per episode.
    pub mean_return: f64,
    /// Mean sum of sparse rewards per episode (step reward when no sparse
    /// channel exists).
    pub mean_sparse_return: f64,
    /// Mean distance to goal after the last step.
    pub mean_final_distance: f64,
    /// Fraction of episodes ending within the success radius.
    pub success_rate: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
    /// Steps per episode.
    pub horizon: usize,
}

/// Per-episode statistics.
#[derive(Debug, Default)]
struct EpisodeStats {
    episode_return: f64,
    sparse_return: f64,
    final_distance: f64,
}

impl EvaluationMetrics {
    /// Evaluates a policy over `n_episodes` episodes of `horizon` steps.
    ///
    /// Episode `i` runs on task `i % n_tasks`. The environment is left on the
    /// last evaluated task.
    ///
    /// # Errors
    ///
    /// Propagates [`EnvError`] from task resets.
    pub fn evaluate(
        env: &mut PointEnv,
        policy: &mut dyn Policy,
        n_episodes: usize,
        horizon: usize,
    ) -> Result<Self, EnvError> {
        let success_radius = env
            .config()
            .reward
            .goal_radius()
            .unwrap_or(DENSE_SUCCESS_RADIUS);
        let n_tasks = env.n_tasks();
        let mut all_stats = Vec::with_capacity(n_episodes);

        for episode in 0..n_episodes {
            let mut obs = env.reset_task(episode % n_tasks)?;
            policy.begin_task(env.goal());
            let mut stats = EpisodeStats::default();

            for _ in 0..horizon {
                let action = policy.select_action(&obs);
                let result = env.step(action);
                stats.episode_return += result.reward;
                stats.sparse_return += result.info.sparse_reward.unwrap_or(result.reward);
                obs = result.observation;
            }
            stats.final_distance = env.state().distance_to(&env.goal());
            all_stats.push(stats);
        }
        tracing::debug!(policy = policy.name(), n_episodes, horizon, "evaluation done");

        let n = n_episodes.max(1) as f64;
        let mean = |f: fn(&EpisodeStats) -> f64| all_stats.iter().map(f).sum::<f64>() / n;
        let successes = all_stats
            .iter()
            .filter(|s| s.final_distance <= success_radius)
            .count();

        Ok(Self {
            mean_return: mean(|s| s.episode_return),
            mean_sparse_return: mean(|s| s.sparse_return),
            mean_final_distance: mean(|s| s.final_distance),
            success_rate: successes as f64 / n,
            n_episodes,
            horizon,
        })
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes x {} steps) ===",
            self.n_episodes, self.horizon
        )?;
        writeln!(f, "  Mean return:          {:.3}", self.mean_return)?;
        writeln!(f, "  Mean sparse return:   {:.3}", self.mean_sparse_return)?;
        writeln!(f, "  Mean final distance:  {:.3}", self.mean_final_distance)?;
        writeln!(f, "  Success rate:         {:.1}%", self.success_rate * 100.0)
    }
}
