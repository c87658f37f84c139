//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::config::RngMode;
use crate::types::{Action, ACTION_HIGH, ACTION_LOW};

/// Uniformly random displacement within the action bounds.
///
/// Used for sanity checks and as a lower-bound baseline.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy.
    pub fn new(rng: RngMode) -> Self {
        let rng = match rng {
            RngMode::Seeded(seed) => StdRng::seed_from_u64(seed),
            RngMode::Entropy => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f64]) -> Action {
        Action::new(
            self.rng.gen_range(ACTION_LOW..=ACTION_HIGH),
            self.rng.gen_range(ACTION_LOW..=ACTION_HIGH),
        )
    }

    fn name(&self) -> &str {
        "random"
    }
}
