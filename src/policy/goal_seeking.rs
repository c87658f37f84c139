//! Oracle baseline that walks straight at a known goal.

use super::trait_::Policy;
use crate::observation::ObservationBuilder;
use crate::types::{Action, Position};

/// Steps toward the goal it was last told about, clipped to the action bounds.
///
/// Reads the agent position from the first two observation channels, so it
/// works with plain and noisy observations alike. Serves as an upper-bound
/// baseline for the goal-reaching tasks.
pub struct GoalSeekingPolicy {
    goal: Position,
}

impl GoalSeekingPolicy {
    /// Creates a policy heading for `goal`.
    pub fn new(goal: Position) -> Self {
        Self { goal }
    }

    /// The goal currently targeted.
    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl Policy for GoalSeekingPolicy {
    fn select_action(&mut self, observation: &[f64]) -> Action {
        match ObservationBuilder::position(observation) {
            Some(p) => Action::new(self.goal.x - p.x, self.goal.y - p.y).clipped(),
            None => Action::zero(),
        }
    }

    fn begin_task(&mut self, goal: Position) {
        self.goal = goal;
    }

    fn name(&self) -> &str {
        "goal-seeking"
    }
}
