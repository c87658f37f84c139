//! Policy trait for the point-robot environments.

use crate::types::{Action, Position};

/// A policy that maps an observation to a displacement action.
///
/// Policies are expected to keep actions within
/// [`ACTION_LOW`](crate::types::ACTION_LOW)..=[`ACTION_HIGH`](crate::types::ACTION_HIGH)
/// per component; the environment does not enforce it.
pub trait Policy: Send {
    /// Selects an action given the current observation.
    fn select_action(&mut self, observation: &[f64]) -> Action;

    /// Called when the evaluator switches to a new task.
    ///
    /// Goal-agnostic policies ignore it.
    fn begin_task(&mut self, _goal: Position) {}

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
