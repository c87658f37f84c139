//! Dense distance reward and its sparse reshapings.
//!
//! Every variant starts from the dense reward `-‖state - goal‖`. Sparse
//! shapings mask it outside the goal radius, add a success bonus inside, and
//! optionally layer a lava penalty or a secondary proximity bonus on top.

use crate::config::RewardShaping;
use crate::transition::HAZARD_CENTER;
use crate::types::Position;

/// Added to the sparse reward when the agent is within the goal radius.
pub const GOAL_BONUS: f64 = 1.0;

/// Secondary bonus applies closer than this to [`HAZARD_CENTER`].
pub const SECONDARY_BONUS_RADIUS: f64 = 0.5;

/// Secondary bonus is `SECONDARY_BONUS_OFFSET - distance`.
pub const SECONDARY_BONUS_OFFSET: f64 = 0.8;

/// Axis-aligned region of observation space that costs reward to enter.
///
/// Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LavaBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl LavaBox {
    /// The strip `x ∈ [-0.1, 0.1]`, `y ≥ 0.1` in front of the half-circle goals.
    pub const STANDARD: LavaBox = LavaBox {
        x_min: -0.1,
        x_max: 0.1,
        y_min: 0.1,
        y_max: f64::INFINITY,
    };

    /// Returns true if the first two observation channels fall in the box.
    pub fn contains(&self, observation: &[f64]) -> bool {
        match observation {
            [x, y, ..] => {
                (self.x_min..=self.x_max).contains(x) && (self.y_min..=self.y_max).contains(y)
            }
            _ => false,
        }
    }
}

/// Rewards produced for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedReward {
    /// Reward returned to the learner.
    pub reward: f64,
    /// Raw negative distance to goal.
    pub dense: f64,
    /// Sparse reward reported through the step info, if the shaping has one.
    pub sparse: Option<f64>,
}

/// Computes rewards for the point-robot environments.
pub struct RewardComputer;

impl RewardComputer {
    /// Negative Euclidean distance from `state` to `goal`. Always `≤ 0`.
    pub fn dense(state: Position, goal: Position) -> f64 {
        -state.distance_to(&goal)
    }

    /// Returns true if a dense reward lies within the goal radius.
    pub fn within_goal(dense: f64, goal_radius: f64) -> bool {
        dense >= -goal_radius
    }

    /// Zeroes rewards outside the goal radius; in-range values pass through.
    ///
    /// This is a mask, not a clamp: `-0.25` stays `-0.25` for a radius of
    /// `0.3`, while `-0.5` becomes `0`.
    pub fn sparsify(dense: f64, goal_radius: f64) -> f64 {
        if Self::within_goal(dense, goal_radius) {
            dense
        } else {
            0.0
        }
    }

    /// Sparsified reward shifted by [`GOAL_BONUS`] inside the goal radius.
    pub fn sparse_with_bonus(dense: f64, goal_radius: f64) -> f64 {
        let sparse = Self::sparsify(dense, goal_radius);
        if Self::within_goal(dense, goal_radius) {
            sparse + GOAL_BONUS
        } else {
            sparse
        }
    }

    /// Applies a shaping to the dense reward of one step.
    ///
    /// # Arguments
    ///
    /// * `shaping` - Reward shaping strategy
    /// * `dense` - Negative distance from the post-step state to the goal
    /// * `state` - Post-step agent position
    /// * `observation` - Post-step observation (checked against the lava box)
    pub fn shape(
        shaping: RewardShaping,
        dense: f64,
        state: Position,
        observation: &[f64],
    ) -> ShapedReward {
        match shaping {
            RewardShaping::Dense => ShapedReward {
                reward: dense,
                dense,
                sparse: None,
            },
            RewardShaping::Sparse { goal_radius } => {
                let sparse = Self::sparse_with_bonus(dense, goal_radius);
                ShapedReward {
                    reward: sparse,
                    dense,
                    sparse: Some(sparse),
                }
            }
            RewardShaping::SparseLava {
                goal_radius,
                lava_cost,
            } => {
                let mut sparse = Self::sparse_with_bonus(dense, goal_radius);
                if LavaBox::STANDARD.contains(observation) {
                    tracing::trace!(%state, lava_cost, "lava penalty");
                    sparse -= lava_cost;
                }
                ShapedReward {
                    reward: sparse,
                    dense,
                    sparse: Some(sparse),
                }
            }
            RewardShaping::SparseSecondaryBonus { goal_radius } => {
                let mut sparse = Self::sparse_with_bonus(dense, goal_radius);
                let mut reward = dense;
                if Self::within_goal(dense, goal_radius) {
                    reward += GOAL_BONUS;
                }
                let dist = state.distance_to(&HAZARD_CENTER);
                if dist < SECONDARY_BONUS_RADIUS {
                    let bonus = SECONDARY_BONUS_OFFSET - dist;
                    sparse += bonus;
                    reward = bonus;
                }
                ShapedReward {
                    reward,
                    dense,
                    sparse: Some(sparse),
                }
            }
        }
    }
}
