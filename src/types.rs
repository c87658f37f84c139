//! Core geometric types for the point-robot environments.
//!
//! Defines the agent/goal position on the plane and the displacement action
//! applied at every step.

use std::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound per action component expected from policies.
///
/// The environment itself never clips actions.
pub const ACTION_LOW: f64 = -0.1;

/// Upper bound per action component expected from policies.
pub const ACTION_HIGH: f64 = 0.1;

/// Flat observation vector returned by the environment.
pub type Observation = Vec<f64>;

/// A 2D position on the unbounded plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin position (0, 0).
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from the origin in direction `angle` (radians).
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        self.distance_to(&Position::origin())
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add<Action> for Position {
    type Output = Position;

    fn add(self, action: Action) -> Position {
        Position::new(self.x + action.dx, self.y + action.dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A displacement applied to the agent position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    pub dx: f64,
    pub dy: f64,
}

impl Action {
    /// Creates a new action.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The zero displacement.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns a copy with each component clamped to `[ACTION_LOW, ACTION_HIGH]`.
    pub fn clipped(self) -> Self {
        Self {
            dx: self.dx.clamp(ACTION_LOW, ACTION_HIGH),
            dy: self.dy.clamp(ACTION_LOW, ACTION_HIGH),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:+.3}, {:+.3}]", self.dx, self.dy)
    }
}
