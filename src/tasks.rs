//! Goal set generation and lookup.

use std::f64::consts::PI;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::TaskSampling;
use crate::error::EnvError;
use crate::types::Position;

/// Hand-coded debugging goals, in tenths.
const FIXED_GOALS: [[f64; 2]; 8] = [
    [10.0, -10.0],
    [10.0, 10.0],
    [-10.0, 10.0],
    [-10.0, -10.0],
    [0.0, 0.0],
    [7.0, 2.0],
    [0.0, 4.0],
    [-6.0, 9.0],
];

const FIXED_GOAL_SCALE: f64 = 10.0;

/// Radius of the circle the half-circle goals lie on.
const HALF_CIRCLE_RADIUS: f64 = 1.0;

/// An ordered, immutable sequence of goal positions.
///
/// Built once when an environment is constructed; only the active index into
/// it changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSet {
    goals: Vec<Position>,
}

impl TaskSet {
    /// Generates a goal set with the given strategy.
    ///
    /// Randomized strategies draw from a generator seeded with `seed`, so the
    /// same arguments always produce the same goals in the same order. This
    /// holds within one `rand` release only: `StdRng`'s algorithm may change
    /// between versions, so pin `rand` if goal lists must stay stable.
    pub fn generate(sampling: TaskSampling, n_tasks: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        match sampling {
            TaskSampling::Fixed => Self::fixed(),
            TaskSampling::UniformSquare => Self::uniform_square(&mut rng, n_tasks),
            TaskSampling::HalfCircle => Self::half_circle(&mut rng, n_tasks),
        }
    }

    /// The eight hand-coded goals scaled into the unit square.
    pub fn fixed() -> Self {
        let goals = FIXED_GOALS
            .iter()
            .map(|[x, y]| Position::new(x / FIXED_GOAL_SCALE, y / FIXED_GOAL_SCALE))
            .collect();
        Self { goals }
    }

    /// `n_tasks` goals drawn uniformly from `[-1, 1)` per coordinate.
    pub fn uniform_square<R: Rng>(rng: &mut R, n_tasks: usize) -> Self {
        let goals = (0..n_tasks)
            .map(|_| Position::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        Self { goals }
    }

    /// `n_tasks` goals on the unit circle at equally spaced angles over
    /// `[0, π]` (both ends included), then shuffled.
    ///
    /// A single goal sits at angle 0, i.e. `(1, 0)`.
    pub fn half_circle<R: Rng>(rng: &mut R, n_tasks: usize) -> Self {
        let mut goals: Vec<Position> = (0..n_tasks)
            .map(|i| Position::from_polar(HALF_CIRCLE_RADIUS, linspace_angle(i, n_tasks)))
            .collect();
        goals.shuffle(rng);
        Self { goals }
    }

    /// Returns the goal at `index`.
    pub fn get(&self, index: usize) -> Result<Position, EnvError> {
        self.goals
            .get(index)
            .copied()
            .ok_or(EnvError::TaskIndexOutOfRange {
                index,
                len: self.goals.len(),
            })
    }

    /// All goals in index order.
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Range of valid task indices.
    pub fn indices(&self) -> Range<usize> {
        0..self.goals.len()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

/// Angle `i` of `n` evenly spaced samples over `[0, π]`.
fn linspace_angle(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else if i == n - 1 {
        PI
    } else {
        PI * i as f64 / (n - 1) as f64
    }
}
