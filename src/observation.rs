//! Observation encoding.
//!
//! Plain observations are the agent position `[x, y]`. Noisy observations
//! append a third channel whose value depends on where the agent stands.

use rand::Rng;

use crate::config::ObservationMode;
use crate::transition::HAZARD_CENTER;
use crate::types::{Observation, Position};

/// Positions farther than this from [`HAZARD_CENTER`] receive noise.
pub const NOISE_RADIUS: f64 = 0.3;

/// Noise is uniform in `[0, NOISE_SCALE)`.
pub const NOISE_SCALE: f64 = 4.0;

/// Builds observation vectors for the agent.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Builds the observation for `state`.
    ///
    /// ```text
    /// Plain: [x, y]
    /// Noisy: [x, y, noise]
    /// ```
    pub fn build<R: Rng>(mode: ObservationMode, state: Position, rng: &mut R) -> Observation {
        match mode {
            ObservationMode::Plain => vec![state.x, state.y],
            ObservationMode::Noisy => vec![state.x, state.y, Self::noise(state, rng)],
        }
    }

    /// Noise channel value: uniform in `[0, NOISE_SCALE)` away from the
    /// hazard point, exactly zero within [`NOISE_RADIUS`] of it.
    pub fn noise<R: Rng>(state: Position, rng: &mut R) -> f64 {
        if state.distance_to(&HAZARD_CENTER) > NOISE_RADIUS {
            rng.gen::<f64>() * NOISE_SCALE
        } else {
            0.0
        }
    }

    /// Reads the agent position back out of an observation.
    pub fn position(observation: &[f64]) -> Option<Position> {
        match observation {
            [x, y, ..] => Some(Position::new(*x, *y)),
            _ => None,
        }
    }
}
