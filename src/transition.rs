//! State transition strategies.

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::TransitionMode;
use crate::types::{Action, Position};

/// Fixed point whose neighbourhood redirects the agent.
pub const HAZARD_CENTER: Position = Position { x: 0.0, y: -1.0 };

/// Starting a step closer than this to [`HAZARD_CENTER`] triggers a teleport.
pub const HAZARD_RADIUS: f64 = 0.3;

/// Radius of the circle the agent is teleported onto.
pub const TELEPORT_RADIUS: f64 = 5.0;

/// Outcome of applying one action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Agent position after the step.
    pub next: Position,
    /// Whether the hazard overrode the action.
    pub redirected: bool,
}

/// Computes the next agent position under the given transition mode.
///
/// The action is never clipped. Under [`TransitionMode::HazardRedirect`] the
/// distance to [`HAZARD_CENTER`] is measured from `state` before the action is
/// applied.
pub fn apply<R: Rng>(
    mode: TransitionMode,
    state: Position,
    action: Action,
    rng: &mut R,
) -> Transition {
    match mode {
        TransitionMode::Plain => Transition {
            next: state + action,
            redirected: false,
        },
        TransitionMode::HazardRedirect => {
            if state.distance_to(&HAZARD_CENTER) < HAZARD_RADIUS {
                let angle = rng.gen::<f64>() * TAU;
                tracing::trace!(%state, angle, "hazard redirect");
                Transition {
                    next: Position::from_polar(TELEPORT_RADIUS, angle),
                    redirected: true,
                }
            } else {
                Transition {
                    next: state + action,
                    redirected: false,
                }
            }
        }
    }
}
