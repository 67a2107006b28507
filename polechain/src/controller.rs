//! Built-in controllers used by the driver to pick a push each step.

use physics::{Push, StateVector};

/// Gain on link 1's angular velocity in the lean controller.
const RATE_GAIN: f64 = 0.5;

#[derive(Debug)]
pub enum Controller {
    /// Uniformly random pushes from a dedicated seeded generator.
    Random(fastrand::Rng),
    /// Pushes the cart toward the side link 1 is falling to.
    Lean,
}

impl Controller {
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Controller::Random(fastrand::Rng::with_seed(seed))
    }

    pub fn act(&mut self, state: &StateVector) -> Push {
        match self {
            Controller::Random(rng) => {
                if rng.bool() {
                    Push::Right
                } else {
                    Push::Left
                }
            }
            Controller::Lean => {
                if state.theta(0) + RATE_GAIN * state.theta_dot(0) > 0.0 {
                    Push::Right
                } else {
                    Push::Left
                }
            }
        }
    }
}
