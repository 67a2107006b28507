//! # State Integration
//!
//! Fixed-step integration of the cart and link chain from the accelerations
//! produced by [`crate::dynamics::accelerations`].

use serde::{Deserialize, Serialize};

use crate::dynamics::Accelerations;
use crate::state::StateVector;

/// Integration scheme used to advance the state by one time step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Explicit Euler: positions advance with the old velocities, then the
    /// velocities advance. Every link is integrated and every link receives
    /// the shared angular acceleration.
    #[default]
    Euler,
    /// Semi-implicit (symplectic) Euler: velocities first, then positions from
    /// the new velocities. Only the cart and link 1 are advanced; links 2..N
    /// keep their previous angle and angular velocity for the step.
    SemiImplicitEuler,
}

impl Integrator {
    /// Advances `state` in place by `dt` seconds.
    pub fn advance(self, state: &mut StateVector, acc: Accelerations, dt: f64) {
        match self {
            Integrator::Euler => explicit_euler(state, acc, dt),
            Integrator::SemiImplicitEuler => semi_implicit_euler(state, acc, dt),
        }
    }
}

fn explicit_euler(state: &mut StateVector, acc: Accelerations, dt: f64) {
    let x = state.x();
    let x_dot = state.x_dot();
    state.set_x(x + dt * x_dot);
    state.set_x_dot(x_dot + dt * acc.x_acc);

    for link in 0..state.links() {
        let theta = state.theta(link);
        let theta_dot = state.theta_dot(link);
        state.set_theta(link, theta + dt * theta_dot);
        state.set_theta_dot(link, theta_dot + dt * acc.theta_acc);
    }
}

fn semi_implicit_euler(state: &mut StateVector, acc: Accelerations, dt: f64) {
    let x_dot = state.x_dot() + dt * acc.x_acc;
    state.set_x_dot(x_dot);
    state.set_x(state.x() + dt * x_dot);

    let theta_dot = state.theta_dot(0) + dt * acc.theta_acc;
    state.set_theta_dot(0, theta_dot);
    state.set_theta(0, state.theta(0) + dt * theta_dot);
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACC: Accelerations = Accelerations { x_acc: 2.0, theta_acc: -4.0 };

    fn sample() -> StateVector {
        StateVector::from_vec(vec![1.0, 0.5, 0.1, 0.2, -0.25, 0.5]).unwrap()
    }

    #[test]
    fn euler_moves_positions_with_old_velocities() {
        let mut state = sample();
        Integrator::Euler.advance(&mut state, ACC, 0.5);
        assert_eq!(state.as_slice(), &[1.25, 1.5, 0.2, -1.8, 0.0, -1.5]);
    }

    #[test]
    fn semi_implicit_euler_only_touches_cart_and_first_link() {
        let mut state = sample();
        Integrator::SemiImplicitEuler.advance(&mut state, ACC, 0.5);
        assert_eq!(state.as_slice(), &[1.75, 1.5, -0.8, -1.8, -0.25, 0.5]);
    }

    #[test]
    fn default_is_explicit_euler() {
        assert_eq!(Integrator::default(), Integrator::Euler);
        let parsed: Integrator = serde_json::from_str("\"semi_implicit_euler\"").unwrap();
        assert_eq!(parsed, Integrator::SemiImplicitEuler);
    }
}
