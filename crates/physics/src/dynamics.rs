//! # Equations of Motion
//!
//! Closed-form cart-pole accelerations. The whole chain is treated as a single
//! equivalent pole: the aggregate link mass sits at the shared half-length and
//! only link 1's angle and angular velocity enter the equations. The result is
//! one angular acceleration that the integrator applies to every link.
//!
//! The arithmetic order below is part of the contract; reordering it changes
//! trajectories at the last bit.

use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;
use crate::state::StateVector;

/// Discrete horizontal push applied to the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Push {
    /// Wire value `0`.
    Left,
    /// Wire value `1`.
    Right,
}

impl Push {
    /// Both pushes in wire order.
    pub const ALL: [Push; 2] = [Push::Left, Push::Right];

    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn force_sign(self) -> f64 {
        match self {
            Push::Left => -1.0,
            Push::Right => 1.0,
        }
    }

    /// Discrete index of this push.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Push::Left => 0,
            Push::Right => 1,
        }
    }
}

/// Raw index that is not a valid [`Push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPush(pub u32);

impl TryFrom<u32> for Push {
    type Error = UnknownPush;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Push::Left),
            1 => Ok(Push::Right),
            other => Err(UnknownPush(other)),
        }
    }
}

/// Instantaneous accelerations produced by one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accelerations {
    /// Linear acceleration of the cart.
    pub x_acc: f64,
    /// Angular acceleration derived from link 1, shared by the whole chain.
    pub theta_acc: f64,
}

/// Evaluates the reduced cart-pole dynamics for `state` under `push`.
#[must_use]
pub fn accelerations(state: &StateVector, push: Push, params: &ParameterSet) -> Accelerations {
    let force = push.force_sign() * params.force_magnitude();
    let theta = state.theta(0);
    let theta_dot = state.theta_dot(0);
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();

    let total_mass = params.total_mass();
    let pole_mass_length = params.pole_mass_length();

    let temp = (force + pole_mass_length * (theta_dot * theta_dot) * sin_theta) / total_mass;
    let theta_acc = (params.gravity() * sin_theta - cos_theta * temp)
        / (params.link_half_length()
            * (4.0 / 3.0 - params.total_pole_mass() * (cos_theta * cos_theta) / total_mass));
    let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

    Accelerations { x_acc, theta_acc }
}
