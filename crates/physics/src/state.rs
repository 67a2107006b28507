use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Mechanical state of the cart and its links.
///
/// Laid out as `[x, x_dot, θ_1, θ_dot_1, …, θ_N, θ_dot_N]`. Link indices used
/// by the accessors are zero-based, so link 1 is `theta(0)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StateVector {
    values: Vec<f64>,
}

impl StateVector {
    /// All-zero state for a chain of `links` links.
    ///
    /// # Panics
    ///
    /// Panics if `links` is zero.
    #[must_use]
    pub fn zeros(links: usize) -> Self {
        assert!(links >= 1, "a chain needs at least one link");
        Self { values: vec![0.0; Self::len_for(links)] }
    }

    /// State for `links` links whose `i`-th component is `f(i)`, filled in
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `links` is zero.
    #[must_use]
    pub fn from_fn(links: usize, f: impl FnMut(usize) -> f64) -> Self {
        assert!(links >= 1, "a chain needs at least one link");
        Self { values: (0..Self::len_for(links)).map(f).collect() }
    }

    /// Wraps raw values, checking that they describe at least one link.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::StateShape`] if the length is not `2 + 2N`
    /// for some `N >= 1`.
    pub fn from_vec(values: Vec<f64>) -> Result<Self, PhysicsError> {
        let len = values.len();
        if len < 4 || len % 2 != 0 {
            return Err(PhysicsError::StateShape { len });
        }
        Ok(Self { values })
    }

    /// Number of components needed for `links` links.
    #[must_use]
    pub const fn len_for(links: usize) -> usize {
        2 + 2 * links
    }

    #[must_use]
    pub fn links(&self) -> usize {
        (self.values.len() - 2) / 2
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a state built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.values[0]
    }

    #[must_use]
    pub fn x_dot(&self) -> f64 {
        self.values[1]
    }

    /// Angle of link `link` from vertical in radians.
    ///
    /// # Panics
    ///
    /// Panics if `link >= self.links()`.
    #[must_use]
    pub fn theta(&self, link: usize) -> f64 {
        self.values[2 + 2 * link]
    }

    /// Angular velocity of link `link`.
    ///
    /// # Panics
    ///
    /// Panics if `link >= self.links()`.
    #[must_use]
    pub fn theta_dot(&self, link: usize) -> f64 {
        self.values[3 + 2 * link]
    }

    pub(crate) fn set_x(&mut self, x: f64) {
        self.values[0] = x;
    }

    pub(crate) fn set_x_dot(&mut self, x_dot: f64) {
        self.values[1] = x_dot;
    }

    pub(crate) fn set_theta(&mut self, link: usize, theta: f64) {
        self.values[2 + 2 * link] = theta;
    }

    pub(crate) fn set_theta_dot(&mut self, link: usize, theta_dot: f64) {
        self.values[3 + 2 * link] = theta_dot;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }
}

impl TryFrom<Vec<f64>> for StateVector {
    type Error = PhysicsError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl From<StateVector> for Vec<f64> {
    fn from(state: StateVector) -> Self {
        state.values
    }
}
