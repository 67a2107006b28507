//! # Physical Parameters
//!
//! [`ChainConfig`] is the plain, deserializable description of a cart carrying
//! a chain of pendulum links. [`ParameterSet`] is the validated, read-only form
//! the dynamics consume, together with the derived mass quantities.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::integrator::Integrator;

/// User-facing physical configuration of the cart and its link chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Cart mass in kg
    pub cart_mass: f64,
    /// Mass of each link in kg, link 1 first
    pub link_masses: Vec<f64>,
    /// Half the length of a link in meters (shared by every link)
    pub link_half_length: f64,
    /// Magnitude of the horizontal push in newtons
    pub force_magnitude: f64,
    /// Seconds between state updates
    pub time_step: f64,
    /// Integration scheme used to advance the state
    pub integrator: Integrator,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            link_masses: vec![0.1; 4],
            link_half_length: 0.5,
            force_magnitude: 10.0,
            time_step: 0.02,
            integrator: Integrator::default(),
        }
    }
}

impl ChainConfig {
    /// Same constants with `links` links, each weighing as much as link 1.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::NoLinks`] when `links` is zero or the current
    /// configuration has no link to copy the mass from.
    pub fn with_links(mut self, links: usize) -> Result<Self, PhysicsError> {
        let mass = *self.link_masses.first().ok_or(PhysicsError::NoLinks)?;
        if links == 0 {
            return Err(PhysicsError::NoLinks);
        }
        self.link_masses = vec![mass; links];
        Ok(self)
    }
}

/// Validated physical constants and the quantities derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSet {
    gravity: f64,
    cart_mass: f64,
    link_masses: Vec<f64>,
    link_half_length: f64,
    force_magnitude: f64,
    time_step: f64,
    total_pole_mass: f64,
    total_mass: f64,
    pole_mass_length: f64,
}

impl ParameterSet {
    /// Validates `config` and computes the derived masses.
    ///
    /// # Errors
    ///
    /// Fails if the chain has no links, if any mass, the half-length or the
    /// time step is not strictly positive, or if any value is not finite.
    pub fn new(config: &ChainConfig) -> Result<Self, PhysicsError> {
        if config.link_masses.is_empty() {
            return Err(PhysicsError::NoLinks);
        }
        finite("gravity", config.gravity)?;
        positive("cart mass", config.cart_mass)?;
        for &mass in &config.link_masses {
            positive("link mass", mass)?;
        }
        positive("link half-length", config.link_half_length)?;
        positive("time step", config.time_step)?;
        finite("force magnitude", config.force_magnitude)?;
        if config.force_magnitude < 0.0 {
            return Err(PhysicsError::NonPositive {
                quantity: "force magnitude",
                value: config.force_magnitude,
            });
        }

        let total_pole_mass: f64 = config.link_masses.iter().sum();
        let total_mass = total_pole_mass + config.cart_mass;
        let pole_mass_length = total_pole_mass * config.link_half_length;

        Ok(Self {
            gravity: config.gravity,
            cart_mass: config.cart_mass,
            link_masses: config.link_masses.clone(),
            link_half_length: config.link_half_length,
            force_magnitude: config.force_magnitude,
            time_step: config.time_step,
            total_pole_mass,
            total_mass,
            pole_mass_length,
        })
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    #[must_use]
    pub fn cart_mass(&self) -> f64 {
        self.cart_mass
    }

    #[must_use]
    pub fn link_masses(&self) -> &[f64] {
        &self.link_masses
    }

    /// Number of links in the chain, always at least one.
    #[must_use]
    pub fn links(&self) -> usize {
        self.link_masses.len()
    }

    #[must_use]
    pub fn link_half_length(&self) -> f64 {
        self.link_half_length
    }

    #[must_use]
    pub fn force_magnitude(&self) -> f64 {
        self.force_magnitude
    }

    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Sum of every link mass.
    #[must_use]
    pub fn total_pole_mass(&self) -> f64 {
        self.total_pole_mass
    }

    /// Cart plus chain.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Aggregate chain mass times the link half-length.
    #[must_use]
    pub fn pole_mass_length(&self) -> f64 {
        self.pole_mass_length
    }
}

fn finite(quantity: &'static str, value: f64) -> Result<(), PhysicsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::NonFinite { quantity, value })
    }
}

fn positive(quantity: &'static str, value: f64) -> Result<(), PhysicsError> {
    finite(quantity, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::NonPositive { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_derives_aggregate_masses() {
        let params = ParameterSet::new(&ChainConfig::default()).unwrap();
        assert_eq!(params.links(), 4);
        assert!((params.total_pole_mass() - 0.4).abs() < 1e-15);
        assert!((params.total_mass() - 1.4).abs() < 1e-15);
        assert!((params.pole_mass_length() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn rejects_empty_chain() {
        let config = ChainConfig { link_masses: Vec::new(), ..Default::default() };
        assert_eq!(ParameterSet::new(&config), Err(PhysicsError::NoLinks));
    }

    #[test]
    fn rejects_zero_link_mass() {
        let config = ChainConfig { link_masses: vec![0.1, 0.0], ..Default::default() };
        assert!(matches!(
            ParameterSet::new(&config),
            Err(PhysicsError::NonPositive { quantity: "link mass", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_time_step() {
        let config = ChainConfig { time_step: f64::NAN, ..Default::default() };
        assert!(matches!(
            ParameterSet::new(&config),
            Err(PhysicsError::NonFinite { quantity: "time step", .. })
        ));
    }

    #[test]
    fn with_links_copies_first_mass() {
        let config = ChainConfig { link_masses: vec![0.3, 0.1], ..Default::default() }
            .with_links(3)
            .unwrap();
        assert_eq!(config.link_masses, vec![0.3, 0.3, 0.3]);
        assert!(ChainConfig::default().with_links(0).is_err());
    }
}
