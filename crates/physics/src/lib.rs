#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart and Link-Chain Physics
//!
//! The mechanical half of the polechain simulator: a cart on a frictionless
//! 1-D track carrying a chain of N pendulum links, driven by a discrete
//! horizontal push.
//!
//! ## Key Components
//!
//! -   **Parameters:** [`ChainConfig`] is the deserializable description of the
//!     system and [`ParameterSet`] its validated, read-only form with the
//!     derived masses. See the [`params`] module.
//! -   **State:** [`StateVector`] holds `(x, x_dot, θ_1, θ_dot_1, …)`.
//! -   **Dynamics:** [`dynamics::accelerations`] evaluates the reduced
//!     single-pole equations of motion for a [`Push`].
//! -   **Integration:** [`Integrator`] advances the state by one fixed step.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{accelerations, ChainConfig, ParameterSet, Push, StateVector};
//!
//! let config = ChainConfig::default();
//! let params = ParameterSet::new(&config)?;
//! let mut state = StateVector::zeros(params.links());
//!
//! let acc = accelerations(&state, Push::Right, &params);
//! config.integrator.advance(&mut state, acc, params.time_step());
//! assert!(state.x_dot() > 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod params;
pub mod state;

pub use dynamics::{accelerations, Accelerations, Push, UnknownPush};
pub use error::PhysicsError;
pub use integrator::Integrator;
pub use params::{ChainConfig, ParameterSet};
pub use state::StateVector;
