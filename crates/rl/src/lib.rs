#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Chain Cart-Pole Environment
//!
//! A Gym-style environment around the [`physics`] crate: a cart carrying N
//! pendulum links, two discrete pushes, a reward of one per surviving step and
//! a deterministic seeded reset.
//!
//! ```rust
//! use rl::{ChainCartPole, Env, EnvConfig};
//!
//! let mut env = ChainCartPole::with_seed(&EnvConfig::default(), 0)?;
//! let start = env.reset();
//! assert_eq!(start.len(), 10);
//!
//! let step = env.step(1)?; // push right
//! assert_eq!(step.reward, 1.0);
//! assert!(env.step(2).is_err());
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod cart_chain;
pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod reset;
pub mod time_limit;

pub use cart_chain::{ChainCartPole, ObservationBounds};
pub use config::EnvConfig;
pub use env::{Env, Transition};
pub use episode::{EpisodePolicy, Outcome};
pub use error::EnvError;
pub use reset::{ResetGenerator, RESET_SPREAD};
pub use time_limit::TimeLimit;
