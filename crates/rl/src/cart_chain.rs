//! Cart with a chain of pendulum links, as a discrete-action environment.
//!
//! This module ties the [`physics`] crate together with the episode policy and
//! the seeded reset generator. One [`ChainCartPole`] owns its parameters,
//! state and counters; separate instances never share anything.

use physics::{accelerations, Integrator, ParameterSet, Push, StateVector};

use crate::config::EnvConfig;
use crate::env::{Env, Transition};
use crate::episode::EpisodePolicy;
use crate::error::EnvError;
use crate::reset::ResetGenerator;

/// Advisory per-component bounds of the observation.
///
/// Positions and angles are bounded at twice their failure thresholds so a
/// failing state still lies inside; velocities are bounded by `f64::MAX`.
/// Nothing is ever clamped to these bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationBounds {
    pub low: Vec<f64>,
    pub high: Vec<f64>,
}

impl ObservationBounds {
    fn new(links: usize, x_threshold: f64, theta_threshold: f64) -> Self {
        let high = StateVector::from_fn(links, |i| match i {
            0 => 2.0 * x_threshold,
            i if i % 2 == 0 => 2.0 * theta_threshold,
            _ => f64::MAX,
        })
        .to_vec();
        let low = high.iter().map(|v| -v).collect();
        Self { low, high }
    }

    /// True if `state` has the right shape and every component is in bounds.
    #[must_use]
    pub fn contains(&self, state: &StateVector) -> bool {
        state.len() == self.high.len()
            && state
                .as_slice()
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}

/// Cart-pole with N links driven by two discrete pushes.
///
/// Call [`Env::reset`] (or [`ChainCartPole::reset_with_state`]) before the
/// first step. After an episode ends further steps keep working but return a
/// reward of zero and log a warning on the first such call.
#[derive(Debug)]
pub struct ChainCartPole {
    params: ParameterSet,
    integrator: Integrator,
    policy: EpisodePolicy,
    resets: ResetGenerator,
    state: Option<StateVector>,
}

impl ChainCartPole {
    /// Number of discrete actions.
    pub const ACTIONS: usize = 2;

    /// Builds an environment from `config`, seeded from entropy.
    ///
    /// # Errors
    ///
    /// Fails on any invalid physical parameter or threshold, before a single
    /// step can run.
    pub fn new(config: &EnvConfig) -> Result<Self, EnvError> {
        let params = ParameterSet::new(&config.physics)?;
        let policy = EpisodePolicy::new(config.x_threshold, config.theta_threshold_radians)?;
        let resets = ResetGenerator::from_entropy();
        tracing::debug!(
            links = params.links(),
            integrator = ?config.physics.integrator,
            seed = resets.current_seed(),
            "chain cart-pole created"
        );
        Ok(Self {
            params,
            integrator: config.physics.integrator,
            policy,
            resets,
            state: None,
        })
    }

    /// Builds an environment and seeds it in one go.
    ///
    /// # Errors
    ///
    /// Same as [`ChainCartPole::new`].
    pub fn with_seed(config: &EnvConfig, seed: u64) -> Result<Self, EnvError> {
        let mut env = Self::new(config)?;
        env.seed(Some(seed));
        Ok(env)
    }

    /// Starts an episode from a caller-chosen state instead of a random one.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Physics`] if `state` describes a different number
    /// of links than the environment simulates.
    pub fn reset_with_state(&mut self, state: StateVector) -> Result<StateVector, EnvError> {
        if state.links() != self.params.links() {
            return Err(physics::PhysicsError::LinkMismatch {
                expected: self.params.links(),
                got: state.links(),
            }
            .into());
        }
        self.policy.reset();
        self.state = Some(state.clone());
        Ok(state)
    }

    /// Applies `push` for one time step.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotReset`] if no episode has been started.
    pub fn step_push(&mut self, push: Push) -> Result<Transition, EnvError> {
        let state = self.state.as_mut().ok_or(EnvError::NotReset)?;
        let acc = accelerations(state, push, &self.params);
        self.integrator.advance(state, acc, self.params.time_step());

        let outcome = self.policy.evaluate(state);
        tracing::trace!(?push, x = state.x(), theta = state.theta(0), done = outcome.done, "step");
        Ok(Transition {
            state: state.clone(),
            reward: outcome.reward,
            done: outcome.done,
        })
    }

    /// Current state, if an episode has been started.
    #[must_use]
    pub fn state(&self) -> Option<&StateVector> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[must_use]
    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    #[must_use]
    pub fn steps_beyond_done(&self) -> Option<u32> {
        self.policy.steps_beyond_done()
    }

    #[must_use]
    pub fn observation_bounds(&self) -> ObservationBounds {
        ObservationBounds::new(
            self.params.links(),
            self.policy.x_threshold(),
            self.policy.theta_threshold(),
        )
    }
}

impl Env for ChainCartPole {
    /// `0` pushes left, `1` pushes right.
    type Action = u32;

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.resets.seed(seed)
    }

    fn reset(&mut self) -> StateVector {
        let state = self.resets.sample(self.params.links());
        self.policy.reset();
        tracing::debug!(x = state.x(), theta = state.theta(0), "reset");
        self.state = Some(state.clone());
        state
    }

    fn step(&mut self, action: u32) -> Result<Transition, EnvError> {
        let push = Push::try_from(action)?;
        self.step_push(push)
    }

    fn obs_size(&self) -> usize {
        StateVector::len_for(self.params.links())
    }

    fn action_size(&self) -> usize {
        Self::ACTIONS
    }
}
