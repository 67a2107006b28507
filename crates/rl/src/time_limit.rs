use physics::StateVector;

use crate::env::{Env, Transition};
use crate::error::EnvError;

/// Ends episodes after a fixed number of steps.
///
/// The wrapped environment knows nothing about horizons; this counter sits on
/// top and forces `done` once `max_episode_steps` steps have been taken since
/// the last reset. [`TimeLimit::truncated`] tells a horizon cut apart from a
/// real failure.
#[derive(Debug)]
pub struct TimeLimit<E> {
    inner: E,
    max_episode_steps: u32,
    elapsed: u32,
    truncated: bool,
}

impl<E: Env> TimeLimit<E> {
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyHorizon`] when `max_episode_steps` is zero.
    pub fn new(inner: E, max_episode_steps: u32) -> Result<Self, EnvError> {
        if max_episode_steps == 0 {
            return Err(EnvError::EmptyHorizon);
        }
        Ok(Self { inner, max_episode_steps, elapsed: 0, truncated: false })
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn max_episode_steps(&self) -> u32 {
        self.max_episode_steps
    }

    /// True if the last step hit the horizon while the inner episode was
    /// still running.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Action = E::Action;

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.inner.seed(seed)
    }

    fn reset(&mut self) -> StateVector {
        self.elapsed = 0;
        self.truncated = false;
        self.inner.reset()
    }

    fn step(&mut self, action: Self::Action) -> Result<Transition, EnvError> {
        let mut transition = self.inner.step(action)?;
        self.elapsed = self.elapsed.saturating_add(1);
        self.truncated = !transition.done && self.elapsed >= self.max_episode_steps;
        if self.truncated {
            tracing::debug!(steps = self.elapsed, "episode truncated at horizon");
            transition.done = true;
        }
        Ok(transition)
    }

    fn close(&mut self) {
        self.inner.close();
    }

    fn obs_size(&self) -> usize {
        self.inner.obs_size()
    }

    fn action_size(&self) -> usize {
        self.inner.action_size()
    }
}
