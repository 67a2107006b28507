//! # Episode Policy
//!
//! Decides termination and reward after each integration step and tracks how
//! many steps have been taken past the end of the episode.

use physics::StateVector;

use crate::error::EnvError;

/// Reward and termination for one post-integration state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub reward: f64,
    pub done: bool,
}

/// Termination band and post-terminal bookkeeping for one environment.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodePolicy {
    x_threshold: f64,
    theta_threshold: f64,
    steps_beyond_done: Option<u32>,
}

impl EpisodePolicy {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidThreshold`] unless both thresholds are
    /// positive and finite.
    pub fn new(x_threshold: f64, theta_threshold: f64) -> Result<Self, EnvError> {
        check_threshold("x_threshold", x_threshold)?;
        check_threshold("theta_threshold_radians", theta_threshold)?;
        Ok(Self { x_threshold, theta_threshold, steps_beyond_done: None })
    }

    #[must_use]
    pub fn x_threshold(&self) -> f64 {
        self.x_threshold
    }

    #[must_use]
    pub fn theta_threshold(&self) -> f64 {
        self.theta_threshold
    }

    /// `None` until the episode ends, then the number of calls made past the
    /// terminal step.
    #[must_use]
    pub fn steps_beyond_done(&self) -> Option<u32> {
        self.steps_beyond_done
    }

    /// True when the cart or link 1 lies strictly outside its band. Links
    /// 2..N never end an episode.
    #[must_use]
    pub fn is_failure(&self, state: &StateVector) -> bool {
        let x = state.x();
        let theta = state.theta(0);
        x < -self.x_threshold
            || x > self.x_threshold
            || theta < -self.theta_threshold
            || theta > self.theta_threshold
    }

    /// Scores `state` and advances the post-terminal counter.
    ///
    /// Once an episode has ended it stays ended until [`reset`], even if the
    /// state drifts back inside the band.
    ///
    /// [`reset`]: EpisodePolicy::reset
    pub fn evaluate(&mut self, state: &StateVector) -> Outcome {
        let done = self.steps_beyond_done.is_some() || self.is_failure(state);
        if !done {
            return Outcome { reward: 1.0, done };
        }
        match self.steps_beyond_done {
            None => {
                self.steps_beyond_done = Some(0);
                tracing::debug!(x = state.x(), theta = state.theta(0), "episode terminated");
                Outcome { reward: 1.0, done }
            }
            Some(beyond) => {
                if beyond == 0 {
                    tracing::warn!(
                        "step() called after the episode returned done = true; \
                         call reset() first, further steps are undefined behavior"
                    );
                }
                self.steps_beyond_done = Some(beyond.saturating_add(1));
                Outcome { reward: 0.0, done }
            }
        }
    }

    pub fn reset(&mut self) {
        self.steps_beyond_done = None;
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), EnvError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EnvError::InvalidThreshold { name, value })
    }
}
