use physics::StateVector;

use crate::error::EnvError;

/// Outcome of a single [`Env::step`].
///
/// The state is an owned snapshot; mutating it has no effect on the
/// environment that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: StateVector,
    pub reward: f64,
    pub done: bool,
}

/// Seeded, episodic environment stepped one discrete action at a time.
///
/// Starting states come from a reproducible random source controlled through
/// [`seed`]. [`step`] is fallible: it rejects actions outside the action space
/// and refuses to run before the first [`reset`], leaving the environment
/// unchanged in both cases.
///
/// [`seed`]: Env::seed
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Action accepted by [`Env::step`].
    type Action;

    /// Reseeds the environment's random source and returns the seed in use.
    /// `None` picks a fresh seed.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// Reset the environment to a fresh starting state and return it.
    fn reset(&mut self) -> StateVector;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Fails if the action is invalid or the environment was never reset.
    fn step(&mut self, action: Self::Action) -> Result<Transition, EnvError>;

    /// Release any resources held on behalf of the environment.
    fn close(&mut self) {}

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}
