use physics::{PhysicsError, UnknownPush};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("action {0} is invalid: expected 0 (push left) or 1 (push right)")]
    InvalidAction(u32),
    #[error("step called before reset")]
    NotReset,
    #[error("{name} must be positive and finite (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("horizon must allow at least one step")]
    EmptyHorizon,
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("invalid environment config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<UnknownPush> for EnvError {
    fn from(UnknownPush(action): UnknownPush) -> Self {
        EnvError::InvalidAction(action)
    }
}
