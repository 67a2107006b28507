use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("a pendulum chain needs at least one link")]
    NoLinks,
    #[error("{quantity} must be strictly positive (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} must be finite (got {value})")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("state vector of length {len} is not of the form 2 + 2N with N >= 1")]
    StateShape { len: usize },
    #[error("state vector describes {got} links but the chain has {expected}")]
    LinkMismatch { expected: usize, got: usize },
}
