//! Errors for generators that take user-supplied sizes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A gradient needs at least its two endpoints.
    #[error("gradient needs at least 2 steps, got {0}")]
    InvalidSteps(usize),

    /// A multi-stop gradient needs at least two stops.
    #[error("gradient needs at least 2 color stops, got {0}")]
    TooFewStops(usize),

    /// Unknown harmony / mode / sort key name.
    #[error("unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
