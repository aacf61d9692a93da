//! Error types for rule and configuration violations.

use thiserror::Error;

/// Precondition violations raised by the rules and the evaluation harness.
///
/// None of these are recoverable locally; callers propagate them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HogError {
    #[error("must roll at least once")]
    NonPositiveRolls,
    #[error("cannot roll more than {max} dice (got {num_rolls})")]
    TooManyRolls { num_rolls: u32, max: u32 },
    #[error("the game should be over: opponent score {opponent_score} reached goal {goal}")]
    GameOver { opponent_score: u32, goal: u32 },
    #[error("averaging needs at least one sample")]
    NoSamples,
    #[error("test dice need at least one outcome")]
    EmptyTestDice,
    #[error("a die needs at least one side (got {sides})")]
    InvalidDieSides { sides: u32 },
    #[error("unknown strategy `{name}`")]
    UnknownStrategy { name: String },
}

/// Errors raised when a [`crate::HogConfig`] violates its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HogConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u32,
        value: u32,
    },
    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for HogConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
