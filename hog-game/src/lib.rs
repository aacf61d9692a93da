//! Hog Game Engine
//!
//! Rules, game loop and Monte Carlo strategy evaluation for Hog, the
//! two-player dice game played to 100 points.
//!
//! ## Rules
//!
//! - **Pig Out**: any roll of 1 makes the whole turn score 1.
//! - **Free Bacon**: rolling zero dice scores one more than the larger digit
//!   of the opponent's score.
//! - **Hog Wild**: when both scores sum to a multiple of 7 the active player
//!   rolls four-sided dice.
//! - **Swine Swap**: when one score is exactly double the other after a turn,
//!   the scores are exchanged.
//!
//! This crate has no I/O. Dice and strategies are capabilities supplied by
//! the caller, which keeps every game reproducible under [`TestDice`] or a
//! seeded [`DiceSet`].

pub mod averaged;
pub mod config;
pub mod constants;
pub mod dice;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use averaged::{make_averaged, make_averaged_fallible};
pub use config::{HogConfig, StrategyConfig};
pub use constants::{DEFAULT_SAMPLE_COUNT, GOAL_SCORE, MAX_ROLLS};
pub use dice::{
    Die, DiceSet, DieKind, RandomDie, SeededDie, TestDice, derive_stream_seed, four_sided,
    six_sided,
};
pub use error::{HogConfigError, HogError};
pub use evaluation::{
    MaxScoringReport, RollAverage, WinRate, average_win_rate, evaluate_win_rate,
    max_scoring_num_rolls,
};
pub use game::{GameRecord, Player, TurnRecord, other, play, play_traced, winner};
pub use rules::{free_bacon, is_swine_swap, roll_dice, select_dice, take_turn, take_turn_with_goal};
pub use strategy::{
    AlwaysRoll, BaconStrategy, FinalStrategy, Strategy, StrategyKind, SwapStrategy, always_roll,
};
