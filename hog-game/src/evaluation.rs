//! Strategy evaluation built on the averaging harness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::averaged::make_averaged_fallible;
use crate::constants::MAX_ROLLS;
use crate::dice::{Die, DiceSet};
use crate::error::HogError;
use crate::game::winner;
use crate::rules::roll_dice;
use crate::strategy::Strategy;

/// Averaged turn score for one dice count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollAverage {
    pub num_rolls: u32,
    pub average: f64,
}

/// Averaged turn scores for 1 through 10 dice and the best count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxScoringReport {
    pub averages: Vec<RollAverage>,
    pub best: u32,
}

impl fmt::Display for MaxScoringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.averages {
            writeln!(
                f,
                "{} dice scores {:?} on average",
                entry.num_rolls, entry.average
            )?;
        }
        Ok(())
    }
}

/// Find the dice count (1 to 10) with the highest average turn score.
///
/// Ties keep the smaller count.
///
/// # Errors
///
/// Returns [`HogError::NoSamples`] when `num_samples` is zero.
pub fn max_scoring_num_rolls<D: Die + ?Sized>(
    die: &D,
    num_samples: u32,
) -> Result<MaxScoringReport, HogError> {
    let mut averaged = make_averaged_fallible(|n: u32| roll_dice(n, die), num_samples)?;
    let mut averages = Vec::with_capacity(usize::try_from(MAX_ROLLS).unwrap_or_default());
    let mut best: Option<RollAverage> = None;

    for num_rolls in 1..=MAX_ROLLS {
        let average = averaged(num_rolls)?;
        log::debug!("{num_rolls} dice scores {average:?} on average");
        let entry = RollAverage { num_rolls, average };
        if best.is_none_or(|current| average > current.average) {
            best = Some(entry);
        }
        averages.push(entry);
    }

    Ok(MaxScoringReport {
        averages,
        best: best.map_or(1, |entry| entry.num_rolls),
    })
}

/// Win rates of a strategy from both seats against a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    pub as_player_zero: f64,
    pub as_player_one: f64,
}

impl WinRate {
    /// Mean of the two seat estimates.
    #[must_use]
    pub fn overall(self) -> f64 {
        (self.as_player_zero + self.as_player_one) / 2.0
    }
}

/// Estimate how often `strategy` beats `baseline`, playing each seat
/// `num_samples` times.
///
/// A tie counts against whichever strategy sits in seat 0.
///
/// # Errors
///
/// Returns [`HogError::NoSamples`] for zero samples, or any rule error
/// raised while playing.
pub fn evaluate_win_rate<A, B, F, S>(
    strategy: &A,
    baseline: &B,
    dice: &DiceSet<F, S>,
    goal: u32,
    num_samples: u32,
) -> Result<WinRate, HogError>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    let mut strategy_first = make_averaged_fallible(
        |()| winner(strategy, baseline, dice, goal).map(|who| who.index()),
        num_samples,
    )?;
    let as_player_zero = 1.0 - strategy_first(())?;

    let mut baseline_first = make_averaged_fallible(
        |()| winner(baseline, strategy, dice, goal).map(|who| who.index()),
        num_samples,
    )?;
    let as_player_one = baseline_first(())?;

    let rate = WinRate {
        as_player_zero,
        as_player_one,
    };
    log::debug!(
        "win rate {:.4} (seat 0 {as_player_zero:.4}, seat 1 {as_player_one:.4})",
        rate.overall()
    );
    Ok(rate)
}

/// Average win rate (0 to 1) of `strategy` against `baseline`.
///
/// # Errors
///
/// See [`evaluate_win_rate`].
pub fn average_win_rate<A, B, F, S>(
    strategy: &A,
    baseline: &B,
    dice: &DiceSet<F, S>,
    goal: u32,
    num_samples: u32,
) -> Result<f64, HogError>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    evaluate_win_rate(strategy, baseline, dice, goal, num_samples).map(WinRate::overall)
}
