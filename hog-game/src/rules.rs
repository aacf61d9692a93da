//! Turn rules: Pig Out, Free Bacon and Hog Wild.

use crate::constants::{GOAL_SCORE, HOG_WILD_MODULUS, MAX_ROLLS, PIG_OUT_FACE};
use crate::dice::{Die, DieKind};
use crate::error::HogError;

/// Roll `die` exactly `num_rolls` times.
///
/// Returns the sum of the outcomes, or 1 if any outcome was 1 (Pig Out).
/// Every roll happens even after a Pig Out.
///
/// # Errors
///
/// Returns [`HogError::NonPositiveRolls`] when `num_rolls` is zero.
pub fn roll_dice<D: Die + ?Sized>(num_rolls: u32, die: &D) -> Result<u32, HogError> {
    if num_rolls == 0 {
        return Err(HogError::NonPositiveRolls);
    }
    let mut total = 0u32;
    let mut pigged_out = false;
    for _ in 0..num_rolls {
        let outcome = die.roll();
        pigged_out |= outcome == PIG_OUT_FACE;
        total = total.saturating_add(outcome);
    }
    Ok(if pigged_out { PIG_OUT_FACE } else { total })
}

/// Points awarded for rolling zero dice: one more than the larger digit of
/// the opponent's score.
#[must_use]
pub const fn free_bacon(opponent_score: u32) -> u32 {
    let tens = opponent_score / 10;
    let ones = opponent_score % 10;
    1 + if tens > ones { tens } else { ones }
}

/// Resolve one turn against the standard goal.
///
/// # Errors
///
/// See [`take_turn_with_goal`].
pub fn take_turn<D: Die + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    die: &D,
) -> Result<u32, HogError> {
    take_turn_with_goal(num_rolls, opponent_score, die, GOAL_SCORE)
}

/// Resolve one turn: Free Bacon for zero dice, otherwise [`roll_dice`].
///
/// # Errors
///
/// Returns [`HogError::TooManyRolls`] for more than ten dice and
/// [`HogError::GameOver`] when the opponent already reached `goal`.
pub fn take_turn_with_goal<D: Die + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    die: &D,
    goal: u32,
) -> Result<u32, HogError> {
    if num_rolls > MAX_ROLLS {
        return Err(HogError::TooManyRolls {
            num_rolls,
            max: MAX_ROLLS,
        });
    }
    if opponent_score >= goal {
        return Err(HogError::GameOver {
            opponent_score,
            goal,
        });
    }
    if num_rolls == 0 {
        return Ok(free_bacon(opponent_score));
    }
    roll_dice(num_rolls, die)
}

/// Hog Wild: the four-sided die when the combined score is a multiple of 7.
#[must_use]
pub const fn select_dice(score: u32, opponent_score: u32) -> DieKind {
    if (score + opponent_score) % HOG_WILD_MODULUS == 0 {
        DieKind::FourSided
    } else {
        DieKind::SixSided
    }
}

/// Swine Swap applies when either score is exactly double the other.
#[must_use]
pub const fn is_swine_swap(score0: u32, score1: u32) -> bool {
    score0 == 2 * score1 || 2 * score0 == score1
}
