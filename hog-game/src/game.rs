//! The two-player game loop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DiceSet, DieKind};
use crate::error::HogError;
use crate::rules::{is_swine_swap, select_dice, take_turn_with_goal};
use crate::strategy::Strategy;

/// Seat at the table. Player 0 moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// The player who moves after `who`.
#[must_use]
pub const fn other(who: Player) -> Player {
    who.other()
}

/// One resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player: Player,
    pub num_rolls: u32,
    pub die: DieKind,
    pub points: u32,
    pub swapped: bool,
    /// Scores after the turn (and any swap), Player 0 first.
    pub scores: (u32, u32),
}

/// Full history of a traced game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub goal: u32,
    pub final_scores: (u32, u32),
    pub turns: Vec<TurnRecord>,
}

impl GameRecord {
    /// Player with the strictly higher score; ties go to Player 1.
    #[must_use]
    pub const fn winner(&self) -> Player {
        if self.final_scores.0 > self.final_scores.1 {
            Player::Zero
        } else {
            Player::One
        }
    }
}

/// Simulate a game and return the final scores, Player 0 first.
///
/// The goal check happens before each turn, so the turn that crosses the
/// goal still applies its Swine Swap. A swap may therefore leave the score
/// that reached the goal with the other player.
///
/// # Errors
///
/// Propagates [`HogError`] when a strategy asks for more than ten dice.
pub fn play<P0, P1, F, S>(
    strategy0: &P0,
    strategy1: &P1,
    dice: &DiceSet<F, S>,
    goal: u32,
) -> Result<(u32, u32), HogError>
where
    P0: Strategy + ?Sized,
    P1: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    run_game(strategy0, strategy1, dice, goal, |_| {})
}

/// Like [`play`], recording every turn.
///
/// # Errors
///
/// See [`play`].
pub fn play_traced<P0, P1, F, S>(
    strategy0: &P0,
    strategy1: &P1,
    dice: &DiceSet<F, S>,
    goal: u32,
) -> Result<GameRecord, HogError>
where
    P0: Strategy + ?Sized,
    P1: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    let mut turns = Vec::new();
    let final_scores = run_game(strategy0, strategy1, dice, goal, |record| {
        turns.push(record);
    })?;
    Ok(GameRecord {
        goal,
        final_scores,
        turns,
    })
}

/// [`Player::Zero`] if `strategy0` finishes strictly ahead, [`Player::One`] otherwise.
///
/// # Errors
///
/// See [`play`].
pub fn winner<P0, P1, F, S>(
    strategy0: &P0,
    strategy1: &P1,
    dice: &DiceSet<F, S>,
    goal: u32,
) -> Result<Player, HogError>
where
    P0: Strategy + ?Sized,
    P1: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    let (score0, score1) = play(strategy0, strategy1, dice, goal)?;
    Ok(if score0 > score1 {
        Player::Zero
    } else {
        Player::One
    })
}

fn run_game<P0, P1, F, S>(
    strategy0: &P0,
    strategy1: &P1,
    dice: &DiceSet<F, S>,
    goal: u32,
    mut on_turn: impl FnMut(TurnRecord),
) -> Result<(u32, u32), HogError>
where
    P0: Strategy + ?Sized,
    P1: Strategy + ?Sized,
    F: Die,
    S: Die,
{
    let mut who = Player::Zero;
    let mut scores = [0u32; 2];
    let mut turn = 0u32;

    while scores[0] < goal && scores[1] < goal {
        let own = scores[who.index()];
        let opponent = scores[who.other().index()];
        let num_rolls = match who {
            Player::Zero => strategy0.num_rolls(own, opponent),
            Player::One => strategy1.num_rolls(own, opponent),
        };
        let die = select_dice(own, opponent);
        let points = take_turn_with_goal(num_rolls, opponent, dice.get(die), goal)?;
        scores[who.index()] += points;

        let swapped = is_swine_swap(scores[0], scores[1]);
        if swapped {
            scores.swap(0, 1);
        }

        log::trace!(
            "turn {turn}: {who} rolled {num_rolls} {die} for {points}{} -> {}-{}",
            if swapped { " (swine swap)" } else { "" },
            scores[0],
            scores[1]
        );
        on_turn(TurnRecord {
            turn,
            player: who,
            num_rolls,
            die,
            points,
            swapped,
            scores: (scores[0], scores[1]),
        });

        who = other(who);
        turn += 1;
    }

    log::debug!(
        "game over after {turn} turns: {}-{} (goal {goal})",
        scores[0],
        scores[1]
    );
    Ok((scores[0], scores[1]))
}
