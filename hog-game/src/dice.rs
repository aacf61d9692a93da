//! Dice capabilities.
//!
//! A die is anything that produces an outcome when rolled. Dice are handles:
//! cloning a [`RandomDie`] or [`TestDice`] shares the underlying stream, so a
//! clone handed to the game loop advances the same sequence the caller sees.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use hmac::{Hmac, Mac};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::constants::{
    FOUR_SIDES, SIX_SIDES, STREAM_FOUR_SIDED, STREAM_SIX_SIDED,
};
use crate::error::HogError;

/// Zero-argument source of die outcomes.
pub trait Die {
    /// Roll once and return the face shown.
    fn roll(&self) -> u32;
}

impl<F> Die for F
where
    F: Fn() -> u32,
{
    fn roll(&self) -> u32 {
        self()
    }
}

/// Which die the active player must use this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DieKind {
    FourSided,
    SixSided,
}

impl DieKind {
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            Self::FourSided => FOUR_SIDES,
            Self::SixSided => SIX_SIDES,
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Fair die drawing uniformly from `1..=sides`.
#[derive(Debug, Clone)]
pub struct RandomDie<R> {
    sides: u32,
    rng: Rc<RefCell<R>>,
}

impl<R: RngCore> RandomDie<R> {
    /// Create a die with the given number of sides.
    ///
    /// # Errors
    ///
    /// Returns [`HogError::InvalidDieSides`] when `sides` is zero.
    pub fn new(sides: u32, rng: R) -> Result<Self, HogError> {
        if sides == 0 {
            return Err(HogError::InvalidDieSides { sides });
        }
        Ok(Self {
            sides,
            rng: Rc::new(RefCell::new(rng)),
        })
    }

    #[must_use]
    pub const fn sides(&self) -> u32 {
        self.sides
    }
}

impl<R: RngCore> Die for RandomDie<R> {
    fn roll(&self) -> u32 {
        self.rng.borrow_mut().gen_range(1..=self.sides)
    }
}

/// Die backed by the crate's default seeded generator.
pub type SeededDie = RandomDie<ChaCha20Rng>;

/// Standard four-sided die.
#[must_use]
pub fn four_sided<R: RngCore>(rng: R) -> RandomDie<R> {
    RandomDie {
        sides: FOUR_SIDES,
        rng: Rc::new(RefCell::new(rng)),
    }
}

/// Standard six-sided die.
#[must_use]
pub fn six_sided<R: RngCore>(rng: R) -> RandomDie<R> {
    RandomDie {
        sides: SIX_SIDES,
        rng: Rc::new(RefCell::new(rng)),
    }
}

/// Deterministic die cycling through a fixed outcome sequence.
///
/// `TestDice::new(&[3, 1, 5, 6])` rolls 3, 1, 5, 6, 3, 1, ... forever.
#[derive(Debug, Clone)]
pub struct TestDice {
    outcomes: Rc<[u32]>,
    rolls: Rc<Cell<u64>>,
}

impl TestDice {
    /// # Errors
    ///
    /// Returns [`HogError::EmptyTestDice`] when no outcomes are supplied.
    pub fn new(outcomes: &[u32]) -> Result<Self, HogError> {
        if outcomes.is_empty() {
            return Err(HogError::EmptyTestDice);
        }
        Ok(Self {
            outcomes: Rc::from(outcomes),
            rolls: Rc::new(Cell::new(0)),
        })
    }

    /// Number of times this die (or any clone of it) has been rolled.
    #[must_use]
    pub fn rolls(&self) -> u64 {
        self.rolls.get()
    }
}

impl Die for TestDice {
    fn roll(&self) -> u32 {
        let count = self.rolls.get();
        self.rolls.set(count.saturating_add(1));
        let len = u64::try_from(self.outcomes.len()).unwrap_or(u64::MAX);
        let idx = usize::try_from(count % len).unwrap_or(0);
        self.outcomes[idx]
    }
}

/// The pair of dice a game draws from, one per [`DieKind`].
#[derive(Debug, Clone)]
pub struct DiceSet<F, S> {
    four_sided: F,
    six_sided: S,
}

impl<F: Die, S: Die> DiceSet<F, S> {
    pub const fn new(four_sided: F, six_sided: S) -> Self {
        Self {
            four_sided,
            six_sided,
        }
    }

    /// The die to use for the given kind.
    pub fn get(&self, kind: DieKind) -> &dyn Die {
        match kind {
            DieKind::FourSided => &self.four_sided,
            DieKind::SixSided => &self.six_sided,
        }
    }
}

impl<D: Die + Clone> DiceSet<D, D> {
    /// Use one die for both kinds. Clones of test and random dice share
    /// their stream, so both kinds advance the same sequence.
    pub fn uniform(die: D) -> Self {
        Self::new(die.clone(), die)
    }
}

impl DiceSet<SeededDie, SeededDie> {
    /// Standard dice on independent streams derived from one user seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            four_sided(ChaCha20Rng::seed_from_u64(derive_stream_seed(
                seed,
                STREAM_FOUR_SIDED,
            ))),
            six_sided(ChaCha20Rng::seed_from_u64(derive_stream_seed(
                seed,
                STREAM_SIX_SIDED,
            ))),
        )
    }
}

type HmacSha256 = Hmac<Sha256>;

/// Derive an independent stream seed for `domain_tag` from a user seed.
///
/// The user seed keys an HMAC-SHA256 over the tag; the first eight digest
/// bytes, big-endian, become the stream seed.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    // HMAC takes keys of any length.
    let Ok(mut mac) = HmacSha256::new_from_slice(&user_seed.to_be_bytes()) else {
        return user_seed;
    };
    mac.update(b"hog/");
    mac.update(domain_tag);
    mac.finalize()
        .into_bytes()
        .iter()
        .take(8)
        .fold(0, |seed, byte| (seed << 8) | u64::from(*byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_cycle_through_outcomes() {
        let dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
        let rolled: Vec<u32> = (0..6).map(|_| dice.roll()).collect();
        assert_eq!(rolled, vec![3, 1, 5, 6, 3, 1]);
        assert_eq!(dice.rolls(), 6);
    }

    #[test]
    fn test_dice_clones_share_the_sequence() {
        let dice = TestDice::new(&[2, 4]).unwrap();
        let clone = dice.clone();
        assert_eq!(dice.roll(), 2);
        assert_eq!(clone.roll(), 4);
        assert_eq!(dice.rolls(), 2);
    }

    #[test]
    fn empty_test_dice_are_rejected() {
        assert_eq!(TestDice::new(&[]).unwrap_err(), HogError::EmptyTestDice);
    }

    #[test]
    fn closures_are_dice() {
        let always_four = || 4;
        assert_eq!(always_four.roll(), 4);
    }

    #[test]
    fn random_dice_stay_in_range() {
        let d4 = four_sided(ChaCha20Rng::seed_from_u64(7));
        let d6 = six_sided(ChaCha20Rng::seed_from_u64(7));
        for _ in 0..500 {
            assert!((1..=4).contains(&d4.roll()));
            assert!((1..=6).contains(&d6.roll()));
        }
    }

    #[test]
    fn random_die_rejects_zero_sides() {
        let err = RandomDie::new(0, ChaCha20Rng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, HogError::InvalidDieSides { sides: 0 });
    }

    #[test]
    fn seeded_sets_are_reproducible() {
        let a = DiceSet::seeded(1337);
        let b = DiceSet::seeded(1337);
        for kind in [DieKind::SixSided, DieKind::FourSided, DieKind::SixSided] {
            let seq_a: Vec<u32> = (0..20).map(|_| a.get(kind).roll()).collect();
            let seq_b: Vec<u32> = (0..20).map(|_| b.get(kind).roll()).collect();
            assert_eq!(seq_a, seq_b);
        }
    }

    #[test]
    fn stream_seeds_are_domain_separated() {
        assert_ne!(
            derive_stream_seed(42, STREAM_FOUR_SIDED),
            derive_stream_seed(42, STREAM_SIX_SIDED)
        );
        assert_eq!(
            derive_stream_seed(42, STREAM_SIX_SIDED),
            derive_stream_seed(42, STREAM_SIX_SIDED)
        );
    }

    #[test]
    fn stream_seeds_depend_on_the_user_seed() {
        assert_ne!(
            derive_stream_seed(1, STREAM_SIX_SIDED),
            derive_stream_seed(2, STREAM_SIX_SIDED)
        );
        assert_ne!(derive_stream_seed(7, b"final"), derive_stream_seed(7, b"bacon"));
    }

    #[test]
    fn test_dice_wrap_after_many_rolls() {
        let dice = TestDice::new(&[2, 3, 5]).unwrap();
        let rolled: Vec<u32> = (0..7).map(|_| dice.roll()).collect();
        assert_eq!(rolled, vec![2, 3, 5, 2, 3, 5, 2]);
    }

    #[test]
    fn die_kind_reports_sides() {
        assert_eq!(DieKind::FourSided.sides(), 4);
        assert_eq!(DieKind::SixSided.to_string(), "d6");
    }
}
