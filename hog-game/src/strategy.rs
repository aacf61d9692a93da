//! Scripted play strategies.
//!
//! A strategy maps `(own score, opponent score)` to the number of dice to
//! roll this turn. Every strategy here is pure and stateless.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::StrategyConfig;
use crate::constants::{
    BACON_MARGIN, BACON_ROLLS, FINAL_HARMFUL_HOG_WILD_ROLLS, FINAL_HARMFUL_SWAP_ROLLS,
    FINAL_LEADING_MARGIN, FINAL_LEADING_ROLLS, FINAL_TIED_MARGIN, FINAL_TIED_ROLLS,
    FINAL_TRAILING_MARGIN, FINAL_TRAILING_ROLLS, GOAL_SCORE, HOG_WILD_MODULUS,
};
use crate::error::HogError;
use crate::rules::free_bacon;

/// Chooses how many dice (0–10) to roll given both scores.
pub trait Strategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

/// Rolls the same number of dice every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysRoll(pub u32);

/// A strategy that always rolls `n` dice.
#[must_use]
pub const fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// Rolls zero dice whenever Free Bacon pays at least `margin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconStrategy {
    #[serde(default = "BaconStrategy::default_margin")]
    pub margin: u32,
    #[serde(default = "BaconStrategy::default_num_rolls")]
    pub num_rolls: u32,
}

impl BaconStrategy {
    const fn default_margin() -> u32 {
        BACON_MARGIN
    }

    const fn default_num_rolls() -> u32 {
        BACON_ROLLS
    }

    #[must_use]
    pub const fn new(margin: u32, num_rolls: u32) -> Self {
        Self { margin, num_rolls }
    }

    fn decide(self, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self::new(BACON_MARGIN, BACON_ROLLS)
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        self.decide(opponent_score)
    }
}

/// Bacon strategy that also chases beneficial Swine Swaps and avoids
/// harmful ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwapStrategy {
    #[serde(flatten)]
    pub bacon: BaconStrategy,
}

impl SwapStrategy {
    #[must_use]
    pub const fn new(margin: u32, num_rolls: u32) -> Self {
        Self {
            bacon: BaconStrategy::new(margin, num_rolls),
        }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let after = score + free_bacon(opponent_score);
        if 2 * after == opponent_score {
            0
        } else if after == 2 * opponent_score {
            self.bacon.num_rolls
        } else {
            self.bacon.decide(opponent_score)
        }
    }
}

/// Composite strategy weighing swaps, Hog Wild exposure and the score gap.
///
/// Rules, in priority order, for the outcome of rolling zero dice:
/// 1. a harmful swap (now, or after the opponent's Free Bacon reply) rolls
///    `harmful_swap_rolls`;
/// 2. reaching the goal or a beneficial swap rolls zero;
/// 3. handing ourselves the four-sided die after the opponent's reply rolls
///    `harmful_hog_wild_rolls`;
/// 4. handing the opponent the four-sided die rolls zero;
/// 5. otherwise the bacon rule tuned for leading, trailing or tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStrategy {
    /// Taken from the game configuration, never from the strategy document.
    #[serde(skip, default = "FinalStrategy::default_goal")]
    pub goal: u32,
    #[serde(default = "FinalStrategy::default_harmful_swap_rolls")]
    pub harmful_swap_rolls: u32,
    #[serde(default = "FinalStrategy::default_harmful_hog_wild_rolls")]
    pub harmful_hog_wild_rolls: u32,
    #[serde(default = "FinalStrategy::default_leading")]
    pub leading: BaconStrategy,
    #[serde(default = "FinalStrategy::default_trailing")]
    pub trailing: BaconStrategy,
    #[serde(default = "FinalStrategy::default_tied")]
    pub tied: BaconStrategy,
}

impl FinalStrategy {
    const fn default_goal() -> u32 {
        GOAL_SCORE
    }

    const fn default_harmful_swap_rolls() -> u32 {
        FINAL_HARMFUL_SWAP_ROLLS
    }

    const fn default_harmful_hog_wild_rolls() -> u32 {
        FINAL_HARMFUL_HOG_WILD_ROLLS
    }

    const fn default_leading() -> BaconStrategy {
        BaconStrategy::new(FINAL_LEADING_MARGIN, FINAL_LEADING_ROLLS)
    }

    const fn default_trailing() -> BaconStrategy {
        BaconStrategy::new(FINAL_TRAILING_MARGIN, FINAL_TRAILING_ROLLS)
    }

    const fn default_tied() -> BaconStrategy {
        BaconStrategy::new(FINAL_TIED_MARGIN, FINAL_TIED_ROLLS)
    }

    /// Same parameters, playing to a different goal.
    #[must_use]
    pub const fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self {
            goal: Self::default_goal(),
            harmful_swap_rolls: Self::default_harmful_swap_rolls(),
            harmful_hog_wild_rolls: Self::default_harmful_hog_wild_rolls(),
            leading: Self::default_leading(),
            trailing: Self::default_trailing(),
            tied: Self::default_tied(),
        }
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let after = score + free_bacon(opponent_score);
        let reply = free_bacon(after);

        let harmful_swap = after == 2 * opponent_score || after == 2 * (opponent_score + reply);
        let beneficial_swap = 2 * after == opponent_score || 2 * score == opponent_score;
        let harmful_hog_wild = (after + opponent_score + reply) % HOG_WILD_MODULUS == 0;
        let beneficial_hog_wild = (after + opponent_score) % HOG_WILD_MODULUS == 0;

        if harmful_swap {
            self.harmful_swap_rolls
        } else if after >= self.goal || beneficial_swap {
            0
        } else if harmful_hog_wild {
            self.harmful_hog_wild_rolls
        } else if beneficial_hog_wild {
            0
        } else if score > opponent_score {
            self.leading.decide(opponent_score)
        } else if score < opponent_score {
            self.trailing.decide(opponent_score)
        } else {
            self.tied.decide(opponent_score)
        }
    }
}

/// Named strategies selectable from configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    AlwaysRoll(u32),
    Bacon,
    Swap,
    Final,
}

impl StrategyKind {
    /// Build the strategy with parameters from `config`, playing to `goal`.
    #[must_use]
    pub fn build(self, config: &StrategyConfig, goal: u32) -> Box<dyn Strategy> {
        match self {
            Self::AlwaysRoll(n) => Box::new(always_roll(n)),
            Self::Bacon => Box::new(config.bacon),
            Self::Swap => Box::new(config.swap),
            Self::Final => Box::new(config.final_strategy.with_goal(goal)),
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::AlwaysRoll(n) => format!("always_roll({n})"),
            Self::Bacon => "bacon_strategy".to_string(),
            Self::Swap => "swap_strategy".to_string(),
            Self::Final => "final_strategy".to_string(),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlwaysRoll(n) => write!(f, "always:{n}"),
            Self::Bacon => f.write_str("bacon"),
            Self::Swap => f.write_str("swap"),
            Self::Final => f.write_str("final"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = HogError;

    /// Accepts `bacon`, `swap`, `final` and `always:N` (also `always-N`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let unknown = || HogError::UnknownStrategy {
            name: s.trim().to_string(),
        };
        match token.as_str() {
            "bacon" => Ok(Self::Bacon),
            "swap" => Ok(Self::Swap),
            "final" => Ok(Self::Final),
            other => {
                let count = other
                    .strip_prefix("always:")
                    .or_else(|| other.strip_prefix("always-"))
                    .ok_or_else(unknown)?;
                count.parse().map(Self::AlwaysRoll).map_err(|_| unknown())
            }
        }
    }
}
