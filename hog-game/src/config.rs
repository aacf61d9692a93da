//! Simulation configuration.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration. Call [`HogConfig::validate`] before use.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SAMPLE_COUNT, GOAL_SCORE, MAX_ROLLS};
use crate::error::HogConfigError;
use crate::strategy::{BaconStrategy, FinalStrategy, SwapStrategy};

/// Top-level configuration for games and experiments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogConfig {
    #[serde(default = "HogConfig::default_goal")]
    pub goal: u32,
    #[serde(default = "HogConfig::default_num_samples")]
    pub num_samples: u32,
    /// Dice seed; `None` draws a fresh one per run.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub strategies: StrategyConfig,
}

impl HogConfig {
    const fn default_goal() -> u32 {
        GOAL_SCORE
    }

    const fn default_num_samples() -> u32 {
        DEFAULT_SAMPLE_COUNT
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HogConfigError::Parse`] for malformed JSON and a
    /// validation error for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, HogConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the rules depend on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), HogConfigError> {
        require_min("goal", self.goal, 1)?;
        require_min("num_samples", self.num_samples, 1)?;
        self.strategies.validate()
    }
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            goal: Self::default_goal(),
            num_samples: Self::default_num_samples(),
            seed: None,
            strategies: StrategyConfig::default(),
        }
    }
}

/// Parameters for the configurable strategies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default)]
    pub bacon: BaconStrategy,
    #[serde(default)]
    pub swap: SwapStrategy,
    #[serde(default, rename = "final")]
    pub final_strategy: FinalStrategy,
}

impl StrategyConfig {
    fn validate(&self) -> Result<(), HogConfigError> {
        validate_bacon("strategies.bacon", self.bacon)?;
        validate_bacon("strategies.swap", self.swap.bacon)?;
        let fin = &self.final_strategy;
        require_rolls(
            "strategies.final.harmful_swap_rolls",
            fin.harmful_swap_rolls,
        )?;
        require_rolls(
            "strategies.final.harmful_hog_wild_rolls",
            fin.harmful_hog_wild_rolls,
        )?;
        validate_bacon("strategies.final.leading", fin.leading)?;
        validate_bacon("strategies.final.trailing", fin.trailing)?;
        validate_bacon("strategies.final.tied", fin.tied)
    }
}

fn validate_bacon(field: &'static str, bacon: BaconStrategy) -> Result<(), HogConfigError> {
    require_min(field, bacon.margin, 1)?;
    require_rolls(field, bacon.num_rolls)
}

fn require_min(field: &'static str, value: u32, min: u32) -> Result<(), HogConfigError> {
    if value < min {
        return Err(HogConfigError::MinViolation { field, min, value });
    }
    Ok(())
}

fn require_rolls(field: &'static str, value: u32) -> Result<(), HogConfigError> {
    if value > MAX_ROLLS {
        return Err(HogConfigError::RangeViolation {
            field,
            min: 0,
            max: MAX_ROLLS,
            value,
        });
    }
    Ok(())
}
