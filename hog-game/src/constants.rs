//! Rule and tuning constants for Hog.
//!
//! Rule values are fixed by the game; strategy defaults are the starting
//! points used when no configuration overrides them.

// Rules --------------------------------------------------------------------
/// Score a player must reach to win.
pub const GOAL_SCORE: u32 = 100;
/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;
/// Sides on the Hog Wild die.
pub const FOUR_SIDES: u32 = 4;
/// Sides on the regular die.
pub const SIX_SIDES: u32 = 6;
/// Combined scores divisible by this force the four-sided die.
pub const HOG_WILD_MODULUS: u32 = 7;
/// Any single roll equal to this ends the turn with one point.
pub const PIG_OUT_FACE: u32 = 1;

// Evaluation ---------------------------------------------------------------
/// Samples per estimate when nothing else is configured.
pub const DEFAULT_SAMPLE_COUNT: u32 = 1000;
/// Baseline opponent rolls this many dice every turn.
pub const BASELINE_ROLLS: u32 = 5;

// Strategy defaults --------------------------------------------------------
pub const BACON_MARGIN: u32 = 8;
pub const BACON_ROLLS: u32 = 5;
pub const FINAL_HARMFUL_SWAP_ROLLS: u32 = 5;
pub const FINAL_HARMFUL_HOG_WILD_ROLLS: u32 = 4;
pub const FINAL_LEADING_MARGIN: u32 = 8;
pub const FINAL_LEADING_ROLLS: u32 = 4;
pub const FINAL_TRAILING_MARGIN: u32 = 10;
pub const FINAL_TRAILING_ROLLS: u32 = 6;
pub const FINAL_TIED_MARGIN: u32 = 8;
pub const FINAL_TIED_ROLLS: u32 = 5;

// RNG domain tags ----------------------------------------------------------
pub(crate) const STREAM_FOUR_SIDED: &[u8] = b"die.four-sided";
pub(crate) const STREAM_SIX_SIDED: &[u8] = b"die.six-sided";
