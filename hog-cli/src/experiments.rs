use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use hog_game::{
    DiceSet, DieKind, HogConfig, MaxScoringReport, StrategyKind, WinRate, derive_stream_seed,
    evaluate_win_rate, max_scoring_num_rolls,
};
use serde::Serialize;

use crate::util::list_items;

/// Experiments selectable with `--experiments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experiment {
    MaxRolls,
    AlwaysRollEight,
    Bacon,
    Swap,
    Final,
}

impl Experiment {
    pub const ALL: [Self; 5] = [
        Self::MaxRolls,
        Self::AlwaysRollEight,
        Self::Bacon,
        Self::Swap,
        Self::Final,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::MaxRolls => "max-rolls",
            Self::AlwaysRollEight => "always-roll-8",
            Self::Bacon => "bacon",
            Self::Swap => "swap",
            Self::Final => "final",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::MaxRolls => "Average turn score for 1-10 dice on six- and four-sided dice",
            Self::AlwaysRollEight => "Win rate of always rolling 8 dice",
            Self::Bacon => "Win rate of the Free Bacon margin strategy",
            Self::Swap => "Win rate of the Swine Swap aware strategy",
            Self::Final => "Win rate of the composite final strategy",
        }
    }

    /// Strategy evaluated by a win-rate experiment.
    const fn candidate(self) -> Option<StrategyKind> {
        match self {
            Self::MaxRolls => None,
            Self::AlwaysRollEight => Some(StrategyKind::AlwaysRoll(8)),
            Self::Bacon => Some(StrategyKind::Bacon),
            Self::Swap => Some(StrategyKind::Swap),
            Self::Final => Some(StrategyKind::Final),
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Experiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|exp| exp.key().eq_ignore_ascii_case(s.trim()))
            .with_context(|| format!("unknown experiment: {s}"))
    }
}

/// Parse a comma-separated experiment list; `all` expands to every experiment.
pub fn expand_experiments(arg: &str) -> Result<Vec<Experiment>> {
    let mut experiments = Vec::new();
    for token in list_items(arg) {
        if token.eq_ignore_ascii_case("all") {
            for exp in Experiment::ALL {
                if !experiments.contains(&exp) {
                    experiments.push(exp);
                }
            }
            continue;
        }
        let exp: Experiment = token.parse()?;
        if !experiments.contains(&exp) {
            experiments.push(exp);
        }
    }
    if experiments.is_empty() {
        bail!("no experiments selected");
    }
    Ok(experiments)
}

/// Averaged turn-score table for one die.
#[derive(Debug, Clone, Serialize)]
pub struct DieTable {
    pub die: DieKind,
    pub report: MaxScoringReport,
}

/// Win rate of one candidate strategy against the baseline.
#[derive(Debug, Clone, Serialize)]
pub struct WinRateLine {
    pub strategy: String,
    pub baseline: String,
    pub rates: WinRate,
    pub win_rate: f64,
}

/// Everything one `--run_experiments` invocation measured.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub seed: u64,
    pub goal: u32,
    pub num_samples: u32,
    pub tables: Vec<DieTable>,
    pub win_rates: Vec<WinRateLine>,
}

/// Run the selected experiments. Each experiment draws from its own dice
/// streams derived from `seed`, so adding one does not perturb the others.
pub fn run_experiments(
    config: &HogConfig,
    seed: u64,
    baseline: StrategyKind,
    experiments: &[Experiment],
) -> Result<ExperimentReport> {
    let mut report = ExperimentReport {
        seed,
        goal: config.goal,
        num_samples: config.num_samples,
        tables: Vec::new(),
        win_rates: Vec::new(),
    };
    let baseline_strategy = baseline.build(&config.strategies, config.goal);

    for &experiment in experiments {
        let dice = DiceSet::seeded(derive_stream_seed(seed, experiment.key().as_bytes()));
        log::info!("running experiment {experiment}");

        let Some(candidate) = experiment.candidate() else {
            for die in [DieKind::SixSided, DieKind::FourSided] {
                let table = max_scoring_num_rolls(dice.get(die), config.num_samples)
                    .with_context(|| format!("max scoring num rolls for {die}"))?;
                report.tables.push(DieTable { die, report: table });
            }
            continue;
        };

        let strategy = candidate.build(&config.strategies, config.goal);
        let rates = evaluate_win_rate(
            strategy.as_ref(),
            baseline_strategy.as_ref(),
            &dice,
            config.goal,
            config.num_samples,
        )
        .with_context(|| format!("win rate for {}", candidate.label()))?;
        report.win_rates.push(WinRateLine {
            strategy: candidate.label(),
            baseline: baseline.label(),
            rates,
            win_rate: rates.overall(),
        });
    }

    Ok(report)
}
