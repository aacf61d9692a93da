mod experiments;
mod reports;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use experiments::{Experiment, expand_experiments, run_experiments};
use hog_game::constants::BASELINE_ROLLS;
use hog_game::{DiceSet, HogConfig, StrategyKind, play_traced};

#[derive(Debug, Parser)]
#[command(name = "hog", version)]
#[command(about = "Play Hog and evaluate dice strategies by Monte Carlo simulation")]
struct Args {
    /// Runs strategy experiments
    #[arg(
        short = 'r',
        long = "run_experiments",
        visible_alias = "run-experiments",
        conflicts_with = "play"
    )]
    run_experiments: bool,

    /// Experiments to run (comma-separated, or `all`)
    #[arg(long, default_value = "max-rolls,final")]
    experiments: String,

    /// List all available experiments and exit
    #[arg(long)]
    list_experiments: bool,

    /// Play one traced game with this strategy as player 0 against the baseline
    #[arg(long, value_name = "STRATEGY")]
    play: Option<StrategyKind>,

    /// Opponent strategy: always:N, bacon, swap or final
    #[arg(long, visible_alias = "against", default_value_t = StrategyKind::AlwaysRoll(BASELINE_ROLLS))]
    baseline: StrategyKind,

    /// Samples per averaged estimate (overrides the config file)
    #[arg(long)]
    samples: Option<u32>,

    /// Score needed to win (overrides the config file)
    #[arg(long)]
    goal: Option<u32>,

    /// Dice seed (overrides the config file); random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_experiments(&args)? {
        return Ok(());
    }

    if !args.run_experiments && args.play.is_none() {
        log::debug!("nothing requested; pass --run_experiments or --play");
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");

    let mut sink = ReportSink::open(args.output.as_deref())?;

    if let Some(strategy) = args.play {
        play_single_game(&args, &config, seed, strategy, &mut sink)?;
    } else {
        let experiments = expand_experiments(&args.experiments)?;
        let report = run_experiments(&config, seed, args.baseline, &experiments)?;
        match args.report.as_str() {
            "json" => reports::generate_json_report(&mut sink, &report)?,
            _ => reports::generate_console_report(&mut sink, &report)?,
        }
    }

    sink.finish()
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn maybe_list_experiments(args: &Args) -> Result<bool> {
    if !args.list_experiments {
        return Ok(false);
    }
    let mut sink = ReportSink::open(args.output.as_deref())?;
    writeln!(sink, "Available experiments:")?;
    for exp in Experiment::ALL {
        writeln!(sink, "  {:15} - {}", exp.key(), exp.description())?;
    }
    sink.finish()?;
    Ok(true)
}

/// Load the config file (if any), apply flag overrides, then validate.
fn resolve_config(args: &Args) -> Result<HogConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HogConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.num_samples = samples;
    }
    if let Some(goal) = args.goal {
        config.goal = goal;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<HogConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    HogConfig::from_json_str(&text).with_context(|| format!("failed to load {}", path.display()))
}

fn play_single_game(
    args: &Args,
    config: &HogConfig,
    seed: u64,
    strategy: StrategyKind,
    out: &mut ReportSink,
) -> Result<()> {
    let player0 = strategy.build(&config.strategies, config.goal);
    let player1 = args.baseline.build(&config.strategies, config.goal);
    let dice = DiceSet::seeded(seed);
    let record = play_traced(player0.as_ref(), player1.as_ref(), &dice, config.goal)
        .with_context(|| format!("playing {strategy} against {}", args.baseline))?;

    match args.report.as_str() {
        "json" => reports::generate_json_game(out, &record)?,
        _ => {
            let labels = (strategy.label(), args.baseline.label());
            reports::generate_console_game(out, &record, (labels.0.as_str(), labels.1.as_str()))?;
            writeln!(out, "{}", format!("seed {seed}").dimmed())?;
        }
    }
    Ok(())
}

/// Where reports and traced games are written.
enum ReportSink {
    Stdout(BufWriter<std::io::Stdout>),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl ReportSink {
    fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(BufWriter::new(stdout())));
        };
        let file = File::create(path)
            .with_context(|| format!("cannot create report file {}", path.display()))?;
        Ok(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn destination(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    /// Flush buffered output, naming the destination on failure.
    fn finish(&mut self) -> Result<()> {
        self.flush()
            .with_context(|| format!("failed to write report to {}", self.destination()))
    }
}

impl Write for ReportSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}
