use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use hog_game::{DieKind, GameRecord};

use crate::experiments::ExperimentReport;

fn die_label(die: DieKind) -> &'static str {
    match die {
        DieKind::SixSided => "six-sided",
        DieKind::FourSided => "four-sided",
    }
}

pub fn generate_console_report(out: &mut dyn Write, report: &ExperimentReport) -> Result<()> {
    writeln!(out, "{}", "📊 Hog Strategy Experiments".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;
    writeln!(
        out,
        "Seed: {}  Goal: {}  Samples: {}",
        report.seed, report.goal, report.num_samples
    )?;
    writeln!(out)?;

    for table in &report.tables {
        write!(out, "{}", table.report)?;
        writeln!(
            out,
            "Max scoring num rolls for {} dice: {}",
            die_label(table.die),
            table.report.best
        )?;
        writeln!(out)?;
    }

    for line in &report.win_rates {
        writeln!(out, "{} win rate: {}", line.strategy, line.win_rate)?;
        writeln!(
            out,
            "   vs {}: {:.4} as player 0, {:.4} as player 1",
            line.baseline, line.rates.as_player_zero, line.rates.as_player_one
        )?;
    }

    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &ExperimentReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_console_game(
    out: &mut dyn Write,
    record: &GameRecord,
    labels: (&str, &str),
) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("🎲 {} vs {}", labels.0, labels.1).bright_cyan().bold()
    )?;
    for turn in &record.turns {
        let swap = if turn.swapped { "  swine swap!" } else { "" };
        writeln!(
            out,
            "turn {:>3}  {}  rolls {:>2} {}  +{:<3} -> {}-{}{}",
            turn.turn,
            turn.player,
            turn.num_rolls,
            turn.die,
            turn.points,
            turn.scores.0,
            turn.scores.1,
            swap.yellow()
        )?;
    }
    let (score0, score1) = record.final_scores;
    writeln!(out, "Final score: {score0}-{score1}")?;
    writeln!(out, "Winner: {}", record.winner().to_string().green())?;
    Ok(())
}

pub fn generate_json_game(out: &mut dyn Write, record: &GameRecord) -> Result<()> {
    let json_output = serde_json::to_string_pretty(record)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}
