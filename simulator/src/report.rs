//! Text and JSON rendering of run results.

use clap::ValueEnum;
use crapsim_types::{SessionSimulationResult, StrategyResult};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON of any result object.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Comparison table of single-run results, best net change first.
pub fn write_comparison<W: Write>(out: &mut W, results: &[StrategyResult]) -> io::Result<()> {
    let mut ranked: Vec<&StrategyResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.net_change.cmp(&a.net_change));

    writeln!(
        out,
        "{:<24} {:>12} {:>12} {:>8} {:>6} {:>8} {:>6} {:>7} {:>7} {:>7}  {}",
        "Strategy",
        "Final",
        "Net",
        "ROI %",
        "Rolls",
        "Shooters",
        "Points",
        "7-outs",
        "Longest",
        "Edge %",
        "Stopped"
    )?;
    for result in ranked {
        writeln!(
            out,
            "{:<24} {:>12} {:>12} {:>8.2} {:>6} {:>8} {:>6} {:>7} {:>7} {:>7.3}  {}",
            result.strategy_name,
            result.final_equity.to_string(),
            result.net_change.to_string(),
            result.roi_percent,
            result.total_rolls,
            result.total_shooters,
            result.points_hit,
            result.seven_outs,
            result.longest_roll,
            result.weighted_house_edge,
            result.termination
        )?;
    }
    Ok(())
}

/// Roll-value histogram shared by every strategy of a comparison.
pub fn write_distribution<W: Write>(out: &mut W, result: &StrategyResult) -> io::Result<()> {
    let total: u64 = result.roll_distribution.values().sum();
    writeln!(out, "{:>5} {:>7} {:>7}", "Total", "Count", "%")?;
    for (value, count) in &result.roll_distribution {
        let share = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64 * 100.0
        };
        writeln!(out, "{value:>5} {count:>7} {share:>7.2}")?;
    }
    Ok(())
}

/// Cross-session summary table, best mean net change first.
pub fn write_sessions<W: Write>(out: &mut W, results: &[SessionSimulationResult]) -> io::Result<()> {
    let mut ranked: Vec<&SessionSimulationResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.net_change.mean.total_cmp(&a.net_change.mean));

    if let Some(first) = ranked.first() {
        writeln!(
            out,
            "{} sessions of {} shooters, starting bankroll {}",
            first.session_count, first.shooters_per_session, first.starting_bankroll
        )?;
    }
    writeln!(
        out,
        "{:<24} {:>10} {:>9} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12} {:>8} {:>7}",
        "Strategy",
        "Mean",
        "Std dev",
        "P10",
        "P25",
        "Median",
        "P75",
        "P90",
        "W / L / E",
        "Bankrupt",
        "Edge %"
    )?;
    for result in ranked {
        let net = &result.net_change;
        let record = format!(
            "{}/{}/{}",
            result.winning_sessions, result.losing_sessions, result.break_even_sessions
        );
        writeln!(
            out,
            "{:<24} {:>10.2} {:>9.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12} {:>8} {:>7.3}",
            result.strategy_name,
            net.mean,
            net.std_dev,
            net.p10,
            net.p25,
            net.median,
            net.p75,
            net.p90,
            record,
            result.bankrupt_sessions,
            result.weighted_house_edge
        )?;
    }
    Ok(())
}
