//! Cross-run statistics.

use crapsim_types::{
    ActionSummary, Chips, Distribution, SessionResult, SessionSimulationResult,
};

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Percentile `p` (0-100) of ascending `sorted`, interpolating linearly
/// between the closest ranks.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let rank = (p.clamp(0.0, 100.0) / 100.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

/// Summary statistics of `values`; all zero for an empty sample.
pub fn distribution(values: &[f64]) -> Distribution {
    if values.is_empty() {
        return Distribution::default();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Distribution {
        mean: mean(values),
        std_dev: std_dev(values),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: percentile(&sorted, 50.0),
        p10: percentile(&sorted, 10.0),
        p25: percentile(&sorted, 25.0),
        p75: percentile(&sorted, 75.0),
        p90: percentile(&sorted, 90.0),
    }
}

/// Aggregate one strategy's sessions.
pub fn summarize_sessions(
    strategy_name: String,
    shooters_per_session: u64,
    starting_bankroll: Chips,
    sessions: Vec<SessionResult>,
    action: ActionSummary,
) -> SessionSimulationResult {
    let net: Vec<f64> = sessions.iter().map(|s| s.net_change.to_f64()).collect();
    let roi: Vec<f64> = sessions.iter().map(|s| s.roi_percent).collect();
    let count = |pred: fn(&SessionResult) -> bool| sessions.iter().filter(|s| pred(s)).count() as u32;

    SessionSimulationResult {
        strategy_name,
        session_count: sessions.len() as u32,
        shooters_per_session,
        starting_bankroll,
        net_change: distribution(&net),
        roi_percent: distribution(&roi),
        winning_sessions: count(|s| s.net_change.is_positive()),
        losing_sessions: count(|s| s.net_change.is_negative()),
        break_even_sessions: count(|s| s.net_change.is_zero()),
        bankrupt_sessions: count(|s| s.went_bankrupt),
        total_action: action.total(),
        weighted_house_edge: action.weighted_house_edge(),
        action,
        sessions,
    }
}
