use super::bet::BetType;
use super::chips::Chips;
use super::records::{SessionStats, ShooterRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why a single run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The configured roll cap was reached.
    RollLimit,
    /// The configured shooter cap was reached.
    ShooterLimit,
    /// No cash and no chips at risk remained.
    Bankrupt,
    /// The replayed dice sequence ran out.
    DiceExhausted,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TerminationReason::RollLimit => "roll limit",
            TerminationReason::ShooterLimit => "shooter limit",
            TerminationReason::Bankrupt => "bankrupt",
            TerminationReason::DiceExhausted => "dice exhausted",
        };
        f.write_str(label)
    }
}

/// Wagering totals for one run or an aggregate of runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary {
    /// Amount wagered per bet type.
    pub by_bet: BTreeMap<BetType, Chips>,
    /// Sum of `amount × house edge (percent)` over every wager.
    pub edge_weighted: f64,
}

impl ActionSummary {
    pub fn record(&mut self, bet_type: BetType, amount: Chips, house_edge: f64) {
        *self.by_bet.entry(bet_type).or_insert(Chips::ZERO) += amount;
        self.edge_weighted += amount.to_f64() * house_edge;
    }

    pub fn merge(&mut self, other: &ActionSummary) {
        for (bet_type, amount) in &other.by_bet {
            *self.by_bet.entry(*bet_type).or_insert(Chips::ZERO) += *amount;
        }
        self.edge_weighted += other.edge_weighted;
    }

    pub fn total(&self) -> Chips {
        self.by_bet.values().sum()
    }

    /// Action-weighted house edge in percent; zero when nothing was wagered.
    pub fn weighted_house_edge(&self) -> f64 {
        let total = self.total().to_f64();
        if total == 0.0 {
            0.0
        } else {
            self.edge_weighted / total
        }
    }
}

/// Results for a single strategy run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy_name: String,
    pub starting_bankroll: Chips,
    pub final_equity: Chips,
    pub net_change: Chips,
    pub roi_percent: f64,
    /// Roll numbers for `equity_series`; roll 0 is the starting equity.
    pub rolls: Vec<u64>,
    pub equity_series: Vec<Chips>,
    pub shooters: Vec<ShooterRecord>,
    pub shooter_boundaries: Vec<u64>,
    pub session_stats: SessionStats,
    pub total_rolls: u64,
    pub total_shooters: u64,
    pub points_hit: u64,
    pub seven_outs: u64,
    /// Most rolls thrown by a single shooter, points made included; only a
    /// seven-out ends the streak.
    pub longest_roll: u64,
    /// Occurrences of each total 2-12.
    pub roll_distribution: BTreeMap<u8, u64>,
    pub went_bankrupt: bool,
    pub termination: TerminationReason,
    pub total_action: Chips,
    pub action: ActionSummary,
    pub weighted_house_edge: f64,
}

/// Outcome of one fixed-length session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub session_index: u32,
    pub seed: Option<u64>,
    pub strategy_name: String,
    pub starting_bankroll: Chips,
    pub final_equity: Chips,
    pub net_change: Chips,
    pub roi_percent: f64,
    pub total_rolls: u64,
    pub total_shooters: u64,
    pub went_bankrupt: bool,
    pub termination: TerminationReason,
    pub total_action: Chips,
    pub weighted_house_edge: f64,
}

/// Summary statistics of a sample of per-session values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p10: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
}

/// Cross-session statistics for one strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSimulationResult {
    pub strategy_name: String,
    pub session_count: u32,
    pub shooters_per_session: u64,
    pub starting_bankroll: Chips,
    pub sessions: Vec<SessionResult>,
    pub net_change: Distribution,
    pub roi_percent: Distribution,
    pub winning_sessions: u32,
    pub losing_sessions: u32,
    pub break_even_sessions: u32,
    pub bankrupt_sessions: u32,
    pub total_action: Chips,
    pub action: ActionSummary,
    /// Σ(action × edge) ÷ Σ(action) over every session, in percent.
    pub weighted_house_edge: f64,
}
