use super::chips::Chips;
use serde::{Deserialize, Serialize};

/// Record of a single roll's impact on bankroll.
///
/// `bankroll_*` is cash in hand and `bets_*` is chips at risk on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub roll_number: u64,
    pub shooter_number: u64,
    pub die1: u8,
    pub die2: u8,
    pub bankroll_before: Chips,
    pub bankroll_after: Chips,
    pub bets_before: Chips,
    pub bets_after: Chips,
}

impl RollRecord {
    pub fn dice_total(&self) -> u8 {
        self.die1 + self.die2
    }

    pub fn equity_before(&self) -> Chips {
        self.bankroll_before + self.bets_before
    }

    pub fn equity_after(&self) -> Chips {
        self.bankroll_after + self.bets_after
    }

    pub fn net_change(&self) -> Chips {
        self.equity_after() - self.equity_before()
    }

    pub fn is_win(&self) -> bool {
        self.net_change().is_positive()
    }

    pub fn is_loss(&self) -> bool {
        self.net_change().is_negative()
    }
}

/// Span of rolls from a shooter's first roll to their seven-out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShooterRecord {
    pub shooter_number: u64,
    /// Roll number (1-based) of the shooter's first roll.
    pub start_roll: u64,
    /// Roll number of the seven-out; `None` while the shooter still has the dice.
    pub end_roll: Option<u64>,
    pub roll_count: u64,
    /// Equity when the shooter took the dice.
    pub equity_start: Chips,
    /// Equity after the shooter's latest roll.
    pub equity_end: Chips,
}

impl ShooterRecord {
    pub fn new(shooter_number: u64, start_roll: u64, equity: Chips) -> Self {
        Self {
            shooter_number,
            start_roll,
            end_roll: None,
            roll_count: 0,
            equity_start: equity,
            equity_end: equity,
        }
    }

    pub fn net_change(&self) -> Chips {
        self.equity_end - self.equity_start
    }

    pub fn is_complete(&self) -> bool {
        self.end_roll.is_some()
    }
}

/// Roll-level statistics for one tracked session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_rolls: u64,
    pub total_shooters: u64,
    pub net_change: Chips,
    pub win_rolls: u64,
    pub loss_rolls: u64,
    pub push_rolls: u64,
    pub biggest_win: Chips,
    pub biggest_loss: Chips,
    pub current_equity: Chips,
    pub starting_bankroll: Chips,
    pub roi_percent: f64,
}
