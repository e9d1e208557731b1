//! Roll-by-roll and shooter-by-shooter equity tracking.

use crate::game::GameObserver;
use crapsim_types::{Chips, DiceRoll, RollRecord, SessionStats, ShooterRecord};
use tracing::trace;

/// Tracks bankroll history across rolls and shooters.
///
/// Equity is cash in hand plus chips at risk on the table. A shooter record
/// is opened by the first roll after a seven-out and closed by the next one.
#[derive(Clone, Debug)]
pub struct BankrollTracker {
    starting_bankroll: Chips,
    bankroll: Chips,
    at_risk: Chips,
    rolls: Vec<RollRecord>,
    shooters: Vec<ShooterRecord>,
    current: Option<ShooterRecord>,
}

impl BankrollTracker {
    pub fn new(starting_bankroll: Chips) -> Self {
        Self {
            starting_bankroll,
            bankroll: starting_bankroll,
            at_risk: Chips::ZERO,
            rolls: Vec::new(),
            shooters: Vec::new(),
            current: None,
        }
    }

    /// Discard all history and start again from `bankroll`.
    pub fn start_session(&mut self, bankroll: Chips) {
        *self = Self::new(bankroll);
    }

    pub fn starting_bankroll(&self) -> Chips {
        self.starting_bankroll
    }

    /// Cash after the latest recorded roll.
    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    pub fn at_risk(&self) -> Chips {
        self.at_risk
    }

    pub fn current_equity(&self) -> Chips {
        self.bankroll + self.at_risk
    }

    pub fn total_rolls(&self) -> u64 {
        self.rolls.len() as u64
    }

    /// Shooters who threw at least one roll.
    pub fn total_shooters(&self) -> u64 {
        self.shooters.len() as u64 + u64::from(self.current.is_some())
    }

    /// Record a roll and its impact on bankroll and equity.
    pub fn record_roll(
        &mut self,
        roll: &DiceRoll,
        bankroll_before: Chips,
        bankroll_after: Chips,
        bets_before: Chips,
        bets_after: Chips,
    ) -> RollRecord {
        let roll_number = self.total_rolls() + 1;
        let next_shooter = self.shooters.len() as u64 + 1;
        let shooter = self.current.get_or_insert_with(|| {
            ShooterRecord::new(next_shooter, roll_number, bankroll_before + bets_before)
        });

        let record = RollRecord {
            roll_number,
            shooter_number: shooter.shooter_number,
            die1: roll.die1(),
            die2: roll.die2(),
            bankroll_before,
            bankroll_after,
            bets_before,
            bets_after,
        };
        shooter.roll_count += 1;
        shooter.equity_end = record.equity_after();

        self.bankroll = bankroll_after;
        self.at_risk = bets_after;
        self.rolls.push(record);
        trace!(
            roll = roll_number,
            equity = %record.equity_after(),
            net = %record.net_change(),
            "roll recorded"
        );
        record
    }

    /// Close the current shooter's record.
    pub fn end_shooter(&mut self) {
        if let Some(mut shooter) = self.current.take() {
            shooter.end_roll = Some(self.total_rolls());
            self.shooters.push(shooter);
        }
    }

    pub fn roll_history(&self) -> &[RollRecord] {
        &self.rolls
    }

    /// Shooters who have sevened out, oldest first.
    pub fn completed_shooters(&self) -> &[ShooterRecord] {
        &self.shooters
    }

    /// The shooter holding the dice, if they have rolled yet.
    pub fn current_shooter(&self) -> Option<&ShooterRecord> {
        self.current.as_ref()
    }

    /// Every shooter record, the open one last.
    pub fn shooters(&self) -> Vec<ShooterRecord> {
        self.shooters
            .iter()
            .chain(self.current.as_ref())
            .cloned()
            .collect()
    }

    /// Record of shooter `shooter_number` (1-based).
    pub fn shooter_stats(&self, shooter_number: u64) -> Option<&ShooterRecord> {
        self.shooters
            .iter()
            .chain(self.current.as_ref())
            .find(|shooter| shooter.shooter_number == shooter_number)
    }

    pub fn session_stats(&self) -> SessionStats {
        let current_equity = self.current_equity();
        let net_change = current_equity - self.starting_bankroll;
        let roi_percent = roi_percent(net_change, self.starting_bankroll);
        if self.rolls.is_empty() {
            return SessionStats {
                current_equity,
                starting_bankroll: self.starting_bankroll,
                net_change,
                roi_percent,
                ..Default::default()
            };
        }

        let win_rolls = self.rolls.iter().filter(|r| r.is_win()).count() as u64;
        let loss_rolls = self.rolls.iter().filter(|r| r.is_loss()).count() as u64;
        let changes = self.rolls.iter().map(RollRecord::net_change);
        SessionStats {
            total_rolls: self.total_rolls(),
            total_shooters: self.total_shooters(),
            net_change,
            win_rolls,
            loss_rolls,
            push_rolls: self.total_rolls() - win_rolls - loss_rolls,
            biggest_win: changes.clone().max().unwrap_or_default(),
            biggest_loss: changes.min().unwrap_or_default(),
            current_equity,
            starting_bankroll: self.starting_bankroll,
            roi_percent,
        }
    }

    /// `(roll_numbers, equity)` where roll 0 is the starting bankroll.
    pub fn equity_series(&self) -> (Vec<u64>, Vec<Chips>) {
        std::iter::once((0, self.starting_bankroll))
            .chain(self.rolls.iter().map(|r| (r.roll_number, r.equity_after())))
            .unzip()
    }

    /// Roll numbers on which shooters sevened out.
    pub fn shooter_boundaries(&self) -> Vec<u64> {
        self.shooters
            .iter()
            .filter_map(|shooter| shooter.end_roll)
            .collect()
    }
}

impl GameObserver for BankrollTracker {
    fn on_seven_out(&mut self, _point: u8) {
        self.end_shooter();
    }
}

/// Net change as a percentage of `starting`; zero when nothing was staked.
pub fn roi_percent(net_change: Chips, starting: Chips) -> f64 {
    if starting.is_positive() {
        net_change.to_f64() / starting.to_f64() * 100.0
    } else {
        0.0
    }
}
