//! Helpers for driving the engine with scripted dice in tests.

use crate::bets::{Bet, Settlement};
use crate::dice::{DiceError, DiceRollSequence, SequenceDiceProvider};
use crate::game::RollOutcome;
use crate::runner::{run_strategy, Termination};
use crate::strategy::{BetInterface, DynStrategy, Strategy};
use crapsim_types::{BetType, Chips, StrategyResult, TableRules};
use std::sync::{Arc, Mutex};

/// Dice pairs that produce each total from 2 to 12.
const PAIRS_BY_TOTAL: [(u8, u8); 11] = [
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
    (4, 5),
    (4, 6),
    (5, 6),
    (6, 6),
];

/// Creates a sequence replaying `pairs` in order
pub fn create_sequence_result(pairs: &[(u8, u8)]) -> Result<DiceRollSequence, DiceError> {
    DiceRollSequence::from_pairs(pairs)
}

pub fn create_sequence(pairs: &[(u8, u8)]) -> DiceRollSequence {
    create_sequence_result(pairs).expect("scripted dice must be 1-6")
}

/// Dice pairs rolling each of `totals`, soft where possible
pub fn create_pairs_from_totals(totals: &[u8]) -> Vec<(u8, u8)> {
    totals
        .iter()
        .map(|&total| {
            assert!((2..=12).contains(&total), "total {total} out of range");
            PAIRS_BY_TOTAL[usize::from(total - 2)]
        })
        .collect()
}

pub fn create_sequence_from_totals(totals: &[u8]) -> DiceRollSequence {
    create_sequence(&create_pairs_from_totals(totals))
}

pub fn create_provider(pairs: &[(u8, u8)]) -> SequenceDiceProvider {
    create_sequence(pairs).provider()
}

/// Run `strategy` over scripted dice with default rules and no cap.
pub fn run_scripted(
    strategy: &dyn DynStrategy,
    pairs: &[(u8, u8)],
    bankroll: Chips,
) -> StrategyResult {
    let mut provider = create_provider(pairs);
    run_strategy(strategy, &mut provider, bankroll, &TableRules::default(), None)
        .expect("scripted dice only fail by running out")
}

/// Like [run_scripted] but stopping at `termination`.
pub fn run_scripted_until(
    strategy: &dyn DynStrategy,
    pairs: &[(u8, u8)],
    bankroll: Chips,
    termination: Termination,
) -> StrategyResult {
    let mut provider = create_provider(pairs);
    run_strategy(
        strategy,
        &mut provider,
        bankroll,
        &TableRules::default(),
        Some(termination),
    )
    .expect("scripted dice only fail by running out")
}

/// Records every hook invocation into a shared log.
///
/// Optionally keeps one Pass Line bet of `pass_amount` working.
#[derive(Clone, Debug, Default)]
pub struct RecordingStrategy {
    pub pass_amount: Option<Chips>,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pass_line(amount: Chips) -> Self {
        Self {
            pass_amount: Some(amount),
            ..Self::default()
        }
    }

    /// Hook calls so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().expect("log poisoned").clone()
    }

    fn push(&self, entry: String) {
        self.log.lock().expect("log poisoned").push(entry);
    }
}

impl Strategy for RecordingStrategy {
    type State = u64;

    fn name(&self) -> String {
        "Recording".to_string()
    }

    fn description(&self) -> String {
        "Logs every hook call".to_string()
    }

    fn on_come_out_roll(&self, _rolls: &mut u64, bets: &mut BetInterface<'_>) {
        self.push("come_out".to_string());
        if let Some(amount) = self.pass_amount {
            if !bets.has_active_bet(BetType::PassLine) {
                if let Ok(bet) = Bet::pass_line(amount) {
                    bets.place_bet(bet);
                }
            }
        }
    }

    fn on_point_roll(&self, _rolls: &mut u64, _bets: &mut BetInterface<'_>, point: u8) {
        self.push(format!("point_roll({point})"));
    }

    fn on_roll_complete(&self, rolls: &mut u64, outcome: &RollOutcome, settled: &[Settlement]) {
        *rolls += 1;
        self.push(format!(
            "roll#{rolls}({},settled={})",
            outcome.roll.total(),
            settled.len()
        ));
    }

    fn on_point_established(&self, _rolls: &mut u64, point: u8) {
        self.push(format!("established({point})"));
    }

    fn on_point_made(&self, _rolls: &mut u64, point: u8) {
        self.push(format!("made({point})"));
    }

    fn on_seven_out(&self, _rolls: &mut u64, point: u8) {
        self.push(format!("seven_out({point})"));
    }
}
