//! Strategy trait and the betting facade strategies act through.
//!
//! A [Strategy] is an immutable description of betting behavior. Its
//! progression (regress/press counters and the like) lives in an explicit
//! [Strategy::State] value owned by the runner and threaded through every
//! hook. Strategies only ever see the table through a [BetInterface].

mod catalogue;

pub use catalogue::{
    DontPassLay, IronCross, NoBet, PassLineOdds, Place68, RegressAndPress, RegressPressState,
};

use crate::bets::{Bet, BetManager, PlacementError, Settlement};
use crate::game::{GameObserver, RollOutcome};
use crapsim_types::{ActionSummary, BetType, Chips, GamePhase, TableRules};
use tracing::debug;

/// Restricted view of one run's table, bankroll and bets.
///
/// The only way a strategy can change shared state is by placing a bet.
pub struct BetInterface<'a> {
    bets: &'a mut BetManager,
    bankroll: &'a mut Chips,
    action: &'a mut ActionSummary,
    phase: GamePhase,
}

impl<'a> BetInterface<'a> {
    pub fn new(
        bets: &'a mut BetManager,
        bankroll: &'a mut Chips,
        action: &'a mut ActionSummary,
        phase: GamePhase,
    ) -> Self {
        Self {
            bets,
            bankroll,
            action,
            phase,
        }
    }

    /// Cash in hand, not counting bets on the table.
    pub fn bankroll(&self) -> Chips {
        *self.bankroll
    }

    /// Cash plus chips at risk.
    pub fn equity(&self) -> Chips {
        *self.bankroll + self.bets.total_at_risk()
    }

    pub fn rules(&self) -> &TableRules {
        self.bets.rules()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn point(&self) -> Option<u8> {
        self.phase.point()
    }

    /// Place `bet` if the bankroll covers it and the table accepts it.
    ///
    /// On failure nothing changes.
    pub fn try_place_bet(&mut self, bet: Bet) -> Result<(), PlacementError> {
        let amount = bet.amount();
        if amount > *self.bankroll {
            debug!(bet = %bet, bankroll = %self.bankroll, "bet rejected: insufficient bankroll");
            return Err(PlacementError::InsufficientBankroll {
                amount,
                bankroll: *self.bankroll,
            });
        }
        let (bet_type, edge) = (bet.bet_type(), bet.house_edge());
        if let Err(err) = self.bets.try_place(bet) {
            debug!(%err, "bet rejected");
            return Err(err);
        }
        *self.bankroll -= amount;
        self.action.record(bet_type, amount, edge);
        Ok(())
    }

    /// Place `bet`. Returns true if successful.
    pub fn place_bet(&mut self, bet: Bet) -> bool {
        self.try_place_bet(bet).is_ok()
    }

    pub fn has_active_bet(&self, bet_type: BetType) -> bool {
        self.bets.has_active(bet_type)
    }

    /// All active bets of `bet_type`, in placement order.
    pub fn active_bets_of(&self, bet_type: BetType) -> impl Iterator<Item = &Bet> + '_ {
        self.bets.active_of(bet_type)
    }

    /// Whether a Place (or Hardway) bet already covers `number`.
    pub fn has_bet_on(&self, bet_type: BetType, number: u8) -> bool {
        self.bets
            .active_of(bet_type)
            .any(|bet| bet.number() == Some(number))
    }

    /// Chips currently on the table.
    pub fn at_risk(&self) -> Chips {
        self.bets.total_at_risk()
    }
}

/// Pluggable betting behavior.
///
/// `on_come_out_roll` and `on_point_roll` run before each roll while the
/// player still has cash. The remaining hooks run after the roll resolves.
pub trait Strategy: Send + Sync {
    type State: Clone + Default + std::fmt::Debug + Send;

    fn name(&self) -> String;

    fn description(&self) -> String;

    /// Called before a come-out roll.
    fn on_come_out_roll(&self, state: &mut Self::State, bets: &mut BetInterface<'_>);

    /// Called before a roll while `point` is on.
    fn on_point_roll(&self, state: &mut Self::State, bets: &mut BetInterface<'_>, point: u8);

    /// Called after the roll's bets are settled and paid.
    fn on_roll_complete(
        &self,
        _state: &mut Self::State,
        _outcome: &RollOutcome,
        _settled: &[Settlement],
    ) {
    }

    fn on_point_established(&self, _state: &mut Self::State, _point: u8) {}

    fn on_point_made(&self, _state: &mut Self::State, _point: u8) {}

    fn on_seven_out(&self, _state: &mut Self::State, _point: u8) {}
}

/// One strategy bound to its own progression state for a single run.
pub trait StrategyInstance {
    fn name(&self) -> String;

    fn on_come_out_roll(&mut self, bets: &mut BetInterface<'_>);

    fn on_point_roll(&mut self, bets: &mut BetInterface<'_>, point: u8);

    fn on_roll_complete(&mut self, outcome: &RollOutcome, settled: &[Settlement]);

    /// Phase-transition hooks, fanned out with the run's other observers.
    fn as_observer(&mut self) -> &mut dyn GameObserver;
}

/// Object-safe handle to a [Strategy], shareable across runs and threads.
pub trait DynStrategy: Send + Sync {
    fn name(&self) -> String;

    fn description(&self) -> String;

    /// Fresh instance with default progression state.
    fn instantiate(&self) -> Box<dyn StrategyInstance + '_>;
}

impl<S: Strategy> DynStrategy for S {
    fn name(&self) -> String {
        Strategy::name(self)
    }

    fn description(&self) -> String {
        Strategy::description(self)
    }

    fn instantiate(&self) -> Box<dyn StrategyInstance + '_> {
        Box::new(Bound {
            strategy: self,
            state: S::State::default(),
        })
    }
}

struct Bound<'s, S: Strategy> {
    strategy: &'s S,
    state: S::State,
}

impl<S: Strategy> StrategyInstance for Bound<'_, S> {
    fn name(&self) -> String {
        Strategy::name(self.strategy)
    }

    fn on_come_out_roll(&mut self, bets: &mut BetInterface<'_>) {
        self.strategy.on_come_out_roll(&mut self.state, bets);
    }

    fn on_point_roll(&mut self, bets: &mut BetInterface<'_>, point: u8) {
        self.strategy.on_point_roll(&mut self.state, bets, point);
    }

    fn on_roll_complete(&mut self, outcome: &RollOutcome, settled: &[Settlement]) {
        self.strategy
            .on_roll_complete(&mut self.state, outcome, settled);
    }

    fn as_observer(&mut self) -> &mut dyn GameObserver {
        self
    }
}

impl<S: Strategy> GameObserver for Bound<'_, S> {
    fn on_point_established(&mut self, point: u8) {
        self.strategy.on_point_established(&mut self.state, point);
    }

    fn on_point_made(&mut self, point: u8) {
        self.strategy.on_point_made(&mut self.state, point);
    }

    fn on_seven_out(&mut self, point: u8) {
        self.strategy.on_seven_out(&mut self.state, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(n: i64) -> Chips {
        Chips::from_dollars(n)
    }

    #[test]
    fn test_place_bet_debits_bankroll_and_records_action() {
        let mut bets = BetManager::new(TableRules::default());
        let mut bankroll = dollars(100);
        let mut action = ActionSummary::default();
        let mut table = BetInterface::new(&mut bets, &mut bankroll, &mut action, GamePhase::ComeOut);

        assert!(table.place_bet(Bet::pass_line(dollars(10)).unwrap()));
        assert_eq!(table.bankroll(), dollars(90));
        assert_eq!(table.equity(), dollars(100));
        assert!(table.has_active_bet(BetType::PassLine));
        assert!(!table.has_active_bet(BetType::DontPass));
        assert_eq!(action.by_bet[&BetType::PassLine], dollars(10));
        assert!((action.weighted_house_edge() - 1.41).abs() < 1e-9);
    }

    #[test]
    fn test_rejected_bets_change_nothing() {
        let mut bets = BetManager::new(TableRules::default());
        let mut bankroll = dollars(20);
        let mut action = ActionSummary::default();
        let mut table = BetInterface::new(&mut bets, &mut bankroll, &mut action, GamePhase::Point(6));

        assert_eq!(
            table.try_place_bet(Bet::place(dollars(30), 6).unwrap()),
            Err(PlacementError::InsufficientBankroll {
                amount: dollars(30),
                bankroll: dollars(20)
            })
        );
        // Under the table minimum
        assert!(!table.place_bet(Bet::place(dollars(3), 6).unwrap()));
        // Odds with nothing to back
        assert!(!table.place_bet(Bet::odds(dollars(10), 6).unwrap()));

        assert_eq!(table.bankroll(), dollars(20));
        assert_eq!(table.at_risk(), Chips::ZERO);
        assert_eq!(table.point(), Some(6));
        assert_eq!(action.total(), Chips::ZERO);
    }

    #[test]
    fn test_has_bet_on_number() {
        let mut bets = BetManager::new(TableRules::default());
        let mut bankroll = dollars(100);
        let mut action = ActionSummary::default();
        let mut table = BetInterface::new(&mut bets, &mut bankroll, &mut action, GamePhase::Point(4));

        table.place_bet(Bet::place(dollars(12), 8).unwrap());
        assert!(table.has_bet_on(BetType::Place, 8));
        assert!(!table.has_bet_on(BetType::Place, 6));
        assert!(!table.has_bet_on(BetType::Hardway, 8));
        assert_eq!(table.active_bets_of(BetType::Place).count(), 1);
    }

    #[test]
    fn test_instantiate_keeps_name() {
        let strategy = RegressAndPress::default();
        let mut instance = strategy.instantiate();
        instance.as_observer().on_seven_out(6);
        assert_eq!(instance.name(), "Regress and Press");
        assert_eq!(DynStrategy::name(&strategy), "Regress and Press");
    }
}
