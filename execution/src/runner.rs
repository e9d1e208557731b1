//! Single-strategy runs and multi-strategy comparisons.
//!
//! Every run owns its own game, bet manager, tracker and strategy state.
//! Strategies in one comparison replay the same dice sequence through
//! independent cursors, so they are compared on identical luck.

use crate::bankroll::{roi_percent, BankrollTracker};
use crate::bets::BetManager;
use crate::dice::{DiceError, DiceProvider, DiceRollSequence};
use crate::game::{dispatch, CrapsGame, GameObserver};
use crate::strategy::{BetInterface, DynStrategy};
use crapsim_types::{
    ActionSummary, Chips, DiceRoll, StrategyResult, TableRules, TerminationReason,
    DEFAULT_BANKROLL, DEFAULT_SEQUENCE_LENGTH, MAX_ROLLS_UNBOUNDED, MAX_SHOOTERS_UNBOUNDED,
    ROLLS_PER_SHOOTER_ESTIMATE,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// When a run stops, besides bankruptcy and dice exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Rolls(u64),
    Shooters(u64),
    /// Whichever cap is hit first.
    RollsOrShooters { rolls: u64, shooters: u64 },
}

impl Termination {
    pub fn max_rolls(&self) -> u64 {
        match *self {
            Termination::Rolls(rolls) | Termination::RollsOrShooters { rolls, .. } => rolls,
            Termination::Shooters(_) => MAX_ROLLS_UNBOUNDED,
        }
    }

    pub fn max_shooters(&self) -> u64 {
        match *self {
            Termination::Shooters(shooters) | Termination::RollsOrShooters { shooters, .. } => {
                shooters
            }
            Termination::Rolls(_) => MAX_SHOOTERS_UNBOUNDED,
        }
    }

    /// Rolls to generate so the run can usually reach its cap.
    pub fn sequence_length(&self) -> u64 {
        match *self {
            Termination::Rolls(rolls) | Termination::RollsOrShooters { rolls, .. } => rolls,
            Termination::Shooters(shooters) => shooters.saturating_mul(ROLLS_PER_SHOOTER_ESTIMATE),
        }
    }
}

/// Session mode: `sessions` independent sessions of `shooters_per_session`
/// shooters each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionPlan {
    pub shooters_per_session: u64,
    pub sessions: u32,
}

/// Configuration for a strategy simulation.
#[derive(Clone)]
pub struct SimulationConfig {
    pub strategies: Vec<Arc<dyn DynStrategy>>,
    pub termination: Option<Termination>,
    pub starting_bankroll: Chips,
    pub rules: TableRules,
    pub seed: Option<u64>,
    /// Pre-built rolls replayed instead of generating a sequence.
    pub dice_sequence: Option<DiceRollSequence>,
    pub session_plan: Option<SessionPlan>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strategies: Vec::new(),
            termination: None,
            starting_bankroll: Chips::from_dollars(DEFAULT_BANKROLL),
            rules: TableRules::default(),
            seed: None,
            dice_sequence: None,
            session_plan: None,
        }
    }
}

impl fmt::Debug for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("SimulationConfig")
            .field("strategies", &names)
            .field("termination", &self.termination)
            .field("starting_bankroll", &self.starting_bankroll)
            .field("rules", &self.rules)
            .field("seed", &self.seed)
            .field("dice_sequence", &self.dice_sequence.as_ref().map(|s| s.len()))
            .field("session_plan", &self.session_plan)
            .finish()
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: impl DynStrategy + 'static) -> Self {
        self.strategies.push(Arc::new(strategy));
        self
    }

    pub fn with_shared_strategy(mut self, strategy: Arc<dyn DynStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn with_rolls(self, rolls: u64) -> Self {
        self.with_termination(Termination::Rolls(rolls))
    }

    pub fn with_shooters(self, shooters: u64) -> Self {
        self.with_termination(Termination::Shooters(shooters))
    }

    pub fn with_bankroll(mut self, bankroll: Chips) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    pub fn with_rules(mut self, rules: TableRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dice_sequence(mut self, sequence: DiceRollSequence) -> Self {
        self.dice_sequence = Some(sequence);
        self
    }

    pub fn with_sessions(mut self, plan: SessionPlan) -> Self {
        self.session_plan = Some(plan);
        self
    }

    /// Rolls to generate for a single run.
    pub fn sequence_length(&self) -> u64 {
        self.termination
            .map_or(DEFAULT_SEQUENCE_LENGTH, |t| t.sequence_length())
    }
}

/// Generate `num_rolls` rolls, reproducibly when `seed` is set.
pub fn generate_sequence(seed: Option<u64>, num_rolls: u64) -> DiceRollSequence {
    let mut sequence = match seed {
        Some(seed) => DiceRollSequence::seeded(seed),
        None => DiceRollSequence::new(),
    };
    sequence.generate(num_rolls as usize);
    sequence
}

/// Per-run dice statistics collected from game events.
#[derive(Clone, Debug)]
struct RunStats {
    points_hit: u64,
    seven_outs: u64,
    shooter_rolls: u64,
    /// Most rolls thrown by one shooter. A made point keeps the shooter, so
    /// the streak only resets on a seven-out.
    longest_roll: u64,
    distribution: BTreeMap<u8, u64>,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            points_hit: 0,
            seven_outs: 0,
            shooter_rolls: 0,
            longest_roll: 0,
            distribution: (2..=12).map(|total| (total, 0)).collect(),
        }
    }
}

impl GameObserver for RunStats {
    fn on_roll(&mut self, roll: &DiceRoll) {
        *self.distribution.entry(roll.total()).or_insert(0) += 1;
        self.shooter_rolls += 1;
        self.longest_roll = self.longest_roll.max(self.shooter_rolls);
    }

    fn on_point_made(&mut self, _point: u8) {
        self.points_hit += 1;
    }

    fn on_seven_out(&mut self, _point: u8) {
        self.seven_outs += 1;
        self.shooter_rolls = 0;
    }
}

/// Run one strategy against `dice` until a cap, bankruptcy or exhaustion.
///
/// Exhaustion ends the run cleanly; any other provider failure is returned.
pub fn run_strategy<P: DiceProvider + ?Sized>(
    strategy: &dyn DynStrategy,
    dice: &mut P,
    starting_bankroll: Chips,
    rules: &TableRules,
    termination: Option<Termination>,
) -> Result<StrategyResult, DiceError> {
    let max_rolls = termination.map_or(MAX_ROLLS_UNBOUNDED, |t| t.max_rolls());
    let max_shooters = termination.map_or(MAX_SHOOTERS_UNBOUNDED, |t| t.max_shooters());

    let mut instance = strategy.instantiate();
    let mut game = CrapsGame::new();
    let mut bets = BetManager::new(rules.clone());
    let mut tracker = BankrollTracker::new(starting_bankroll);
    let mut stats = RunStats::default();
    let mut action = ActionSummary::default();
    let mut bankroll = starting_bankroll;
    let mut rolls = 0u64;
    let mut shooter = 1u64;

    let reason = loop {
        if rolls >= max_rolls {
            break TerminationReason::RollLimit;
        }
        if shooter > max_shooters {
            break TerminationReason::ShooterLimit;
        }
        if !bankroll.is_positive() && bets.total_at_risk().is_zero() {
            break TerminationReason::Bankrupt;
        }

        // Only a player with cash may bet; chips on the table still resolve.
        if bankroll.is_positive() {
            let mut table = BetInterface::new(&mut bets, &mut bankroll, &mut action, game.phase());
            match game.point() {
                None => instance.on_come_out_roll(&mut table),
                Some(point) => instance.on_point_roll(&mut table, point),
            }
        }

        let outcome = match game.roll_dice(dice) {
            Ok(outcome) => outcome,
            Err(DiceError::Exhausted { rolls: available }) => {
                warn!(
                    strategy = %instance.name(),
                    available,
                    max_rolls,
                    "dice sequence exhausted before the run finished"
                );
                break TerminationReason::DiceExhausted;
            }
            Err(err) => {
                warn!(strategy = %instance.name(), %err, "dice provider failed");
                return Err(err);
            }
        };
        rolls += 1;

        let bankroll_before = bankroll;
        let bets_before = bets.total_at_risk();
        let settled = bets.resolve_all(&outcome.roll, outcome.phase_before);
        for settlement in &settled {
            bankroll += settlement.returned();
        }
        tracker.record_roll(
            &outcome.roll,
            bankroll_before,
            bankroll,
            bets_before,
            bets.total_at_risk(),
        );

        instance.on_roll_complete(&outcome, &settled);
        dispatch(
            &outcome.events,
            &mut [&mut tracker, &mut stats, instance.as_observer()],
        );
        if outcome.is_seven_out() {
            shooter += 1;
        }
    };

    let final_equity = bankroll + bets.total_at_risk();
    let net_change = final_equity - starting_bankroll;
    debug!(
        strategy = %instance.name(),
        %reason,
        rolls,
        %final_equity,
        "run finished"
    );

    let (roll_numbers, equity_series) = tracker.equity_series();
    Ok(StrategyResult {
        strategy_name: instance.name(),
        starting_bankroll,
        final_equity,
        net_change,
        roi_percent: roi_percent(net_change, starting_bankroll),
        rolls: roll_numbers,
        equity_series,
        shooters: tracker.shooters(),
        shooter_boundaries: tracker.shooter_boundaries(),
        session_stats: tracker.session_stats(),
        total_rolls: rolls,
        total_shooters: tracker.total_shooters(),
        points_hit: stats.points_hit,
        seven_outs: stats.seven_outs,
        longest_roll: stats.longest_roll,
        roll_distribution: stats.distribution,
        went_bankrupt: reason == TerminationReason::Bankrupt,
        termination: reason,
        total_action: action.total(),
        weighted_house_edge: action.weighted_house_edge(),
        action,
    })
}

/// Runs every configured strategy on the same dice.
#[derive(Clone, Debug)]
pub struct StrategyRunner {
    config: SimulationConfig,
}

impl StrategyRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The configured sequence, or a freshly generated one.
    pub fn prepare_sequence(&self) -> DiceRollSequence {
        match &self.config.dice_sequence {
            Some(sequence) => sequence.clone(),
            None => generate_sequence(self.config.seed, self.config.sequence_length()),
        }
    }

    /// Run every strategy on one shared sequence.
    pub fn run(&self) -> Result<Vec<StrategyResult>, DiceError> {
        let sequence = self.prepare_sequence();
        info!(
            strategies = self.config.strategies.len(),
            rolls = sequence.len(),
            seed = ?sequence.seed(),
            "running comparison"
        );
        let results = self.run_on(&sequence)?;
        for result in &results {
            info!(
                strategy = %result.strategy_name,
                net = %result.net_change,
                roi = result.roi_percent,
                termination = %result.termination,
                "strategy finished"
            );
        }
        Ok(results)
    }

    /// Run every strategy on `sequence`, each through its own cursor.
    pub fn run_on(&self, sequence: &DiceRollSequence) -> Result<Vec<StrategyResult>, DiceError> {
        let config = &self.config;
        let run_one = |strategy: &Arc<dyn DynStrategy>| {
            let mut provider = sequence.provider();
            run_strategy(
                strategy.as_ref(),
                &mut provider,
                config.starting_bankroll,
                &config.rules,
                config.termination,
            )
        };

        #[cfg(feature = "parallel")]
        {
            config.strategies.par_iter().map(run_one).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            config.strategies.iter().map(run_one).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{NoBet, PassLineOdds, Place68};
    use crapsim_types::{BetType, InvalidDie};

    fn dollars(n: i64) -> Chips {
        Chips::from_dollars(n)
    }

    fn scripted(pairs: &[(u8, u8)]) -> DiceRollSequence {
        DiceRollSequence::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_termination_caps() {
        assert_eq!(Termination::Rolls(50).max_rolls(), 50);
        assert_eq!(Termination::Rolls(50).max_shooters(), MAX_SHOOTERS_UNBOUNDED);
        assert_eq!(Termination::Shooters(10).sequence_length(), 150);
        let both = Termination::RollsOrShooters {
            rolls: 40,
            shooters: 3,
        };
        assert_eq!((both.max_rolls(), both.max_shooters()), (40, 3));
        assert_eq!(SimulationConfig::new().sequence_length(), DEFAULT_SEQUENCE_LENGTH);
    }

    #[test]
    fn test_roll_limit() {
        let sequence = generate_sequence(Some(1), 100);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &NoBet,
            &mut provider,
            dollars(100),
            &TableRules::default(),
            Some(Termination::Rolls(25)),
        )
        .unwrap();
        assert_eq!(result.total_rolls, 25);
        assert_eq!(result.termination, TerminationReason::RollLimit);
        assert_eq!(result.equity_series.len(), 26);
        assert_eq!(provider.remaining(), 75);
    }

    #[test]
    fn test_shooter_limit_stops_after_seven_out() {
        // Shooter 1: point 4, seven out. Shooter 2: natural, point 6, seven out.
        let sequence = scripted(&[(2, 2), (3, 4), (5, 6), (3, 3), (1, 6), (5, 5)]);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &NoBet,
            &mut provider,
            dollars(100),
            &TableRules::default(),
            Some(Termination::Shooters(2)),
        )
        .unwrap();
        assert_eq!(result.termination, TerminationReason::ShooterLimit);
        assert_eq!(result.total_rolls, 5);
        assert_eq!(result.total_shooters, 2);
        assert_eq!(result.seven_outs, 2);
        assert_eq!(result.shooter_boundaries, vec![2, 5]);
        assert_eq!(result.longest_roll, 3);
    }

    #[test]
    fn test_made_points_extend_longest_roll() {
        // Two points made and a natural: one shooter throws all five rolls
        let sequence = scripted(&[(2, 2), (1, 3), (3, 3), (4, 2), (3, 4)]);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &NoBet,
            &mut provider,
            dollars(100),
            &TableRules::default(),
            None,
        )
        .unwrap();
        assert_eq!(result.points_hit, 2);
        assert_eq!(result.seven_outs, 0);
        assert_eq!(result.longest_roll, 5);
    }

    #[test]
    fn test_exhaustion_is_clean_termination() {
        let sequence = scripted(&[(3, 4), (2, 2)]);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &PassLineOdds::new(dollars(10), 2),
            &mut provider,
            dollars(100),
            &TableRules::default(),
            Some(Termination::Rolls(10)),
        )
        .unwrap();
        assert_eq!(result.termination, TerminationReason::DiceExhausted);
        assert_eq!(result.total_rolls, 2);
        // Won $10 on the natural; pass and odds on the 4 still count as equity
        assert_eq!(result.final_equity, dollars(110));
        assert_eq!(result.total_action, dollars(40));
        assert!(!result.went_bankrupt);
    }

    /// Serves its rolls, then reports a bad face instead of running out.
    struct FaultyDice(Vec<DiceRoll>);

    impl DiceProvider for FaultyDice {
        fn roll(&mut self) -> Result<DiceRoll, DiceError> {
            self.0
                .pop()
                .ok_or(DiceError::InvalidDie(InvalidDie { face: 9 }))
        }
    }

    #[test]
    fn test_provider_failure_is_an_error() {
        let mut dice = FaultyDice(vec![DiceRoll::new(2, 2).unwrap()]);
        let result = run_strategy(
            &PassLineOdds::default(),
            &mut dice,
            dollars(100),
            &TableRules::default(),
            Some(Termination::Rolls(10)),
        );
        assert_eq!(
            result,
            Err(DiceError::InvalidDie(InvalidDie { face: 9 }))
        );
    }

    #[test]
    fn test_pass_line_odds_flow() {
        // come-out 6, odds placed, point made
        let sequence = scripted(&[(3, 3), (5, 5), (4, 2), (6, 1)]);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &PassLineOdds::new(dollars(10), 3),
            &mut provider,
            dollars(1_000),
            &TableRules::default(),
            None,
        )
        .unwrap();
        // Pass +$10, odds $30 at 6:5 = +$36, then a $10 pass wins on the 7.
        // A last pass bet goes up before the dice run out.
        assert_eq!(result.net_change, dollars(56));
        assert_eq!(result.termination, TerminationReason::DiceExhausted);
        assert_eq!(result.points_hit, 1);
        assert_eq!(result.seven_outs, 0);
        assert_eq!(result.action.by_bet[&BetType::Odds], dollars(30));
        assert_eq!(result.total_action, dollars(60));
        assert_eq!(result.roll_distribution[&6], 2);
        assert_eq!(result.roll_distribution[&2], 0);
    }

    #[test]
    fn test_bankruptcy() {
        // Place 6 & 8 with $24 until the sevens take it
        let sequence = scripted(&[(2, 2), (3, 4), (2, 3), (4, 3), (1, 1)]);
        let mut provider = sequence.provider();
        let result = run_strategy(
            &Place68::new(dollars(12)),
            &mut provider,
            dollars(24),
            &TableRules::default(),
            None,
        )
        .unwrap();
        assert_eq!(result.termination, TerminationReason::Bankrupt);
        assert!(result.went_bankrupt);
        assert_eq!(result.final_equity, Chips::ZERO);
        assert_eq!(result.total_rolls, 2);
    }

    #[test]
    fn test_runner_uses_same_dice_for_every_strategy() {
        let config = SimulationConfig::new()
            .with_strategy(NoBet)
            .with_strategy(PassLineOdds::default())
            .with_strategy(Place68::default())
            .with_rolls(200)
            .with_seed(99);
        let runner = StrategyRunner::new(config);
        let results = runner.run().unwrap();
        assert_eq!(results.len(), 3);

        let first = &results[0].roll_distribution;
        for result in &results[1..] {
            if result.termination == TerminationReason::RollLimit {
                assert_eq!(&result.roll_distribution, first);
            }
        }
        assert_eq!(results[0].net_change, Chips::ZERO);

        // Same seed, same results
        assert_eq!(runner.run().unwrap(), results);
    }
}
