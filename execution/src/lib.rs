//! Craps simulation engine.
//!
//! Dice come from a [dice::DiceProvider], the [game::CrapsGame] state machine
//! tracks the come-out/point cycle, [bets::BetManager] resolves wagers with
//! exact payouts, and [runner::StrategyRunner] drives any number of
//! [strategy::Strategy] implementations over identical dice.

pub mod bankroll;
pub mod bets;
pub mod dice;
pub mod game;
pub mod runner;
pub mod session;
pub mod statistics;
pub mod strategy;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use bankroll::BankrollTracker;
pub use bets::{Bet, BetError, BetKind, BetManager, PlacementError, Settlement};
pub use dice::{DiceError, DiceProvider, DiceRollSequence, RandomDiceProvider, SequenceDiceProvider};
pub use game::{CrapsGame, GameEvent, GameObserver, RollOutcome};
pub use runner::{run_strategy, SessionPlan, SimulationConfig, StrategyRunner, Termination};
pub use session::run_sessions;
pub use strategy::{BetInterface, DynStrategy, Strategy, StrategyInstance};
