//! Session mode: many short runs of a fixed number of shooters.

use crate::dice::DiceError;
use crate::runner::{generate_sequence, SessionPlan, SimulationConfig, StrategyRunner, Termination};
use crate::statistics::summarize_sessions;
use crapsim_types::{
    ActionSummary, SessionResult, SessionSimulationResult, StrategyResult, ROLLS_PER_SHOOTER_ESTIMATE,
};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Seed of session `index`: the base seed offset by the index.
pub fn session_seed(base: Option<u64>, index: u32) -> Option<u64> {
    base.map(|seed| seed.wrapping_add(u64::from(index)))
}

fn session_result(session_index: u32, seed: Option<u64>, run: &StrategyResult) -> SessionResult {
    SessionResult {
        session_index,
        seed,
        strategy_name: run.strategy_name.clone(),
        starting_bankroll: run.starting_bankroll,
        final_equity: run.final_equity,
        net_change: run.net_change,
        roi_percent: run.roi_percent,
        total_rolls: run.total_rolls,
        total_shooters: run.total_shooters,
        went_bankrupt: run.went_bankrupt,
        termination: run.termination,
        total_action: run.total_action,
        weighted_house_edge: run.weighted_house_edge,
    }
}

/// Run every strategy for `plan.sessions` sessions.
///
/// Each session draws its own sequence, shared by all strategies within it.
/// Returns one summary per strategy, in configuration order.
pub fn run_sessions(
    config: &SimulationConfig,
    plan: SessionPlan,
) -> Result<Vec<SessionSimulationResult>, DiceError> {
    let session_config = SimulationConfig {
        termination: Some(Termination::Shooters(plan.shooters_per_session)),
        dice_sequence: None,
        session_plan: None,
        ..config.clone()
    };
    let runner = StrategyRunner::new(session_config);
    let num_rolls = plan
        .shooters_per_session
        .saturating_mul(ROLLS_PER_SHOOTER_ESTIMATE);
    info!(
        sessions = plan.sessions,
        shooters_per_session = plan.shooters_per_session,
        strategies = config.strategies.len(),
        seed = ?config.seed,
        "running sessions"
    );

    let run_session = |index: u32| {
        let seed = session_seed(config.seed, index);
        let sequence = generate_sequence(seed, num_rolls);
        let runs = runner.run_on(&sequence)?;
        debug!(session = index, ?seed, "session finished");
        Ok((index, seed, runs))
    };

    #[cfg(feature = "parallel")]
    let sessions = (0..plan.sessions)
        .into_par_iter()
        .map(run_session)
        .collect::<Result<Vec<_>, DiceError>>()?;
    #[cfg(not(feature = "parallel"))]
    let sessions = (0..plan.sessions)
        .map(run_session)
        .collect::<Result<Vec<_>, DiceError>>()?;

    let results: Vec<SessionSimulationResult> = config
        .strategies
        .iter()
        .enumerate()
        .map(|(position, strategy)| {
            let mut action = ActionSummary::default();
            let per_session = sessions
                .iter()
                .map(|(index, seed, runs)| {
                    let run = &runs[position];
                    action.merge(&run.action);
                    session_result(*index, *seed, run)
                })
                .collect();
            summarize_sessions(
                strategy.name(),
                plan.shooters_per_session,
                config.starting_bankroll,
                per_session,
                action,
            )
        })
        .collect();

    for result in &results {
        info!(
            strategy = %result.strategy_name,
            mean_net = result.net_change.mean,
            median_net = result.net_change.median,
            winning = result.winning_sessions,
            losing = result.losing_sessions,
            bankrupt = result.bankrupt_sessions,
            edge = result.weighted_house_edge,
            "sessions summarized"
        );
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{NoBet, PassLineOdds};
    use crapsim_types::{Chips, TerminationReason};

    #[test]
    fn test_session_seed_offsets_base() {
        assert_eq!(session_seed(Some(100), 0), Some(100));
        assert_eq!(session_seed(Some(100), 7), Some(107));
        assert_eq!(session_seed(Some(u64::MAX), 1), Some(0));
        assert_eq!(session_seed(None, 3), None);
    }

    #[test]
    fn test_sessions_are_reproducible() {
        let config = SimulationConfig::new()
            .with_strategy(PassLineOdds::default())
            .with_strategy(NoBet)
            .with_seed(42);
        let plan = SessionPlan {
            shooters_per_session: 5,
            sessions: 8,
        };
        let first = run_sessions(&config, plan).unwrap();
        let second = run_sessions(&config, plan).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);

        let pass = &first[0];
        assert_eq!(pass.session_count, 8);
        assert_eq!(pass.sessions.len(), 8);
        assert_eq!(pass.sessions[3].seed, Some(45));
        assert_eq!(
            pass.winning_sessions + pass.losing_sessions + pass.break_even_sessions,
            8
        );
        assert!(pass.weighted_house_edge > 0.0 && pass.weighted_house_edge < 1.41 + 1e-9);
        assert_eq!(
            pass.total_action,
            pass.sessions.iter().map(|s| s.total_action).sum::<Chips>()
        );
    }

    #[test]
    fn test_strategies_share_each_sessions_dice() {
        let config = SimulationConfig::new()
            .with_strategy(NoBet)
            .with_strategy(NoBet)
            .with_seed(7);
        let plan = SessionPlan {
            shooters_per_session: 3,
            sessions: 4,
        };
        let results = run_sessions(&config, plan).unwrap();
        for (a, b) in results[0].sessions.iter().zip(&results[1].sessions) {
            assert_eq!(a.total_rolls, b.total_rolls);
            assert_eq!(a.total_shooters, b.total_shooters);
        }
        for session in &results[0].sessions {
            assert_eq!(session.net_change, Chips::ZERO);
            assert!(matches!(
                session.termination,
                TerminationReason::ShooterLimit | TerminationReason::DiceExhausted
            ));
        }
    }
}
