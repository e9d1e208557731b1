//! Come-out/point state machine.
//!
//! [CrapsGame::process_roll] records a roll, advances the phase and returns
//! the events it produced. The game keeps no callback registry: the caller
//! fans events out to its [GameObserver]s with [dispatch].

use crate::dice::{DiceError, DiceProvider};
use crapsim_types::{is_point_number, DiceRoll, GamePhase};
use tracing::{debug, trace};

/// Something that happened on a roll, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The dice landed. Always the first event of a roll.
    Rolled(DiceRoll),
    PointEstablished(u8),
    /// The shooter repeated the point and keeps the dice.
    PointMade(u8),
    /// A seven while the point was on; the dice pass to a new shooter.
    SevenOut { point: u8 },
}

/// Outcome of a single roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    pub roll: DiceRoll,
    /// Phase the roll was thrown in. Bets resolve against this phase.
    pub phase_before: GamePhase,
    pub phase_after: GamePhase,
    pub events: Vec<GameEvent>,
}

impl RollOutcome {
    pub fn point_established(&self) -> Option<u8> {
        self.events.iter().find_map(|event| match event {
            GameEvent::PointEstablished(point) => Some(*point),
            _ => None,
        })
    }

    pub fn point_made(&self) -> Option<u8> {
        self.events.iter().find_map(|event| match event {
            GameEvent::PointMade(point) => Some(*point),
            _ => None,
        })
    }

    pub fn is_seven_out(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, GameEvent::SevenOut { .. }))
    }
}

/// Subscriber to game events. All hooks are optional.
pub trait GameObserver {
    fn on_roll(&mut self, _roll: &DiceRoll) {}
    fn on_point_established(&mut self, _point: u8) {}
    fn on_point_made(&mut self, _point: u8) {}
    fn on_seven_out(&mut self, _point: u8) {}
}

/// Deliver `events` to `observers`, event by event, in subscription order.
pub fn dispatch(events: &[GameEvent], observers: &mut [&mut dyn GameObserver]) {
    for event in events {
        for observer in observers.iter_mut() {
            match event {
                GameEvent::Rolled(roll) => observer.on_roll(roll),
                GameEvent::PointEstablished(point) => observer.on_point_established(*point),
                GameEvent::PointMade(point) => observer.on_point_made(*point),
                GameEvent::SevenOut { point } => observer.on_seven_out(*point),
            }
        }
    }
}

/// Craps game controller tracking phase, point and shooter roll count.
#[derive(Clone, Debug, Default)]
pub struct CrapsGame {
    phase: GamePhase,
    roll_history: Vec<DiceRoll>,
    shooter_rolls: u64,
}

impl CrapsGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn point(&self) -> Option<u8> {
        self.phase.point()
    }

    pub fn is_come_out(&self) -> bool {
        self.phase.is_come_out()
    }

    pub fn is_point_phase(&self) -> bool {
        self.phase.is_point()
    }

    /// Rolls thrown by the current shooter, including points made.
    pub fn shooter_rolls(&self) -> u64 {
        self.shooter_rolls
    }

    pub fn roll_history(&self) -> &[DiceRoll] {
        &self.roll_history
    }

    pub fn last_roll(&self) -> Option<&DiceRoll> {
        self.roll_history.last()
    }

    /// Draw the next roll from `provider` and process it.
    pub fn roll_dice<P: DiceProvider + ?Sized>(
        &mut self,
        provider: &mut P,
    ) -> Result<RollOutcome, DiceError> {
        let roll = provider.roll()?;
        Ok(self.process_roll(roll))
    }

    /// Record `roll` and advance the phase.
    pub fn process_roll(&mut self, roll: DiceRoll) -> RollOutcome {
        self.roll_history.push(roll);
        self.shooter_rolls += 1;
        trace!(%roll, phase = %self.phase, "roll");

        let phase_before = self.phase;
        let mut events = vec![GameEvent::Rolled(roll)];
        if let Some(event) = self.update_phase(roll.total()) {
            events.push(event);
        }

        RollOutcome {
            roll,
            phase_before,
            phase_after: self.phase,
            events,
        }
    }

    /// Update phase and point after a roll.
    fn update_phase(&mut self, total: u8) -> Option<GameEvent> {
        match self.phase {
            GamePhase::ComeOut => {
                // Naturals (7, 11) and craps (2, 3, 12) leave the come-out in place.
                if is_point_number(total) {
                    self.phase = GamePhase::Point(total);
                    debug!(point = total, "point established");
                    Some(GameEvent::PointEstablished(total))
                } else {
                    None
                }
            }
            GamePhase::Point(point) => {
                if total == point {
                    self.phase = GamePhase::ComeOut;
                    debug!(point, "point made");
                    Some(GameEvent::PointMade(point))
                } else if total == 7 {
                    self.phase = GamePhase::ComeOut;
                    debug!(point, shooter_rolls = self.shooter_rolls, "seven out");
                    self.shooter_rolls = 0;
                    Some(GameEvent::SevenOut { point })
                } else {
                    None
                }
            }
        }
    }
}
