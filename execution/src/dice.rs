//! Dice generation and replay.
//!
//! Every strategy in a comparison must see the same rolls. A
//! [DiceRollSequence] holds one immutable list of rolls and mints any number
//! of [SequenceDiceProvider]s over it, each with its own cursor.

use crapsim_types::{DiceRoll, InvalidDie};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A replayed sequence has no rolls left. Runs treat this as a clean stop.
    #[error("dice sequence exhausted after {rolls} rolls")]
    Exhausted { rolls: usize },
    #[error(transparent)]
    InvalidDie(#[from] InvalidDie),
}

/// Source of dice rolls.
pub trait DiceProvider {
    /// Produce the next `(die1, die2)` pair.
    fn roll(&mut self) -> Result<DiceRoll, DiceError>;
}

impl<P: DiceProvider + ?Sized> DiceProvider for Box<P> {
    fn roll(&mut self) -> Result<DiceRoll, DiceError> {
        (**self).roll()
    }
}

/// Roll a single die (1-6).
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

/// Roll two independent, uniform dice.
pub fn roll_pair<R: Rng + ?Sized>(rng: &mut R) -> DiceRoll {
    let die1 = roll_die(rng);
    let die2 = roll_die(rng);
    // Faces come from 1..=6, so construction cannot fail.
    DiceRoll::new(die1, die2).unwrap_or_else(|_| unreachable!("die faces are always 1-6"))
}

/// Draws each die uniformly and independently from an owned RNG.
#[derive(Clone, Debug)]
pub struct RandomDiceProvider<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomDiceProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDiceProvider<ChaCha8Rng> {
    /// Deterministic provider: the same seed always yields the same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DiceProvider for RandomDiceProvider<R> {
    fn roll(&mut self) -> Result<DiceRoll, DiceError> {
        Ok(roll_pair(&mut self.rng))
    }
}

/// Replays rolls from a shared sequence.
///
/// Fails with [DiceError::Exhausted] once every roll has been returned.
#[derive(Clone, Debug)]
pub struct SequenceDiceProvider {
    rolls: Arc<Vec<DiceRoll>>,
    index: usize,
}

impl SequenceDiceProvider {
    pub fn new(rolls: Vec<DiceRoll>) -> Self {
        Self {
            rolls: Arc::new(rolls),
            index: 0,
        }
    }

    /// Rewind to the first roll.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len() - self.index
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

impl DiceProvider for SequenceDiceProvider {
    fn roll(&mut self) -> Result<DiceRoll, DiceError> {
        let roll = self
            .rolls
            .get(self.index)
            .copied()
            .ok_or(DiceError::Exhausted { rolls: self.index })?;
        self.index += 1;
        Ok(roll)
    }
}

/// A recorded or generated list of rolls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiceRollSequence {
    rolls: Arc<Vec<DiceRoll>>,
    seed: Option<u64>,
}

impl DiceRollSequence {
    /// Empty sequence without a seed; generation draws from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty sequence whose generation is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rolls: Arc::default(),
            seed: Some(seed),
        }
    }

    /// Generate `num_rolls` rolls from `seed`.
    pub fn from_seed(seed: u64, num_rolls: usize) -> Self {
        let mut sequence = Self::seeded(seed);
        sequence.generate(num_rolls);
        sequence
    }

    /// Wrap pre-recorded rolls.
    pub fn from_rolls(rolls: Vec<DiceRoll>) -> Self {
        Self {
            rolls: Arc::new(rolls),
            seed: None,
        }
    }

    /// Wrap pre-recorded `(die1, die2)` pairs, validating each face.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, DiceError> {
        let rolls = pairs
            .iter()
            .map(|&pair| DiceRoll::try_from(pair))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rolls(rolls))
    }

    /// Replace the contents with `num_rolls` fresh rolls.
    ///
    /// With a seed, every call produces the same rolls. Without one, a new
    /// entropy-seeded generator is used.
    pub fn generate(&mut self, num_rolls: usize) {
        match self.seed {
            Some(seed) => self.generate_with(&mut ChaCha8Rng::seed_from_u64(seed), num_rolls),
            None => self.generate_with(&mut ChaCha8Rng::from_entropy(), num_rolls),
        }
    }

    /// Replace the contents with `num_rolls` rolls drawn from a caller-owned RNG.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, num_rolls: usize) {
        let rolls = (0..num_rolls).map(|_| roll_pair(rng)).collect();
        self.rolls = Arc::new(rolls);
    }

    /// Append a roll, for example one observed at a live table.
    pub fn record_roll(&mut self, die1: u8, die2: u8) -> Result<(), DiceError> {
        let roll = DiceRoll::new(die1, die2)?;
        Arc::make_mut(&mut self.rolls).push(roll);
        Ok(())
    }

    /// A provider replaying this sequence from the beginning.
    ///
    /// Providers share the roll data but never each other's cursor.
    pub fn provider(&self) -> SequenceDiceProvider {
        SequenceDiceProvider {
            rolls: Arc::clone(&self.rolls),
            index: 0,
        }
    }

    pub fn clear(&mut self) {
        Arc::make_mut(&mut self.rolls).clear();
    }

    pub fn rolls(&self) -> &[DiceRoll] {
        &self.rolls
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let first = DiceRollSequence::from_seed(42, 500);
        let second = DiceRollSequence::from_seed(42, 500);
        assert_eq!(first.rolls(), second.rolls());
        assert_eq!(first.len(), 500);

        // Regenerating a seeded sequence reproduces it too
        let mut again = DiceRollSequence::seeded(42);
        again.generate(500);
        again.generate(500);
        assert_eq!(first.rolls(), again.rolls());
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = DiceRollSequence::from_seed(1, 100);
        let second = DiceRollSequence::from_seed(2, 100);
        assert_ne!(first.rolls(), second.rolls());
    }

    #[test]
    fn test_faces_in_range() {
        let sequence = DiceRollSequence::from_seed(7, 5_000);
        let mut seen = [false; 7];
        for roll in sequence.rolls() {
            assert!((1..=6).contains(&roll.die1()));
            assert!((1..=6).contains(&roll.die2()));
            seen[roll.die1() as usize] = true;
        }
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_providers_are_independent() {
        let sequence = DiceRollSequence::from_seed(9, 20);
        let mut a = sequence.provider();
        let mut b = sequence.provider();

        let first_a: Vec<_> = (0..10).map(|_| a.roll().unwrap()).collect();
        let first_b: Vec<_> = (0..10).map(|_| b.roll().unwrap()).collect();
        assert_eq!(first_a, first_b);
        assert_eq!(first_a, sequence.rolls()[..10]);

        // Advancing one cursor leaves the other untouched
        a.roll().unwrap();
        assert_eq!(a.remaining(), 9);
        assert_eq!(b.remaining(), 10);
    }

    #[test]
    fn test_replay_exhausts_exactly_at_end() {
        let sequence =
            DiceRollSequence::from_pairs(&[(1, 1), (2, 3), (6, 6), (4, 3), (5, 5)]).unwrap();
        let mut provider = sequence.provider();
        for _ in 0..5 {
            assert!(provider.roll().is_ok());
        }
        assert_eq!(provider.roll(), Err(DiceError::Exhausted { rolls: 5 }));
        assert_eq!(provider.roll(), Err(DiceError::Exhausted { rolls: 5 }));

        provider.reset();
        assert_eq!(provider.roll().unwrap(), DiceRoll::new(1, 1).unwrap());
    }

    #[test]
    fn test_record_roll_does_not_affect_minted_providers() {
        let mut sequence = DiceRollSequence::new();
        sequence.record_roll(3, 4).unwrap();
        let mut provider = sequence.provider();
        sequence.record_roll(2, 2).unwrap();
        assert!(sequence.record_roll(0, 2).is_err());

        assert_eq!(sequence.len(), 2);
        assert_eq!(provider.remaining(), 1);
        provider.roll().unwrap();
        assert!(matches!(provider.roll(), Err(DiceError::Exhausted { .. })));
    }

    #[test]
    fn test_random_provider_seeded() {
        let mut a = RandomDiceProvider::seeded(5);
        let mut b = RandomDiceProvider::seeded(5);
        for _ in 0..100 {
            assert_eq!(a.roll().unwrap(), b.roll().unwrap());
        }
    }

    #[test]
    fn test_generate_with_matches_seeded_provider() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut sequence = DiceRollSequence::new();
        sequence.generate_with(&mut rng, 50);

        let mut provider = RandomDiceProvider::seeded(11);
        for roll in sequence.rolls() {
            assert_eq!(*roll, provider.roll().unwrap());
        }
    }
}
