use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error constructing a roll from die faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("die face must be 1-6 (got {face})")]
pub struct InvalidDie {
    pub face: u8,
}

/// A single roll of two dice.
///
/// Serialized as a `[die1, die2]` pair; deserialization checks the faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    pub fn new(die1: u8, die2: u8) -> Result<Self, InvalidDie> {
        for face in [die1, die2] {
            if !(1..=6).contains(&face) {
                return Err(InvalidDie { face });
            }
        }
        Ok(Self { die1, die2 })
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn dice(&self) -> (u8, u8) {
        (self.die1, self.die2)
    }

    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }

    /// Both dice show the same face.
    pub fn is_hard(&self) -> bool {
        self.die1 == self.die2
    }
}

impl TryFrom<(u8, u8)> for DiceRoll {
    type Error = InvalidDie;

    fn try_from((die1, die2): (u8, u8)) -> Result<Self, Self::Error> {
        DiceRoll::new(die1, die2)
    }
}

impl From<DiceRoll> for (u8, u8) {
    fn from(roll: DiceRoll) -> Self {
        roll.dice()
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) = {}", self.die1, self.die2, self.total())
    }
}
