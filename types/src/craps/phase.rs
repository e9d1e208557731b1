use serde::{Deserialize, Serialize};
use std::fmt;

/// Craps phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "point", rename_all = "snake_case")]
pub enum GamePhase {
    /// Waiting for a point (initial roll, or after a point is made or a seven-out).
    #[default]
    ComeOut,
    /// A point (4, 5, 6, 8, 9, or 10) is established.
    Point(u8),
}

impl GamePhase {
    pub fn is_come_out(&self) -> bool {
        matches!(self, GamePhase::ComeOut)
    }

    pub fn is_point(&self) -> bool {
        matches!(self, GamePhase::Point(_))
    }

    pub fn point(&self) -> Option<u8> {
        match self {
            GamePhase::ComeOut => None,
            GamePhase::Point(point) => Some(*point),
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::ComeOut => write!(f, "come-out"),
            GamePhase::Point(point) => write!(f, "point {point}"),
        }
    }
}
