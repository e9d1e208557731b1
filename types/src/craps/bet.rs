use super::chips::Chips;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported bet types in craps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BetType {
    PassLine = 0,  // Come-out: 7/11 win, 2/3/12 lose, else point
    DontPass = 1,  // Come-out: 2/3 win, 7/11 lose, 12 push
    Come = 2,      // Like PASS, using the next roll as its come-out
    DontCome = 3,  // Like DONT_PASS, using the next roll as its come-out
    Odds = 4,      // True odds behind Pass/Come
    LayOdds = 5,   // True odds behind Don't Pass/Don't Come
    Place = 6,     // Number hits before 7
    Field = 7,     // Single roll: 2,3,4,9,10,11,12
    AnyCraps = 8,  // Single roll: 2,3,12 pays 7:1
    AnySeven = 9,  // Single roll: 7 pays 4:1
    Horn = 10,     // Single roll: 2,3,11,12 split four ways
    Hardway = 11,  // Doubles before 7 or easy way
}

impl BetType {
    pub const ALL: [BetType; 12] = [
        BetType::PassLine,
        BetType::DontPass,
        BetType::Come,
        BetType::DontCome,
        BetType::Odds,
        BetType::LayOdds,
        BetType::Place,
        BetType::Field,
        BetType::AnyCraps,
        BetType::AnySeven,
        BetType::Horn,
        BetType::Hardway,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BetType::PassLine => "Pass Line",
            BetType::DontPass => "Don't Pass",
            BetType::Come => "Come",
            BetType::DontCome => "Don't Come",
            BetType::Odds => "Odds",
            BetType::LayOdds => "Lay Odds",
            BetType::Place => "Place",
            BetType::Field => "Field",
            BetType::AnyCraps => "Any Craps",
            BetType::AnySeven => "Any Seven",
            BetType::Horn => "Horn",
            BetType::Hardway => "Hardway",
        }
    }

    /// A flat bet that free odds may be taken behind.
    pub fn backs_odds(&self) -> bool {
        matches!(self, BetType::PassLine | BetType::Come)
    }

    /// A flat bet that free odds may be laid behind.
    pub fn backs_lay_odds(&self) -> bool {
        matches!(self, BetType::DontPass | BetType::DontCome)
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final status of a resolved bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetStatus {
    Won,
    Lost,
    Push,
}

/// Result of resolving a bet against a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    pub status: BetStatus,
    /// Net winnings; never includes the returned stake. Zero for losses and pushes.
    pub payout: Chips,
    pub message: String,
}

impl BetResult {
    pub fn won(payout: Chips, message: impl Into<String>) -> Self {
        Self {
            status: BetStatus::Won,
            payout,
            message: message.into(),
        }
    }

    pub fn lost(message: impl Into<String>) -> Self {
        Self {
            status: BetStatus::Lost,
            payout: Chips::ZERO,
            message: message.into(),
        }
    }

    pub fn push(message: impl Into<String>) -> Self {
        Self {
            status: BetStatus::Push,
            payout: Chips::ZERO,
            message: message.into(),
        }
    }

    /// Cash returned to the player for a bet of `stake`.
    pub fn returned(&self, stake: Chips) -> Chips {
        match self.status {
            BetStatus::Won => stake + self.payout,
            BetStatus::Push => stake,
            BetStatus::Lost => Chips::ZERO,
        }
    }

    /// Change in the player's equity for a bet of `stake`.
    pub fn net(&self, stake: Chips) -> Chips {
        match self.status {
            BetStatus::Won => self.payout,
            BetStatus::Push => Chips::ZERO,
            BetStatus::Lost => -stake,
        }
    }
}
