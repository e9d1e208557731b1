//! Bet resolution engine.
//!
//! A [Bet] is a stake plus a [BetKind] carrying the variant's own progression
//! state (for example a Come bet's traveled point). Resolution only computes
//! outcomes; crediting the bankroll is the caller's job.

mod manager;
pub mod payouts;

pub use manager::{BetManager, PlacementError, Settlement};

use crapsim_types::{
    is_hardway_number, is_point_number, BetResult, BetType, Chips, DiceRoll, GamePhase,
    TableRules,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error("{bet} cannot be placed on {number}")]
    InvalidNumber { bet: BetType, number: u8 },
    #[error("bet amount must be positive (got {0})")]
    NonPositiveAmount(Chips),
}

/// Variant and per-variant state of a bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetKind {
    /// `point` is set once the bet travels to a point.
    PassLine { point: Option<u8> },
    DontPass { point: Option<u8> },
    Come { point: Option<u8> },
    DontCome { point: Option<u8> },
    Odds { point: u8 },
    LayOdds { point: u8 },
    Place { number: u8 },
    /// Field multipliers for 2 and 12, fixed when the bet is made.
    Field { pays_2: u8, pays_12: u8 },
    AnyCraps,
    AnySeven,
    Horn,
    Hardway { number: u8 },
}

impl BetKind {
    pub fn bet_type(&self) -> BetType {
        match self {
            BetKind::PassLine { .. } => BetType::PassLine,
            BetKind::DontPass { .. } => BetType::DontPass,
            BetKind::Come { .. } => BetType::Come,
            BetKind::DontCome { .. } => BetType::DontCome,
            BetKind::Odds { .. } => BetType::Odds,
            BetKind::LayOdds { .. } => BetType::LayOdds,
            BetKind::Place { .. } => BetType::Place,
            BetKind::Field { .. } => BetType::Field,
            BetKind::AnyCraps => BetType::AnyCraps,
            BetKind::AnySeven => BetType::AnySeven,
            BetKind::Horn => BetType::Horn,
            BetKind::Hardway { .. } => BetType::Hardway,
        }
    }
}

/// A wager on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bet {
    kind: BetKind,
    amount: Chips,
    working: bool,
}

impl Bet {
    fn with_kind(kind: BetKind, amount: Chips) -> Result<Self, BetError> {
        if !amount.is_positive() {
            return Err(BetError::NonPositiveAmount(amount));
        }
        Ok(Self {
            kind,
            amount,
            working: true,
        })
    }

    pub fn pass_line(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::PassLine { point: None }, amount)
    }

    pub fn dont_pass(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::DontPass { point: None }, amount)
    }

    pub fn come(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::Come { point: None }, amount)
    }

    pub fn dont_come(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::DontCome { point: None }, amount)
    }

    /// Free odds behind a Pass or Come bet on `point`.
    pub fn odds(amount: Chips, point: u8) -> Result<Self, BetError> {
        if !is_point_number(point) {
            return Err(BetError::InvalidNumber {
                bet: BetType::Odds,
                number: point,
            });
        }
        Self::with_kind(BetKind::Odds { point }, amount)
    }

    /// Odds laid behind a Don't Pass or Don't Come bet on `point`.
    pub fn lay_odds(amount: Chips, point: u8) -> Result<Self, BetError> {
        if !is_point_number(point) {
            return Err(BetError::InvalidNumber {
                bet: BetType::LayOdds,
                number: point,
            });
        }
        Self::with_kind(BetKind::LayOdds { point }, amount)
    }

    pub fn place(amount: Chips, number: u8) -> Result<Self, BetError> {
        if !is_point_number(number) {
            return Err(BetError::InvalidNumber {
                bet: BetType::Place,
                number,
            });
        }
        Self::with_kind(BetKind::Place { number }, amount)
    }

    /// Field bet paying the table's configured 2 and 12 multipliers.
    pub fn field(amount: Chips, rules: &TableRules) -> Result<Self, BetError> {
        Self::with_kind(
            BetKind::Field {
                pays_2: rules.field_2_payout(),
                pays_12: rules.field_12_payout(),
            },
            amount,
        )
    }

    pub fn any_craps(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::AnyCraps, amount)
    }

    pub fn any_seven(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::AnySeven, amount)
    }

    pub fn horn(amount: Chips) -> Result<Self, BetError> {
        Self::with_kind(BetKind::Horn, amount)
    }

    pub fn hardway(amount: Chips, number: u8) -> Result<Self, BetError> {
        if !is_hardway_number(number) {
            return Err(BetError::InvalidNumber {
                bet: BetType::Hardway,
                number,
            });
        }
        Self::with_kind(BetKind::Hardway { number }, amount)
    }

    /// Turn the bet off (or back on) for come-out rolls.
    pub fn set_working(mut self, working: bool) -> Self {
        self.working = working;
        self
    }

    pub fn kind(&self) -> &BetKind {
        &self.kind
    }

    pub fn bet_type(&self) -> BetType {
        self.kind.bet_type()
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn is_working(&self) -> bool {
        self.working
    }

    /// The number a Place or Hardway bet covers.
    pub fn number(&self) -> Option<u8> {
        match self.kind {
            BetKind::Place { number } | BetKind::Hardway { number } => Some(number),
            _ => None,
        }
    }

    /// The point a contract bet travelled to, or the point an odds bet backs.
    pub fn point(&self) -> Option<u8> {
        match self.kind {
            BetKind::PassLine { point }
            | BetKind::DontPass { point }
            | BetKind::Come { point }
            | BetKind::DontCome { point } => point,
            BetKind::Odds { point } | BetKind::LayOdds { point } => Some(point),
            _ => None,
        }
    }

    /// Display name, e.g. `Come (6)` or `Hard 8`.
    pub fn name(&self) -> String {
        match self.kind {
            BetKind::Come { point: Some(point) } => format!("Come ({point})"),
            BetKind::DontCome { point: Some(point) } => format!("Don't Come ({point})"),
            BetKind::Odds { point } => format!("Odds ({point})"),
            BetKind::LayOdds { point } => format!("Lay Odds ({point})"),
            BetKind::Place { number } => format!("Place {number}"),
            BetKind::Hardway { number } => format!("Hard {number}"),
            kind => kind.bet_type().label().to_string(),
        }
    }

    /// Theoretical house edge in percent.
    pub fn house_edge(&self) -> f64 {
        match self.kind {
            BetKind::PassLine { .. } | BetKind::Come { .. } => 1.41,
            BetKind::DontPass { .. } | BetKind::DontCome { .. } => 1.36,
            BetKind::Odds { .. } | BetKind::LayOdds { .. } => 0.0,
            BetKind::Place { number } => payouts::place_house_edge(number),
            BetKind::Field { pays_2, pays_12 } => payouts::field_house_edge(pays_2, pays_12),
            BetKind::AnyCraps => 11.11,
            BetKind::AnySeven => 16.67,
            BetKind::Horn => 12.5,
            BetKind::Hardway { number } => payouts::hardway_house_edge(number),
        }
    }

    /// Resolve against `roll`, thrown while the table was in `phase`.
    ///
    /// Returns `None` while the bet stays on the table. Contract bets record
    /// the point they travel to.
    pub fn resolve(&mut self, roll: &DiceRoll, phase: GamePhase) -> Option<BetResult> {
        let total = roll.total();
        let amount = self.amount;
        let working = self.working;
        match &mut self.kind {
            BetKind::PassLine { point } => {
                // A late Pass bet adopts the table point
                if point.is_none() {
                    *point = phase.point();
                }
                resolve_do(point, total, amount, "Pass line")
            }
            BetKind::Come { point } => resolve_do(point, total, amount, "Come"),
            BetKind::DontPass { point } => {
                if point.is_none() {
                    *point = phase.point();
                }
                resolve_dont(point, total, amount, "Don't pass")
            }
            BetKind::DontCome { point } => resolve_dont(point, total, amount, "Don't come"),
            BetKind::Odds { point } => {
                let point = *point;
                if total == point {
                    Some(BetResult::won(
                        payouts::odds_payout(point, amount, true),
                        format!("Point {point} made! Odds pay."),
                    ))
                } else if total == 7 {
                    Some(BetResult::lost("Seven! Odds lose."))
                } else {
                    None
                }
            }
            BetKind::LayOdds { point } => {
                let point = *point;
                if total == 7 {
                    Some(BetResult::won(
                        payouts::odds_payout(point, amount, false),
                        "Seven! Lay odds pay.",
                    ))
                } else if total == point {
                    Some(BetResult::lost(format!("Point {point} made! Lay odds lose.")))
                } else {
                    None
                }
            }
            BetKind::Place { number } => {
                let number = *number;
                if !working && phase.is_come_out() {
                    return None;
                }
                if total == number {
                    Some(BetResult::won(
                        payouts::place_payout(number, amount),
                        format!("Place {number} hits!"),
                    ))
                } else if total == 7 {
                    Some(BetResult::lost(format!("Seven! Place {number} loses.")))
                } else {
                    None
                }
            }
            BetKind::Field { pays_2, pays_12 } => {
                Some(match payouts::field_payout(total, amount, *pays_2, *pays_12) {
                    Some(payout) => BetResult::won(payout, format!("Field {total} wins!")),
                    None => BetResult::lost(format!("Field loses on {total}.")),
                })
            }
            BetKind::AnyCraps => Some(if matches!(total, 2 | 3 | 12) {
                BetResult::won(amount.times(7), format!("Craps {total}! Any craps wins."))
            } else {
                BetResult::lost("Any craps loses.")
            }),
            BetKind::AnySeven => Some(if total == 7 {
                BetResult::won(amount.times(4), "Seven! Any seven wins.")
            } else {
                BetResult::lost("Any seven loses.")
            }),
            BetKind::Horn => Some(match payouts::horn_payout(total, amount) {
                Some(payout) => BetResult::won(payout, format!("Horn {total} hits!")),
                None => BetResult::lost("Horn loses."),
            }),
            BetKind::Hardway { number } => {
                let number = *number;
                if total == number && roll.is_hard() {
                    Some(BetResult::won(
                        payouts::hardway_payout(number, amount),
                        format!("Hard {number}!"),
                    ))
                } else if total == number {
                    Some(BetResult::lost(format!("Easy {number}. Hard {number} loses.")))
                } else if total == 7 {
                    Some(BetResult::lost(format!("Seven! Hard {number} loses.")))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.amount)
    }
}

/// Pass/Come: the bet's own come-out until it has a point.
fn resolve_do(point: &mut Option<u8>, total: u8, amount: Chips, label: &str) -> Option<BetResult> {
    match *point {
        None => match total {
            7 | 11 => Some(BetResult::won(amount, format!("Natural {total}! {label} wins."))),
            2 | 3 | 12 => Some(BetResult::lost(format!("Craps {total}! {label} loses."))),
            _ => {
                *point = Some(total);
                None
            }
        },
        Some(p) if total == p => Some(BetResult::won(
            amount,
            format!("Point {total} made! {label} wins."),
        )),
        Some(_) if total == 7 => Some(BetResult::lost(format!("Seven out! {label} loses."))),
        Some(_) => None,
    }
}

/// Don't Pass/Don't Come: bar 12 on the come-out.
fn resolve_dont(
    point: &mut Option<u8>,
    total: u8,
    amount: Chips,
    label: &str,
) -> Option<BetResult> {
    match *point {
        None => match total {
            2 | 3 => Some(BetResult::won(amount, format!("Craps {total}! {label} wins."))),
            12 => Some(BetResult::push(format!("Bar 12. {label} pushes."))),
            7 | 11 => Some(BetResult::lost(format!("Natural {total}! {label} loses."))),
            _ => {
                *point = Some(total);
                None
            }
        },
        Some(_) if total == 7 => Some(BetResult::won(amount, format!("Seven! {label} wins."))),
        Some(p) if total == p => Some(BetResult::lost(format!(
            "Point {total} made! {label} loses."
        ))),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crapsim_types::BetStatus;

    fn roll(d1: u8, d2: u8) -> DiceRoll {
        DiceRoll::new(d1, d2).unwrap()
    }

    fn dollars(n: i64) -> Chips {
        Chips::from_dollars(n)
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert_eq!(
            Bet::place(dollars(10), 7),
            Err(BetError::InvalidNumber {
                bet: BetType::Place,
                number: 7
            })
        );
        assert!(Bet::hardway(dollars(5), 5).is_err());
        assert!(Bet::hardway(dollars(5), 12).is_err());
        assert!(Bet::odds(dollars(5), 11).is_err());
        assert!(Bet::lay_odds(dollars(5), 2).is_err());
        assert_eq!(
            Bet::field(Chips::ZERO, &TableRules::default()),
            Err(BetError::NonPositiveAmount(Chips::ZERO))
        );
    }

    #[test]
    fn test_pass_line_natural_on_come_out() {
        let mut bet = Bet::pass_line(dollars(10)).unwrap();
        let result = bet.resolve(&roll(3, 4), GamePhase::ComeOut).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(10));
    }

    #[test]
    fn test_pass_line_point_made_and_seven_out() {
        let mut made = Bet::pass_line(dollars(10)).unwrap();
        assert!(made.resolve(&roll(2, 3), GamePhase::ComeOut).is_none());
        assert_eq!(made.point(), Some(5));
        assert!(made.resolve(&roll(4, 4), GamePhase::Point(5)).is_none());
        let result = made.resolve(&roll(1, 4), GamePhase::Point(5)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(10));

        let mut out = Bet::pass_line(dollars(10)).unwrap();
        out.resolve(&roll(2, 3), GamePhase::ComeOut);
        let result = out.resolve(&roll(3, 4), GamePhase::Point(5)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
        assert_eq!(result.payout, Chips::ZERO);
    }

    #[test]
    fn test_pass_line_craps() {
        for (d1, d2) in [(1, 1), (1, 2), (6, 6)] {
            let mut bet = Bet::pass_line(dollars(10)).unwrap();
            let result = bet.resolve(&roll(d1, d2), GamePhase::ComeOut).unwrap();
            assert_eq!(result.status, BetStatus::Lost);
        }
    }

    #[test]
    fn test_late_pass_line_adopts_table_point() {
        let mut bet = Bet::pass_line(dollars(10)).unwrap();
        // An 11 in the point phase neither wins nor loses a Pass bet
        assert!(bet.resolve(&roll(5, 6), GamePhase::Point(8)).is_none());
        assert_eq!(bet.point(), Some(8));
        let result = bet.resolve(&roll(3, 4), GamePhase::Point(8)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
    }

    #[test]
    fn test_late_pass_line_can_make_table_point() {
        // A 4 would be a new point on a come-out; here it is a blank roll
        let mut bet = Bet::pass_line(dollars(10)).unwrap();
        assert!(bet.resolve(&roll(2, 2), GamePhase::Point(8)).is_none());
        assert_eq!(bet.point(), Some(8));
        let result = bet.resolve(&roll(6, 2), GamePhase::Point(8)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(10));
    }

    #[test]
    fn test_late_dont_pass_adopts_table_point() {
        // Craps totals do not win a Don't Pass placed after the point
        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        assert!(bet.resolve(&roll(1, 2), GamePhase::Point(9)).is_none());
        assert_eq!(bet.point(), Some(9));
        let result = bet.resolve(&roll(5, 2), GamePhase::Point(9)).unwrap();
        assert_eq!(result.status, BetStatus::Won);

        let mut lost = Bet::dont_pass(dollars(10)).unwrap();
        let result = lost.resolve(&roll(4, 5), GamePhase::Point(9)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
    }

    #[test]
    fn test_dont_pass_bar_12_pushes() {
        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        let result = bet.resolve(&roll(6, 6), GamePhase::ComeOut).unwrap();
        assert_eq!(result.status, BetStatus::Push);
        assert_eq!(result.payout, Chips::ZERO);
        assert_eq!(result.returned(bet.amount()), dollars(10));
    }

    #[test]
    fn test_dont_pass_outcomes() {
        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        assert_eq!(
            bet.resolve(&roll(1, 2), GamePhase::ComeOut).unwrap().status,
            BetStatus::Won
        );

        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        assert_eq!(
            bet.resolve(&roll(5, 6), GamePhase::ComeOut).unwrap().status,
            BetStatus::Lost
        );

        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        bet.resolve(&roll(4, 5), GamePhase::ComeOut);
        let result = bet.resolve(&roll(6, 1), GamePhase::Point(9)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(10));

        let mut bet = Bet::dont_pass(dollars(10)).unwrap();
        bet.resolve(&roll(4, 5), GamePhase::ComeOut);
        assert_eq!(
            bet.resolve(&roll(3, 6), GamePhase::Point(9)).unwrap().status,
            BetStatus::Lost
        );
    }

    #[test]
    fn test_come_bet_travels_independently_of_table() {
        let mut bet = Bet::come(dollars(10)).unwrap();
        // The table is on 5; the come bet treats this roll as its come-out.
        assert!(bet.resolve(&roll(3, 3), GamePhase::Point(5)).is_none());
        assert_eq!(bet.name(), "Come (6)");
        // Table point made does not affect the come bet
        assert!(bet.resolve(&roll(2, 3), GamePhase::Point(5)).is_none());
        let result = bet.resolve(&roll(4, 2), GamePhase::ComeOut).unwrap();
        assert_eq!(result.status, BetStatus::Won);
    }

    #[test]
    fn test_come_bet_natural_in_point_phase() {
        let mut bet = Bet::come(dollars(10)).unwrap();
        let result = bet.resolve(&roll(5, 6), GamePhase::Point(4)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
    }

    #[test]
    fn test_dont_come() {
        let mut bet = Bet::dont_come(dollars(10)).unwrap();
        assert!(bet.resolve(&roll(5, 5), GamePhase::Point(6)).is_none());
        assert_eq!(bet.name(), "Don't Come (10)");
        let result = bet.resolve(&roll(3, 4), GamePhase::Point(6)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
    }

    #[test]
    fn test_odds_and_lay_odds() {
        let mut odds = Bet::odds(dollars(10), 4).unwrap();
        assert!(odds.resolve(&roll(3, 3), GamePhase::Point(4)).is_none());
        let result = odds.resolve(&roll(1, 3), GamePhase::Point(4)).unwrap();
        assert_eq!(result.payout, dollars(20));
        assert_eq!(odds.house_edge(), 0.0);

        let mut lay = Bet::lay_odds(dollars(30), 9).unwrap();
        let result = lay.resolve(&roll(2, 5), GamePhase::Point(9)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(20));

        let mut lay = Bet::lay_odds(dollars(30), 9).unwrap();
        let result = lay.resolve(&roll(4, 5), GamePhase::Point(9)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
    }

    #[test]
    fn test_place_six() {
        let mut bet = Bet::place(dollars(30), 6).unwrap();
        let result = bet.resolve(&roll(2, 4), GamePhase::Point(5)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(35));

        let mut bet = Bet::place(dollars(30), 6).unwrap();
        let result = bet.resolve(&roll(2, 5), GamePhase::Point(5)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
        assert_eq!(result.payout, Chips::ZERO);
    }

    #[test]
    fn test_place_not_working_on_come_out() {
        let mut bet = Bet::place(dollars(30), 6).unwrap().set_working(false);
        assert!(!bet.is_working());
        assert!(bet.resolve(&roll(3, 3), GamePhase::ComeOut).is_none());
        assert!(bet.resolve(&roll(3, 4), GamePhase::ComeOut).is_none());
        // Still off only for the come-out
        let result = bet.resolve(&roll(3, 4), GamePhase::Point(8)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
    }

    #[test]
    fn test_field() {
        let rules = TableRules::default();
        let mut bet = Bet::field(dollars(10), &rules).unwrap();
        let result = bet.resolve(&roll(1, 1), GamePhase::ComeOut).unwrap();
        assert_eq!(result.payout, dollars(20));

        let mut bet = Bet::field(dollars(10), &rules).unwrap();
        let result = bet.resolve(&roll(3, 4), GamePhase::ComeOut).unwrap();
        assert_eq!(result.status, BetStatus::Lost);

        let mut bet = Bet::field(dollars(10), &rules).unwrap();
        let result = bet.resolve(&roll(4, 5), GamePhase::Point(6)).unwrap();
        assert_eq!(result.payout, dollars(10));
        assert!((bet.house_edge() - 5.5556).abs() < 1e-3);
    }

    #[test]
    fn test_one_roll_props() {
        let mut craps = Bet::any_craps(dollars(5)).unwrap();
        assert_eq!(
            craps.resolve(&roll(1, 2), GamePhase::ComeOut).unwrap().payout,
            dollars(35)
        );

        let mut seven = Bet::any_seven(dollars(5)).unwrap();
        assert_eq!(
            seven.resolve(&roll(1, 6), GamePhase::Point(4)).unwrap().payout,
            dollars(20)
        );
        let mut seven = Bet::any_seven(dollars(5)).unwrap();
        assert_eq!(
            seven.resolve(&roll(1, 5), GamePhase::Point(4)).unwrap().status,
            BetStatus::Lost
        );

        let mut horn = Bet::horn(dollars(20)).unwrap();
        assert_eq!(
            horn.resolve(&roll(5, 6), GamePhase::ComeOut).unwrap().payout,
            dollars(60)
        );
    }

    #[test]
    fn test_hardway() {
        let mut bet = Bet::hardway(dollars(5), 8).unwrap();
        assert!(bet.resolve(&roll(5, 4), GamePhase::Point(4)).is_none());
        let result = bet.resolve(&roll(4, 4), GamePhase::Point(4)).unwrap();
        assert_eq!(result.status, BetStatus::Won);
        assert_eq!(result.payout, dollars(45));

        let mut easy = Bet::hardway(dollars(5), 8).unwrap();
        let result = easy.resolve(&roll(6, 2), GamePhase::Point(4)).unwrap();
        assert_eq!(result.status, BetStatus::Lost);

        let mut seven = Bet::hardway(dollars(5), 4).unwrap();
        let result = seven.resolve(&roll(3, 4), GamePhase::ComeOut).unwrap();
        assert_eq!(result.status, BetStatus::Lost);
    }

    #[test]
    fn test_names_and_edges() {
        assert_eq!(Bet::hardway(dollars(5), 8).unwrap().name(), "Hard 8");
        assert_eq!(Bet::place(dollars(5), 9).unwrap().name(), "Place 9");
        assert_eq!(Bet::come(dollars(5)).unwrap().name(), "Come");
        assert_eq!(Bet::pass_line(dollars(5)).unwrap().name(), "Pass Line");
        assert_eq!(Bet::place(dollars(5), 4).unwrap().house_edge(), 6.67);
        assert_eq!(Bet::hardway(dollars(5), 6).unwrap().house_edge(), 9.09);
        assert_eq!(Bet::dont_come(dollars(5)).unwrap().house_edge(), 1.36);
    }
}
