//! Payout calculations.
//!
//! Every helper returns WINNINGS ONLY. The stake is handed back separately
//! by the settlement step.

use crapsim_types::{Chips, FIELD_NUMBERS, HORN_NUMBERS};

/// Per-unit multiplier for a Horn number (2/12 pay 30:1, 3/11 pay 15:1).
const HORN_LONG_PAYOUT_TO_1: i64 = 30;
const HORN_SHORT_PAYOUT_TO_1: i64 = 15;

/// True odds payout behind Pass/Come (`is_pass`) or laid behind Don't Pass/Don't Come.
pub fn odds_payout(point: u8, amount: Chips, is_pass: bool) -> Chips {
    match (point, is_pass) {
        (4 | 10, true) => amount.mul_ratio(2, 1),  // 2:1
        (4 | 10, false) => amount.mul_ratio(1, 2), // 1:2
        (5 | 9, true) => amount.mul_ratio(3, 2),   // 3:2
        (5 | 9, false) => amount.mul_ratio(2, 3),  // 2:3
        (6 | 8, true) => amount.mul_ratio(6, 5),   // 6:5
        (6 | 8, false) => amount.mul_ratio(5, 6),  // 5:6
        _ => Chips::ZERO,
    }
}

/// Place bet payout when the number hits.
pub fn place_payout(number: u8, amount: Chips) -> Chips {
    match number {
        4 | 10 => amount.mul_ratio(9, 5), // 9:5
        5 | 9 => amount.mul_ratio(7, 5),  // 7:5
        6 | 8 => amount.mul_ratio(7, 6),  // 7:6
        _ => Chips::ZERO,
    }
}

/// Field payout; `None` when the total loses.
pub fn field_payout(total: u8, amount: Chips, pays_2: u8, pays_12: u8) -> Option<Chips> {
    match total {
        2 => Some(amount.times(pays_2 as i64)),
        12 => Some(amount.times(pays_12 as i64)),
        _ if FIELD_NUMBERS.contains(&total) => Some(amount), // 1:1
        _ => None,
    }
}

/// Horn payout; `None` when the total misses all four numbers.
///
/// The amount is split into four units. The winning unit is paid and the
/// three other units are lost out of the same payout.
pub fn horn_payout(total: u8, amount: Chips) -> Option<Chips> {
    if !HORN_NUMBERS.contains(&total) {
        return None;
    }
    let unit = amount.div_int(4);
    let multiplier = if matches!(total, 2 | 12) {
        HORN_LONG_PAYOUT_TO_1
    } else {
        HORN_SHORT_PAYOUT_TO_1
    };
    Some(unit.times(multiplier) - unit.times(3))
}

/// Hardway payout on the hard number.
pub fn hardway_payout(number: u8, amount: Chips) -> Chips {
    match number {
        4 | 10 => amount.times(7), // 7:1
        6 | 8 => amount.times(9),  // 9:1
        _ => Chips::ZERO,
    }
}

/// Theoretical house edge (percent) of a Place bet.
pub fn place_house_edge(number: u8) -> f64 {
    match number {
        4 | 10 => 6.67,
        5 | 9 => 4.00,
        6 | 8 => 1.52,
        _ => 0.0,
    }
}

/// Theoretical house edge (percent) of a Hardway bet.
pub fn hardway_house_edge(number: u8) -> f64 {
    match number {
        4 | 10 => 11.11,
        6 | 8 => 9.09,
        _ => 0.0,
    }
}

/// Field house edge (percent) for the given 2 and 12 multipliers.
pub fn field_house_edge(pays_2: u8, pays_12: u8) -> f64 {
    (6.0 - pays_2 as f64 - pays_12 as f64) / 36.0 * 100.0
}
