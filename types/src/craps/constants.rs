/// Point numbers (4, 5, 6, 8, 9, 10)
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

/// Numbers that can be bet the hard way
pub const HARDWAY_NUMBERS: [u8; 4] = [4, 6, 8, 10];

/// Totals that win a Field bet
pub const FIELD_NUMBERS: [u8; 7] = [2, 3, 4, 9, 10, 11, 12];

/// Totals covered by a Horn bet
pub const HORN_NUMBERS: [u8; 4] = [2, 3, 11, 12];

/// Default table limits
pub const DEFAULT_MINIMUM_BET: i64 = 5;
pub const DEFAULT_MAXIMUM_BET: i64 = 5_000;
pub const DEFAULT_ODDS_MULTIPLIER: u32 = 3;
pub const DEFAULT_FIELD_PAYOUT: u8 = 2;

/// Default starting bankroll for a simulated player
pub const DEFAULT_BANKROLL: i64 = 1_000;

/// Caps applied when a run is bounded by only one of rolls/shooters
pub const MAX_ROLLS_UNBOUNDED: u64 = 100_000;
pub const MAX_SHOOTERS_UNBOUNDED: u64 = 100_000;

/// Rolls generated per shooter when a sequence must cover a shooter bound
pub const ROLLS_PER_SHOOTER_ESTIMATE: u64 = 15;

/// Rolls generated when no bound is configured
pub const DEFAULT_SEQUENCE_LENGTH: u64 = 1_000;

/// Returns true if `total` is a point number
pub fn is_point_number(total: u8) -> bool {
    POINT_NUMBERS.contains(&total)
}

/// Returns true if `number` can be bet the hard way
pub fn is_hardway_number(number: u8) -> bool {
    HARDWAY_NUMBERS.contains(&number)
}
