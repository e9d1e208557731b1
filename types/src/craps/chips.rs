use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// Scaling factor for fixed-point arithmetic
// Using 10000 for easy decimal representation (4 decimal places)
pub const SCALE: i64 = 10_000;
pub const HALF_SCALE: i64 = SCALE / 2;

/// Fixed-point chip amount with 4 decimal places of precision.
///
/// Addition and subtraction are exact, so equity moves only by the amounts
/// the bet engine settles. Serialized as a plain number of dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Chips(i64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    /// Create from a whole number of dollars
    pub const fn from_dollars(value: i64) -> Self {
        Chips(value * SCALE)
    }

    /// Create from cents
    pub const fn from_cents(value: i64) -> Self {
        Chips(value * (SCALE / 100))
    }

    /// Create from a fraction (numerator / denominator) of one dollar
    pub fn from_frac(numerator: i64, denominator: i64) -> Self {
        Chips::from_dollars(numerator).mul_ratio(1, denominator)
    }

    /// Create from a raw scaled value
    pub const fn from_raw(raw: i64) -> Self {
        Chips(raw)
    }

    /// Get the raw scaled value
    pub const fn raw(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Convert to whole dollars with rounding (half away from zero)
    pub fn to_dollars_rounded(self) -> i64 {
        if self.0 >= 0 {
            (self.0 + HALF_SCALE) / SCALE
        } else {
            (self.0 - HALF_SCALE) / SCALE
        }
    }

    /// Multiply by `numerator / denominator`, truncating toward zero.
    ///
    /// A zero denominator yields zero.
    pub fn mul_ratio(self, numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Chips::ZERO;
        }
        let scaled = (self.0 as i128) * (numerator as i128) / (denominator as i128);
        Chips(scaled as i64)
    }

    /// Multiply by an integer multiplier
    pub fn times(self, multiplier: i64) -> Self {
        Chips(self.0 * multiplier)
    }

    /// Divide by an integer, truncating toward zero
    pub fn div_int(self, divisor: i64) -> Self {
        if divisor == 0 {
            return Chips::ZERO;
        }
        Chips(self.0 / divisor)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Chips(self.0.abs())
    }
}

impl From<f64> for Chips {
    fn from(value: f64) -> Self {
        Chips((value * SCALE as f64).round() as i64)
    }
}

impl From<Chips> for f64 {
    fn from(value: Chips) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = if self.0 >= 0 {
            (self.0 + 50) / 100
        } else {
            (self.0 - 50) / 100
        };
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

impl std::ops::Add for Chips {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Chips(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Chips {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::Sub for Chips {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Chips(self.0 - other.0)
    }
}

impl std::ops::SubAssign for Chips {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::ops::Neg for Chips {
    type Output = Self;
    fn neg(self) -> Self {
        Chips(-self.0)
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Chips> for Chips {
    fn sum<I: Iterator<Item = &'a Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + *c)
    }
}
