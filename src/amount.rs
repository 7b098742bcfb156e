use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Fixed-point monetary amount with 4 decimal places, stored as a scaled integer.
///
/// Arithmetic saturates at the representable range, so runaway balances
/// stop growing instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 10_000;

    pub const ZERO: Amount = Amount(0);

    /// Convert from a float, rounding half away from zero.
    /// Non-finite values saturate (NaN becomes zero).
    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    /// Convert from a float, or `None` when the value is not finite or
    /// falls outside the representable range.
    pub fn checked_from_float(value: f64) -> Option<Self> {
        let scaled = (value * Self::SCALE as f64).round();
        let in_range = scaled >= i64::MIN as f64 && scaled < i64::MAX as f64;
        in_range.then(|| Amount(scaled as i64))
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn to_float(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiply by a real factor, rounding to the nearest scaled unit.
    pub fn scale(self, factor: f64) -> Self {
        Amount((self.0 as f64 * factor).round() as i64)
    }
}

impl fmt::Display for Amount {
    /// Currency display: rounded to cents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents_scale = (Self::SCALE / 100) as u64;
        let cents = (self.0.unsigned_abs() + cents_scale / 2) / cents_scale;
        let sign = if self.0 < 0 && cents > 0 { "-" } else { "" };
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
