//! Exact conversion between decimal amount strings and integer minor units.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::DomainError;

/// Number of fractional digits in the wire representation.
pub const SCALE: u32 = 2;

/// Parses a base-10 decimal string into minor units (cents).
///
/// Accepts an optional sign, an integer part and an optional fractional part
/// (`"100.21"`, `"-3"`, `"+0.5"`). The value is scaled by 100 using decimal
/// arithmetic, so `"100.21"` is exactly `10021`.
///
/// The sign is not checked here: `"-1.00"` parses to `-100`. Values that are not
/// a whole number of cents (`"1.234"`) or that overflow `i64` are rejected.
pub fn decimal_to_minor_units(s: &str) -> Result<i64, DomainError> {
    if !is_decimal_literal(s) {
        return Err(DomainError::InvalidAmount(format!("not a decimal number: {s:?}")));
    }

    let literal = trim_fraction(s);
    if literal
        .split_once('.')
        .is_some_and(|(_, frac)| frac.len() > SCALE as usize)
    {
        return Err(DomainError::InvalidAmount(format!(
            "{s:?} has more than {SCALE} fractional digits"
        )));
    }

    let value = Decimal::from_str_exact(literal)
        .map_err(|e| DomainError::InvalidAmount(format!("{s:?}: {e}")))?;

    let scaled = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| DomainError::InvalidAmount(format!("{s:?} is out of range")))?;

    scaled
        .to_i64()
        .ok_or_else(|| DomainError::InvalidAmount(format!("{s:?} is out of range")))
}

/// Formats minor units as a decimal string with exactly two fractional digits.
///
/// `10021` becomes `"100.21"` and `5` becomes `"0.05"`.
pub fn minor_units_to_decimal(n: i64) -> String {
    Decimal::new(n, SCALE).to_string()
}

/// Drops trailing zeros of the fractional part, and the point when nothing is left.
fn trim_fraction(s: &str) -> &str {
    match s.split_once('.') {
        Some(_) => s.trim_end_matches('0').trim_end_matches('.'),
        None => s,
    }
}

/// `[+-]?[0-9]+(\.[0-9]+)?`
fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// A non-negative amount of money in minor units.
///
/// Amount is stored in the smallest unit of the currency (cents)
/// to avoid floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: i64) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self(amount))
    }

    /// Parses a decimal string and rejects negative values.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::new(decimal_to_minor_units(s)?)
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minor_units_to_decimal(self.0))
    }
}
