//! Amount type for ledger postings
//!
//! Amounts are decimal values quantized to cents. Rounding is half-to-even,
//! so `2.345` becomes `2.34` and `2.355` becomes `2.36`. A quantized amount
//! holds at most 28 significant digits and keeps the sign of its input, so
//! `-0.001` becomes `-0.00`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits every amount carries
pub const CENT_DIGITS: u32 = 2;

/// Largest number of significant digits a quantized amount may hold
pub const MAX_DIGITS: u32 = 28;

/// A monetary amount with exactly two fraction digits
///
/// The value carries no currency; the `$` in a ledger posting is written by
/// the entry formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Quantize an arbitrary decimal to cents
    ///
    /// Fails when the result would need more than [`MAX_DIGITS`] digits.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountParseError> {
        let mut cents =
            value.round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointNearestEven);
        // rescale silently settles for a smaller scale when the mantissa is full
        cents.rescale(CENT_DIGITS);
        if cents.scale() != CENT_DIGITS || cents.mantissa().unsigned_abs() >= 10u128.pow(MAX_DIGITS)
        {
            return Err(AmountParseError::OutOfRange(value.to_string()));
        }

        if value.is_sign_negative() {
            cents.set_sign_negative(true);
        }
        Ok(Self(cents))
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts plain decimals ("12", "-4.5", "12.567") and scientific
    /// notation ("1e3"). Surrounding whitespace is ignored; currency symbols
    /// and thousands separators are not.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        Self::from_decimal(value)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),
    #[error("Amount has too many digits: {0}")]
    OutOfRange(String),
}
