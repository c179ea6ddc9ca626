//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative unit price in dollars.
///
/// Persisted as a plain JSON number carrying every stored digit (`9.5`),
/// displayed with a dollar sign and two decimal places (`$9.50`).
///
/// ## Examples
///
/// ```
/// use bistro_cart_core::Price;
///
/// let price = Price::parse("9.50").unwrap();
/// assert_eq!(price.to_string(), "$9.50");
/// assert_eq!(price.times(2).to_string(), "$19.00");
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("free").is_err());
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("1_000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse a price from attribute text such as `"9.50"`.
    ///
    /// Surrounding whitespace is ignored. Only plain decimal notation is
    /// accepted: an optional sign, digits, and at most one decimal point.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number, or
    /// is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        if !is_plain_decimal(trimmed) {
            return Err(PriceError::Invalid(trimmed.to_owned()));
        }

        let amount =
            Decimal::from_str(trimmed).map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
        Self::new(amount)
    }

    /// Returns the raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns this price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Returns the amount rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// `[+-]?digits[.digits]`, with digits required on at least one side of the point.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(whole.is_empty() && fraction.is_empty())
        && whole
            .bytes()
            .chain(fraction.bytes())
            .all(|b| b.is_ascii_digit())
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0.normalize(), serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::arbitrary_precision::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("9.50").unwrap().amount(), Decimal::new(950, 2));
        assert_eq!(Price::parse(" 12 ").unwrap().amount(), Decimal::new(12, 0));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse("NaN"), Err(PriceError::Invalid(_))));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_parse_rejects_non_plain_notation() {
        for input in ["1_000", "1__0", "_5", "1e2", "1E-2", "0x10", "1.2.3", ".", "+", "9.50abc", "$9.50"] {
            assert!(
                matches!(Price::parse(input), Err(PriceError::Invalid(_))),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_accepts_plain_notation() {
        assert_eq!(Price::parse("+5").unwrap().to_string(), "$5.00");
        assert_eq!(Price::parse("0.5").unwrap().to_string(), "$0.50");
        assert_eq!(Price::parse("007.25").unwrap().to_string(), "$7.25");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(Price::parse("-0").is_ok());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::parse("9.5").unwrap().to_string(), "$9.50");
        assert_eq!(Price::parse("3").unwrap().to_string(), "$3.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::parse("1.005").unwrap().to_string(), "$1.01");
        assert_eq!(Price::parse("1.004").unwrap().to_string(), "$1.00");
    }

    #[test]
    fn test_times_and_sum() {
        let burger = Price::parse("9.50").unwrap();
        let fries = Price::parse("3.25").unwrap();
        let total: Price = [burger.times(2), fries.times(3)].into_iter().sum();
        assert_eq!(total.to_string(), "$28.75");
    }

    #[test]
    fn test_serializes_as_json_number() {
        let price = Price::parse("9.50").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "9.5");
    }

    #[test]
    fn test_deserializes_json_numbers() {
        let price: Price = serde_json::from_str("9.5").unwrap();
        assert_eq!(price, Price::parse("9.50").unwrap());

        let whole: Price = serde_json::from_str("12").unwrap();
        assert_eq!(whole.to_string(), "$12.00");
    }

    #[test]
    fn test_serializes_every_digit() {
        let precise = Price::parse("0.12345678901234567891").unwrap();
        assert_eq!(serde_json::to_string(&precise).unwrap(), "0.12345678901234567891");

        let max = Price::new(Decimal::MAX).unwrap();
        let json = serde_json::to_string(&max).unwrap();
        assert_eq!(json, "79228162514264337593543950335");
        assert_eq!(serde_json::from_str::<Price>(&json).unwrap(), max);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-2.5").is_err());
    }
}
