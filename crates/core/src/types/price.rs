//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The input could not be parsed as a decimal number.
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative USD price.
///
/// Stored as a [`Decimal`] to avoid float rounding; serialized as a plain
/// JSON number, which is what the backend speaks.
///
/// ## Examples
///
/// ```
/// use moon_cookies_core::Price;
///
/// let price = Price::parse("2.50").unwrap();
/// assert_eq!(price.to_string(), "$2.50");
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("three").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
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

    /// Parse a price from user input such as `"2.50"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let amount = input
            .trim()
            .parse::<Decimal>()
            .map_err(|_| PriceError::NotANumber(input.to_string()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    /// Formats for display with a dollar sign and two decimal places,
    /// e.g. `$3.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
