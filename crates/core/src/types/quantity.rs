//! Quantity entered on the product and cart pages.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input string is empty.
    #[error("quantity cannot be empty")]
    Empty,
    /// The input has a fractional part.
    #[error("quantity must be a whole number (got {0})")]
    Fractional(String),
    /// The input is not a number at all.
    #[error("quantity is not a number: {0}")]
    NotANumber(String),
    /// The value is outside the accepted range.
    #[error("quantity must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// The rejected value, saturated to the `i64` range.
        value: i64,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
}

/// A quantity picked by the shopper.
///
/// ## Constraints
///
/// - Whole number: `"2.5"` is rejected, never truncated
/// - Range: 1-100 inclusive
///
/// The cart store itself accepts any positive quantity; this type is the
/// edge check applied to form input before it reaches the store.
///
/// ## Examples
///
/// ```
/// use kanap_core::Quantity;
///
/// assert_eq!(Quantity::parse("3").unwrap().get(), 3);
/// assert!(Quantity::parse("0").is_err());
/// assert!(Quantity::parse("101").is_err());
/// assert!(Quantity::parse("2.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity a shopper can pick.
    pub const MIN: u32 = 1;
    /// Largest quantity a shopper can pick.
    pub const MAX: u32 = 100;

    /// Create a quantity from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::OutOfRange`] if `value` is not in 1-100.
    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(QuantityError::OutOfRange {
                value: i64::from(value),
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Parse a quantity from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, fractional, not a number, or
    /// outside 1-100.
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        if s.is_empty() {
            return Err(QuantityError::Empty);
        }

        let out_of_range = |value| QuantityError::OutOfRange {
            value,
            min: Self::MIN,
            max: Self::MAX,
        };

        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // Whole number; past i64 it saturates.
            let value = s.parse::<i64>().unwrap_or(if s.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            });
            return u32::try_from(value)
                .map_err(|_| out_of_range(value))
                .and_then(Self::new);
        }

        if is_decimal_fraction(digits) {
            return Err(QuantityError::Fractional(s.to_owned()));
        }
        Err(QuantityError::NotANumber(s.to_owned()))
    }

    /// Returns the quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// `12.5`, `3.0`, `.5`: digits with one decimal point and no exponent.
fn is_decimal_fraction(s: &str) -> bool {
    s.split_once('.').is_some_and(|(whole, frac)| {
        !(whole.is_empty() && frac.is_empty())
            && whole.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit())
    })
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Quantity::parse("1").unwrap().get(), 1);
        assert_eq!(Quantity::parse("42").unwrap().get(), 42);
        assert_eq!(Quantity::parse("100").unwrap().get(), 100);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Quantity::parse(""), Err(QuantityError::Empty));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            Quantity::parse("0"),
            Err(QuantityError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            Quantity::parse("101"),
            Err(QuantityError::OutOfRange { value: 101, .. })
        ));
        assert!(matches!(
            Quantity::parse("-3"),
            Err(QuantityError::OutOfRange { value: -3, .. })
        ));
    }

    #[test]
    fn test_parse_fractional_is_rejected() {
        assert_eq!(
            Quantity::parse("2.5"),
            Err(QuantityError::Fractional("2.5".to_string()))
        );
        assert!(matches!(
            Quantity::parse("3.0"),
            Err(QuantityError::Fractional(_))
        ));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(matches!(
            Quantity::parse("three"),
            Err(QuantityError::NotANumber(_))
        ));
        assert!(matches!(
            Quantity::parse(" 3"),
            Err(QuantityError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_huge_whole_number_is_out_of_range() {
        assert!(matches!(
            Quantity::parse("99999999999999999999"),
            Err(QuantityError::OutOfRange { value: i64::MAX, .. })
        ));
        assert!(matches!(
            Quantity::parse("-99999999999999999999"),
            Err(QuantityError::OutOfRange { value: i64::MIN, .. })
        ));
        assert!(matches!(
            Quantity::parse("4294967296"),
            Err(QuantityError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_exponent_is_not_a_number() {
        for input in ["1e2", "1E2", "2.5e1", "inf", "NaN", ".", "1.2.3"] {
            assert!(
                matches!(Quantity::parse(input), Err(QuantityError::NotANumber(_))),
                "{input:?} should be rejected as not a number"
            );
        }
    }

    #[test]
    fn test_parse_signed_fraction_is_fractional() {
        assert!(matches!(
            Quantity::parse("-0.5"),
            Err(QuantityError::Fractional(_))
        ));
        assert!(matches!(
            Quantity::parse(".5"),
            Err(QuantityError::Fractional(_))
        ));
    }

    #[test]
    fn test_deserialize_checks_range() {
        assert_eq!(
            serde_json::from_str::<Quantity>("7").unwrap(),
            Quantity::new(7).unwrap()
        );
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Quantity::parse("0").unwrap_err();
        assert_eq!(err.to_string(), "quantity must be between 1 and 100 (got 0)");
    }
}
