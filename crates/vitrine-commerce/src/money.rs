//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (kopecks, cents) to avoid
//! floating-point precision issues in price arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "\u{20bd}").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "\u{20bd}",
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::Rub),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., kopecks
/// for RUB, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(249.90, Currency::Rub);
    /// assert_eq!(price.amount_minor, 24990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "249.90 \u{20bd}" or "$49.99").
    ///
    /// The ruble symbol trails the amount; other symbols lead.
    pub fn display(&self) -> String {
        match self.currency {
            Currency::Rub => format!("{} {}", self.display_amount(), self.currency.symbol()),
            _ => format!("{}{}", self.currency.symbol(), self.display_amount()),
        }
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        ))
    }

    /// Multiply by a scalar quantity. Saturates at the i64 bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values.
    ///
    /// All values must share `currency`; a mismatched value yields None.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(24990, Currency::Rub);
        assert_eq!(m.amount_minor, 24990);
        assert_eq!(m.currency, Currency::Rub);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::Usd);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::Usd);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::Usd);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(2499000, Currency::Rub);
        assert_eq!(m.display(), "24990.00 \u{20bd}");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::Rub);
        let b = Money::new(500, Currency::Rub);
        assert_eq!((a + b).amount_minor, 1500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::Rub);
        assert_eq!(m.multiply(3).amount_minor, 3000);
        assert_eq!((m * 2).amount_minor, 2000);
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::new(i64::MAX, Currency::Rub);
        assert_eq!(m.multiply(2).amount_minor, i64::MAX);
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(100, Currency::Rub),
            Money::new(200, Currency::Rub),
        ];
        let total = Money::try_sum(values.iter(), Currency::Rub).unwrap();
        assert_eq!(total.amount_minor, 300);
    }

    #[test]
    fn test_money_try_sum_mismatch() {
        let values = [
            Money::new(100, Currency::Rub),
            Money::new(200, Currency::Usd),
        ];
        assert!(Money::try_sum(values.iter(), Currency::Rub).is_none());
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let rub = Money::new(100, Currency::Rub);
        let usd = Money::new(100, Currency::Usd);
        assert!(rub.try_add(&usd).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("RUB"), Some(Currency::Rub));
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
