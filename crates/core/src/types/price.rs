//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    ///
    /// ```
    /// use midnight_bloom_core::{CurrencyCode, Price};
    ///
    /// let price = Price::from_cents(450, CurrencyCode::USD);
    /// assert_eq!(price.display(), "$4.50");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// The price of `quantity` units at this price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display, always with two decimal places (e.g., "$18.50").
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(
            self.currency_code, rhs.currency_code,
            "cannot add prices in different currencies"
        );
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(None, |acc: Option<Self>, price| {
            Some(acc.map_or(price, |total| total + price))
        })
        .unwrap_or_else(|| Self::zero(CurrencyCode::default()))
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_cents(1850, CurrencyCode::USD).display(), "$18.50");
        assert_eq!(Price::from_cents(900, CurrencyCode::USD).display(), "$9.00");
        assert_eq!(Price::from_cents(1999, CurrencyCode::EUR).display(), "€19.99");
    }

    #[test]
    fn test_times_multiplies_amount() {
        let price = Price::from_cents(450, CurrencyCode::USD).times(2);
        assert_eq!(price, Price::from_cents(900, CurrencyCode::USD));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert_eq!(total, Price::zero(CurrencyCode::USD));
        assert_eq!(total.display(), "$0.00");
    }

    #[test]
    fn test_sum_keeps_currency() {
        let total: Price = [
            Price::from_cents(100, CurrencyCode::GBP),
            Price::from_cents(250, CurrencyCode::GBP),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Price::from_cents(350, CurrencyCode::GBP));
    }
}
