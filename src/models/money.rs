//! Money type for representing peso amounts
//!
//! Amounts are whole Colombian pesos stored as `u64`; the domain has no
//! sub-unit amounts and no negative incomes. Category shares computed from a
//! total may be fractional, so they are carried as `f64` and only rounded
//! when formatted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative amount of whole pesos
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create a Money amount from whole pesos
    ///
    /// # Examples
    /// ```
    /// use finanzapp::models::Money;
    /// let salary = Money::from_pesos(2_000_000);
    /// assert_eq!(salary.pesos(), 2_000_000);
    /// ```
    pub const fn from_pesos(pesos: u64) -> Self {
        Self(pesos)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pesos
    pub const fn pesos(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// The amount as a real number, for share computations
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Addition that clamps at the maximum representable amount
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Format using the abbreviated es-CO rule ("$2.8 millones", "$400 mil")
    pub fn format_compact(&self) -> String {
        format_currency(self.as_f64())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", group_thousands(self.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Group an integer with the es-CO thousands separator (`1.234.567`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a (possibly fractional) peso amount for display
///
/// Large amounts are abbreviated: billions as "mil millones", millions as
/// "millones" (one decimal), thousands as "mil" (no decimals). Smaller
/// amounts keep up to three decimals with a comma as decimal separator.
pub fn format_currency(amount: f64) -> String {
    format_currency_with_symbol(amount, "$")
}

/// [`format_currency`] with a custom currency symbol
pub fn format_currency_with_symbol(amount: f64, symbol: &str) -> String {
    if amount >= 1_000_000_000.0 {
        format!("{}{:.1} mil millones", symbol, amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("{}{:.1} millones", symbol, amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{}{:.0} mil", symbol, amount / 1_000.0)
    } else {
        format!("{}{}", symbol, format_small(amount))
    }
}

fn format_small(amount: f64) -> String {
    let rendered = format!("{:.3}", amount);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    trimmed.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos() {
        let m = Money::from_pesos(1_500_000);
        assert_eq!(m.pesos(), 1_500_000);
        assert!(m.is_positive());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_pesos(0).to_string(), "$0");
        assert_eq!(Money::from_pesos(999).to_string(), "$999");
        assert_eq!(Money::from_pesos(1_000).to_string(), "$1.000");
        assert_eq!(Money::from_pesos(1_234_567).to_string(), "$1.234.567");
    }

    #[test]
    fn test_format_currency_tiers() {
        assert_eq!(format_currency(2_500_000_000.0), "$2.5 mil millones");
        assert_eq!(format_currency(2_800_000.0), "$2.8 millones");
        assert_eq!(format_currency(400_000.0), "$400 mil");
        assert_eq!(format_currency(1_000.0), "$1 mil");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(0.5), "$0,5");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(format_currency_with_symbol(2_800_000.0, "COP "), "COP 2.8 millones");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(Money::from_pesos(4_000_000).format_compact(), "$4.0 millones");
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = vec![Money::from_pesos(u64::MAX), Money::from_pesos(10)]
            .into_iter()
            .sum();
        assert_eq!(total.pesos(), u64::MAX);

        let mut acc = Money::from_pesos(1_500_000);
        acc += Money::from_pesos(2_500_000);
        assert_eq!(acc.pesos(), 4_000_000);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_pesos(2_000_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "2000000");
    }
}
