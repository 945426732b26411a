//! Money value object stored as integer minor units (cents).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use super::ValidationError;

/// An amount of the site currency in minor units.
///
/// Arithmetic saturates at the `i64` bounds so totals over stored records
/// never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// Largest amount a single record may carry: one trillion in major units.
    pub const MAX_RECORD_MINOR: i64 = 100_000_000_000_000;

    /// Creates an amount from minor units.
    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates an amount that must be strictly positive.
    pub fn positive(field: &str, minor: i64) -> Result<Self, ValidationError> {
        if minor <= 0 {
            return Err(ValidationError::invalid_format(field, "amount must be greater than zero"));
        }
        if minor > Self::MAX_RECORD_MINOR {
            return Err(ValidationError::invalid_format(field, "amount is too large"));
        }
        Ok(Self(minor))
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(Money::positive("amount", 0).is_err());
        assert!(Money::positive("amount", -5).is_err());
        assert_eq!(Money::positive("amount", 150).unwrap().minor(), 150);
    }

    #[test]
    fn sums_and_subtracts() {
        let total: Money = [Money::from_minor(100), Money::from_minor(250)].iter().sum();
        assert_eq!(total, Money::from_minor(350));
        assert_eq!(total - Money::from_minor(400), Money::from_minor(-50));
    }

    #[test]
    fn positive_rejects_amounts_above_record_limit() {
        assert!(Money::positive("amount", Money::MAX_RECORD_MINOR).is_ok());
        assert!(Money::positive("amount", Money::MAX_RECORD_MINOR + 1).is_err());
        assert!(Money::positive("amount", i64::MAX).is_err());
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max + max, max);
        assert_eq!(Money::from_minor(i64::MIN) - max, Money::from_minor(i64::MIN));
        let total: Money = [max, max, Money::from_minor(1)].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Money::from_minor(123456).to_string(), "1234.56");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&Money::from_minor(42)).unwrap(), "42");
    }
}
