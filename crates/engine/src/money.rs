use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Signed money amount represented as a **decimal** currency value.
///
/// Use this type for **all** monetary values in the engine (expense totals,
/// splits, balances, settlements). Arithmetic is exact decimal arithmetic;
/// the only inexact operation is [`Money::divide_evenly`], whose residue is
/// absorbed by [`Money::TOLERANCE`].
///
/// Addition and subtraction saturate at the bounds of [`Decimal`] instead of
/// panicking. Amounts accepted on the write path are capped at
/// [`Money::LIMIT`], far below the point where saturation can occur.
///
/// The value is signed:
/// - positive = the participant is owed money
/// - negative = the participant owes money
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::from_minor(12_34);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!((-amount).to_string(), "-12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap(), Money::from_minor(1000));
/// assert_eq!("10,5".parse::<Money>().unwrap(), Money::from_minor(1050));
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Band within which an amount is treated as exactly zero (one cent).
    pub const TOLERANCE: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// Largest absolute amount accepted for an expense, split or balance.
    pub const LIMIT: Money = Money(Decimal::from_parts(1_000_000_000, 0, 0, false, 0));

    /// Creates a new amount from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a new amount from integer minor units (cents).
    #[must_use]
    pub fn from_minor(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is exactly 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `true` if the amount lies within [`Money::TOLERANCE`] of zero.
    #[must_use]
    pub fn is_negligible(self) -> bool {
        self.abs() <= Self::TOLERANCE
    }

    /// Returns `true` if the amount is above `+TOLERANCE`.
    #[must_use]
    pub fn is_credit(self) -> bool {
        self > Self::TOLERANCE
    }

    /// Returns `true` if the amount is below `-TOLERANCE`.
    #[must_use]
    pub fn is_debt(self) -> bool {
        self < -Self::TOLERANCE
    }

    /// Returns `true` if `self` and `other` differ by at most [`Money::TOLERANCE`].
    #[must_use]
    pub fn approx_eq(self, other: Money) -> bool {
        (self - other).is_negligible()
    }

    /// Returns the amount if it lies within `±LIMIT`.
    pub fn within_limit(self) -> ResultEngine<Self> {
        if self.abs() > Self::LIMIT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be at most {} in absolute value",
                Self::LIMIT
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Divides the amount into `parts` equal shares.
    ///
    /// Returns `None` when `parts` is 0. Shares are not rounded, so
    /// `parts * share` may differ from `self` in the last decimal digit.
    #[must_use]
    pub fn divide_evenly(self, parts: usize) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        let parts = Decimal::from(u64::try_from(parts).ok()?);
        self.0.checked_div(parts).map(Money)
    }

    /// Rounds to two decimals, half away from zero.
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}{:.2}", rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| overflow())?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidAmount(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money::from_minor(signed))
    }
}
