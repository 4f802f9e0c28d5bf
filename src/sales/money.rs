use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// `Money` is an exact decimal quantity. Sums are never rounded; rounding to
/// cents only happens when the value is displayed.
/// Adding is always checked, see [`Money::checked_add`].
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

/// Text that isn't a plain `[+-]digits[.digits]` amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount {0:?}")]
pub struct ParseMoneyError(String);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// `num * 10^-scale`, e.g. `Money::new(15, 1)` is 1.5
    pub fn new(num: i64, scale: u32) -> Self {
        Money(Decimal::new(num, scale))
    }

    /// `None` when the sum is out of `Decimal` range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError(s.to_owned());
        let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        // "." alone, "-", "" and anything with separators or exponents are out
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(err());
        }
        // rust_decimal is more forgiving than we want ("1_000"), so only hand it
        // the canonical form
        let canonical = format!(
            "{}{}.{}",
            if s.starts_with('-') { "-" } else { "" },
            if whole.is_empty() { "0" } else { whole },
            if fraction.is_empty() { "0" } else { fraction },
        );
        Decimal::from_str(&canonical).map(Money).map_err(|_| err())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.trim().parse().map_err(serde::de::Error::custom)
    }
}

/// Two decimal places, midpoints away from zero, thousands separated by `,`.
impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        if rounded.is_sign_negative() && !rounded.is_zero() {
            f.write_str("-")?;
        }
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, ".{}", fraction)
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Money").field(&self.0.to_string()).finish()
    }
}
