use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer};

use super::Money;

/// `MM/dd/yyyy`, used both to read and to print dates.
pub(super) const DATE_FORMAT: &str = "%m/%d/%Y";

/// One sale of a product. Read positionally from `name, MM/dd/yyyy, amount`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Sale {
    name: String,
    #[serde(deserialize_with = "deserialize_sale_date")]
    date: NaiveDate,
    amount: Money,
}

impl Sale {
    pub fn new(name: impl Into<String>, date: NaiveDate, amount: Money) -> Self {
        Self {
            name: name.into(),
            date,
            amount,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn amount(&self) -> Money {
        self.amount
    }
    /// English month name of the sale date, whatever the host locale is.
    pub fn month(&self) -> String {
        self.date.format("%B").to_string()
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.name,
            self.date.format(DATE_FORMAT),
            self.amount
        )
    }
}

// chrono alone would take "1/1/2022", a five digit year or year 0000, only
// the exact two-two-four digit shape from year 1 on is a sale date
fn deserialize_sale_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    let exact_shape = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !exact_shape {
        return Err(de::Error::custom(format!("date {:?} is not MM/dd/yyyy", s)));
    }
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(de::Error::custom)?;
    if date.year() < 1 {
        return Err(de::Error::custom(format!("date {:?} is before year 1", s)));
    }
    Ok(date)
}
