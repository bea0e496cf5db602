//! US-dollar currency amounts.
//!
//! `Money` keeps the amount in integer cents and only ever shows itself as an
//! en-US formatted string (`$12,345.67`). Table cells, serialized records and
//! bridge payloads all carry that string; chart code reads [`Money::amount`]
//! instead of re-parsing it. [`parse_currency`] goes the other way for any
//! formatted string that arrives from outside.

use crate::error::CurrencyParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A currency amount in cents, displayed as US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Amount in dollars, for charting.
    pub fn amount(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.cents.unsigned_abs();
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

/// Insert `,` between every group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a formatted currency string such as `$12,345.67` or `-$1.00`.
///
/// The first character after an optional minus sign is taken to be the
/// currency symbol and dropped; every `,` separator is removed; what remains
/// must be a decimal number with at most two fraction digits.
pub fn parse_currency(input: &str) -> Result<Money, CurrencyParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CurrencyParseError::Empty);
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(symbol) if !symbol.is_ascii_digit() && symbol != '.' && symbol != ',' => {}
        _ => return Err(CurrencyParseError::MissingSymbol(input.to_string())),
    }
    let number: String = chars.as_str().chars().filter(|c| *c != ',').collect();
    if number.is_empty() {
        return Err(CurrencyParseError::MissingAmount(input.to_string()));
    }

    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number.as_str(), ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(CurrencyParseError::MissingAmount(input.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CurrencyParseError::InvalidAmount(input.to_string()));
    }
    if fraction.len() > 2 {
        return Err(CurrencyParseError::Precision(input.to_string()));
    }

    let overflow = || CurrencyParseError::Overflow(input.to_string());
    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| overflow())? * 10,
        _ => fraction.parse().map_err(|_| overflow())?,
    };
    let total = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or_else(overflow)?;

    Ok(Money::from_cents(if negative { -total } else { total }))
}

impl FromStr for Money {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_currency(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_currency(&s).map_err(de::Error::custom)
    }
}
