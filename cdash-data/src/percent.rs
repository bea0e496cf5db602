//! Percentages shown with at most one fraction digit (`4.2%`, `5%`).

use crate::error::PercentParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative percentage stored in tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent {
    tenths: u32,
}

impl Percent {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    /// Round a fraction (`0.042`) to the nearest tenth of a percent.
    pub fn from_fraction(fraction: f64) -> Self {
        let tenths = (fraction * 1000.0).round();
        Self {
            tenths: if tenths.is_finite() && tenths > 0.0 {
                tenths as u32
            } else {
                0
            },
        }
    }

    pub const fn tenths(&self) -> u32 {
        self.tenths
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.tenths / 10;
        match self.tenths % 10 {
            0 => write!(f, "{whole}%"),
            tenth => write!(f, "{whole}.{tenth}%"),
        }
    }
}

impl FromStr for Percent {
    type Err = PercentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix('%')
            .ok_or_else(|| PercentParseError::MissingSign(s.to_string()))?;
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| PercentParseError::InvalidValue(s.to_string()))?;
        if !value.is_finite() || value < 0.0 || value * 10.0 > f64::from(u32::MAX) {
            return Err(PercentParseError::InvalidValue(s.to_string()));
        }
        Ok(Self {
            tenths: (value * 10.0).round() as u32,
        })
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
