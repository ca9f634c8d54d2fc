use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Non-negative amount kept in hundredths, so sums and means stay exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price is required")]
    Empty,

    #[error("price must not be negative")]
    Negative,

    #[error("price must be a finite number")]
    NotFinite,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("price allows at most two decimal places")]
    TooPrecise,

    #[error("price is too large")]
    Overflow,
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if value.is_empty() {
            return Err(PriceError::Empty);
        }

        if value.starts_with('-') {
            return Err(PriceError::Negative);
        }

        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (value, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(PriceError::NotANumber(value.to_owned()));
        }

        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise);
        }

        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| PriceError::Overflow)?
        };

        let fraction = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().unwrap_or_default() * 10,
            _ => fraction.parse::<u64>().unwrap_or_default(),
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Price)
            .ok_or(PriceError::Overflow)
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }

        if value < 0.0 {
            return Err(PriceError::Negative);
        }

        let scaled = value * 100.0;
        let cents = scaled.round();

        if (scaled - cents).abs() > 1e-6 {
            return Err(PriceError::TooPrecise);
        }

        if cents >= u64::MAX as f64 {
            return Err(PriceError::Overflow);
        }

        Ok(Price(cents as u64))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let price = match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(value) => Price::try_from(value),
            RawPrice::Text(value) => value.parse(),
        };

        price.map_err(serde::de::Error::custom)
    }
}
