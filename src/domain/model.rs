use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A number as received on the query string, keeping the integer/float
/// distinction so it can be echoed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{raw}' is not a valid number")]
pub struct ParseNumberError {
    pub raw: String,
}

// -2^63 and 2^63 are both exactly representable as f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    /// Integer truncation toward zero, used by the prime/perfect checks and parity.
    pub fn truncated(&self) -> i64 {
        match *self {
            Number::Integer(n) => n,
            // Range is guaranteed by `FromStr`.
            Number::Float(f) => f.trunc() as i64,
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNumberError { raw: s.to_string() };
        let text = s.trim();

        if text.contains('.') {
            let value: f64 = text.parse().map_err(|_| invalid())?;
            let whole = value.trunc();
            if !value.is_finite() || whole < I64_LOWER || whole >= I64_UPPER {
                return Err(invalid());
            }
            Ok(Number::Float(value))
        } else {
            text.parse::<i64>().map(Number::Integer).map_err(|_| invalid())
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub number: Number,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}
