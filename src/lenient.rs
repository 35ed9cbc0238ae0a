//! Permissive number parsing for user-entered fields.
//!
//! Form fields are free text. A field that does not start with a number is treated as missing
//! rather than an error, and the callers pick the fallback explicitly.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Parse the longest numeric prefix of the input, ignoring leading whitespace.
///
/// `"12.5 MW"` parses as `12.5`, `"abc"` and `""` do not parse. Non-finite results are rejected.
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits != 0 || fraction_digits != 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits != 0 {
            end = exponent_end + exponent_digits;
        }
    }

    input[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// A free-text numeric field.
///
/// Parsing never fails: anything that is not a number becomes an empty field.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LenientFloat(pub Option<f64>);

impl LenientFloat {
    pub const EMPTY: Self = Self(None);

    /// The parsed value, or zero.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// The parsed value, unless it is missing or zero.
    ///
    /// Form defaults treat zero the same way as an empty field.
    #[must_use]
    pub fn nonzero_or(self, default: f64) -> f64 {
        self.0.filter(|value| *value != 0.0).unwrap_or(default)
    }

    /// The parsed value, if it is strictly positive.
    #[must_use]
    pub fn positive(self) -> Option<f64> {
        self.0.filter(|value| *value > 0.0)
    }
}

impl From<f64> for LenientFloat {
    fn from(value: f64) -> Self {
        Self(Some(value).filter(|value| value.is_finite()))
    }
}

impl FromStr for LenientFloat {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_float(input)))
    }
}

impl Display for LenientFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for LenientFloat {
    #[expect(clippy::cast_precision_loss)]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Float(f64),
            Integer(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Float(value) => Self::from(value),
            Raw::Integer(value) => Self::from(value as f64),
            Raw::Text(text) => Self(parse_float(&text)),
        })
    }
}

impl Serialize for LenientFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
