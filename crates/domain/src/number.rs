//! Lenient decimal integers read from free-form text fields.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An integer typed into a form field, or "not a number".
///
/// Parsing never fails: text without a leading decimal number becomes
/// [`FormInt::nan`], which serializes to JSON `null`. The request is still
/// sent and the collaborator decides what to do with it.
///
/// Values that do not fit an `i64` are kept as the nearest `f64`, the way a
/// browser number would hold them. Only an infinite value degrades to `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormInt(Repr);

#[derive(Debug, Clone, Copy, Default)]
enum Repr {
    Int(i64),
    Wide(f64),
    #[default]
    NaN,
}

impl FormInt {
    /// A valid number.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Repr::Int(value))
    }

    /// Not a number.
    #[must_use]
    pub fn nan() -> Self {
        Self(Repr::NaN)
    }

    /// Parse the leading decimal integer of `text`.
    ///
    /// Leading whitespace and a single `+`/`-` sign are accepted, then the
    /// longest run of ASCII digits is read and anything after it is ignored
    /// (`"12px"` is 12). No digits gives "not a number".
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start_matches(is_blank);
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let end = rest
            .bytes()
            .position(|byte| !byte.is_ascii_digit())
            .unwrap_or(rest.len());
        Self(parse_digits(&rest[..end], negative))
    }

    /// The parsed value when it is a number that fits an `i64`.
    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self.0 {
            Repr::Int(value) => Some(value),
            Repr::Wide(_) | Repr::NaN => None,
        }
    }

    /// The parsed value as a float, `NaN` when not a number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self.0 {
            Repr::Int(value) => value as f64,
            Repr::Wide(value) => value,
            Repr::NaN => f64::NAN,
        }
    }

    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self.0, Repr::NaN)
    }
}

/// Whitespace skipped before a number or around a device name.
///
/// Matches what a browser strips: Unicode white space plus the byte order
/// mark, but not `U+0085`.
pub(crate) fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn parse_digits(digits: &str, negative: bool) -> Repr {
    if digits.is_empty() {
        return Repr::NaN;
    }
    let exact = digits.bytes().try_fold(0_i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        let acc = acc.checked_mul(10)?;
        if negative {
            acc.checked_sub(digit)
        } else {
            acc.checked_add(digit)
        }
    });
    match exact {
        Some(value) => Repr::Int(value),
        None => match digits.parse::<f64>() {
            Ok(value) if negative => Repr::Wide(-value),
            Ok(value) => Repr::Wide(value),
            Err(_) => Repr::NaN,
        },
    }
}

impl PartialEq for FormInt {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Repr::Int(a), Repr::Int(b)) => a == b,
            (Repr::Wide(a), Repr::Wide(b)) => a.to_bits() == b.to_bits(),
            (Repr::NaN, Repr::NaN) => true,
            _ => false,
        }
    }
}

impl Eq for FormInt {}

impl Hash for FormInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Repr::Int(value) => (0_u8, value).hash(state),
            Repr::Wide(value) => (1_u8, value.to_bits()).hash(state),
            Repr::NaN => 2_u8.hash(state),
        }
    }
}

impl Serialize for FormInt {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // 2^64, the first float above the `u64` range.
        const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
        match self.0 {
            Repr::Int(value) => serializer.serialize_i64(value),
            // Integral and in range, so the cast is exact.
            Repr::Wide(value) if (0.0..U64_LIMIT).contains(&value) => {
                serializer.serialize_u64(value as u64)
            }
            Repr::Wide(value) if value.is_finite() => serializer.serialize_f64(value),
            Repr::Wide(_) | Repr::NaN => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FormInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Wide(f64),
        }

        Ok(match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::Int(value)) => Self::new(value),
            Some(Wire::Wide(value)) => Self(Repr::Wide(value.trunc())),
            None => Self::nan(),
        })
    }
}

impl From<i64> for FormInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FormInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Int(value) => value.fmt(f),
            Repr::Wide(value) if value.is_infinite() => {
                f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Repr::Wide(value) => value.fmt(f),
            Repr::NaN => f.write_str("NaN"),
        }
    }
}
