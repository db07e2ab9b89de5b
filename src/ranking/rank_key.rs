//! Arbitrary-size rank keys
//!
//! Ranks handed out by class-order oracles are large non-negative integers
//! (variant bits shifted far past 64 bits are common), so they are stored as
//! normalized decimal digits and compared without ever going through a
//! fixed-width integer.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Order key of a class token; smaller sorts first
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRankKey", into = "String")]
pub struct RankKey {
    /// Decimal digits without leading zeros ("0" for zero)
    digits: String,
}

impl RankKey {
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so more digits means larger
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for RankKey {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<u128> for RankKey {
    fn from(value: u128) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<usize> for RankKey {
    fn from(value: usize) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

/// Error for strings that are not non-negative decimal integers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rank key '{0}': expected a non-negative decimal integer")]
pub struct ParseRankKeyError(pub String);

impl FromStr for RankKey {
    type Err = ParseRankKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseRankKeyError(s.to_string()));
        }
        let digits = trimmed.trim_start_matches('0');
        Ok(Self {
            digits: if digits.is_empty() {
                "0".to_string()
            } else {
                digits.to_string()
            },
        })
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl From<RankKey> for String {
    fn from(key: RankKey) -> Self {
        key.digits
    }
}

/// Wire form of a rank: JSON integer or decimal string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRankKey {
    Number(u64),
    Text(String),
}

impl TryFrom<RawRankKey> for RankKey {
    type Error = ParseRankKeyError;

    fn try_from(raw: RawRankKey) -> Result<Self, Self::Error> {
        match raw {
            RawRankKey::Number(value) => Ok(RankKey::from(value)),
            RawRankKey::Text(text) => text.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> RankKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_ordering_beyond_u128() {
        let huge = key("340282366920938463463374607431768211456"); // u128::MAX + 1
        let max = RankKey::from(u128::MAX);
        assert!(max < huge);
        assert!(RankKey::from(7u64) < max);
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        assert_eq!(key("000123"), RankKey::from(123u64));
        assert_eq!(key("0000"), RankKey::from(0u64));
        assert_eq!(key("0").as_str(), "0");
    }

    #[test]
    fn test_same_length_compares_digit_wise() {
        assert!(key("199") < key("200"));
        assert_eq!(key("42").cmp(&key("42")), Ordering::Equal);
    }

    #[test]
    fn test_invalid_strings_are_rejected() {
        assert!("".parse::<RankKey>().is_err());
        assert!("-1".parse::<RankKey>().is_err());
        assert!("1.5".parse::<RankKey>().is_err());
        assert!("12a".parse::<RankKey>().is_err());
    }

    #[test]
    fn test_serde_accepts_numbers_and_strings() {
        let from_number: RankKey = serde_json::from_str("17").unwrap();
        let from_string: RankKey =
            serde_json::from_str("\"18446744073709551616\"").unwrap();
        assert_eq!(from_number, RankKey::from(17u64));
        assert!(from_number < from_string);
        assert!(serde_json::from_str::<RankKey>("\"nope\"").is_err());

        let serialized = serde_json::to_string(&from_string).unwrap();
        assert_eq!(serialized, "\"18446744073709551616\"");
    }
}
