//! Strongly-typed identifiers used across the domain.
//!
//! Both records are keyed by storage-assigned integers (`BIGSERIAL`), so the
//! newtypes wrap `i64` and only ever hold positive values when parsed from
//! request input.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::IdError;

/// Identifier of a snippet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(i64);

/// Identifier of a registered user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a value read back from storage.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        /// Parses request input; rejects anything that is not a positive integer.
        impl FromStr for $t {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s.parse().map_err(|_| IdError::NotANumber {
                    kind: $name,
                    input: s.to_string(),
                })?;
                if value < 1 {
                    return Err(IdError::NotPositive { kind: $name, value });
                }
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(SnippetId, "SnippetId");
impl_int_newtype!(UserId, "UserId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        let id: SnippetId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert_eq!(
            "0".parse::<SnippetId>(),
            Err(IdError::NotPositive { kind: "SnippetId", value: 0 })
        );
        assert!("-3".parse::<UserId>().is_err());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!(
            "abc".parse::<SnippetId>(),
            Err(IdError::NotANumber { .. })
        ));
        assert!("1.5".parse::<SnippetId>().is_err());
        assert!("".parse::<SnippetId>().is_err());
    }
}
