use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Numeric identifier of a food truck location.
///
/// Any 32-bit integer can be held so that lookups with arbitrary values are
/// expressible, but only strictly positive identifiers are accepted when a
/// record is created. See [`LocationId::is_valid`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(i32);

impl LocationId {
    /// Wrap a raw integer.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns `true` if the identifier may key a stored record (`> 0`).
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LocationId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<LocationId> for i32 {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

impl FromStr for LocationId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|e| TypeError::InvalidLocationId {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn positive_ids_are_valid() {
        assert!(LocationId::new(1).is_valid());
        assert!(LocationId::new(i32::MAX).is_valid());
    }

    #[test]
    fn zero_and_negative_ids_are_invalid() {
        assert!(!LocationId::new(0).is_valid());
        assert!(!LocationId::new(-1).is_valid());
        assert!(!LocationId::new(i32::MIN).is_valid());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(LocationId::default().get(), 0);
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        let id: LocationId = " 42 ".parse().unwrap();
        assert_eq!(id, LocationId::new(42));
    }

    #[test]
    fn parse_accepts_negative() {
        let id: LocationId = "-7".parse().unwrap();
        assert_eq!(id.get(), -7);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "forty-two".parse::<LocationId>().unwrap_err();
        assert!(matches!(err, TypeError::InvalidLocationId { .. }));
        assert!(err.to_string().contains("forty-two"));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!("99999999999".parse::<LocationId>().is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&LocationId::new(17)).unwrap();
        assert_eq!(json, "17");
    }

    proptest! {
        #[test]
        fn display_parses_back(raw in any::<i32>()) {
            let id = LocationId::new(raw);
            let parsed: LocationId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }

        #[test]
        fn validity_matches_sign(raw in any::<i32>()) {
            prop_assert_eq!(LocationId::new(raw).is_valid(), raw > 0);
        }
    }
}
