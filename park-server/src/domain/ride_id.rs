//! Ride identifier type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ValidationError;
use super::ride::RideType;

/// Maximum length of a ride identifier.
const MAX_LEN: usize = 10;

/// A validated ride identifier such as `L001` or `W012`.
///
/// Identifiers are 1 to 10 ASCII alphanumeric characters. The leading letter
/// conventionally names the ride category (`L`and, `W`ater, `K`ids), but the
/// catalog does not require it to agree with the ride's declared type.
///
/// Ordering is plain byte order on the identifier, which is the iteration
/// order the selection engine uses for tie-breaking.
///
/// # Examples
///
/// ```
/// use park_server::domain::{RideId, RideType};
///
/// let id = RideId::parse("W004").unwrap();
/// assert_eq!(id.as_str(), "W004");
/// assert_eq!(id.category(), Some(RideType::Water));
///
/// assert!(RideId::parse("").is_err());
/// assert!(RideId::parse("L-01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(String);

impl RideId {
    /// Parse a ride identifier.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::InvalidRideId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(ValidationError::InvalidRideId {
                reason: "must be at most 10 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidRideId {
                reason: "must be ASCII letters and digits",
            });
        }

        Ok(RideId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ride category implied by the identifier prefix, if any.
    pub fn category(&self) -> Option<RideType> {
        match self.0.as_bytes().first()?.to_ascii_uppercase() {
            b'L' => Some(RideType::Land),
            b'W' => Some(RideType::Water),
            b'K' => Some(RideType::Kids),
            _ => None,
        }
    }
}

impl fmt::Debug for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RideId({})", self.0)
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RideId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RideId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RideId::parse(raw.trim()).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any short alphanumeric string parses and round-trips
        #[test]
        fn roundtrip(s in "[A-Za-z0-9]{1,10}") {
            let id = RideId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Over-long identifiers are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{11,20}") {
            prop_assert!(RideId::parse(&s).is_err());
        }

        /// Any punctuation makes the identifier invalid
        #[test]
        fn punctuation_rejected(prefix in "[A-Z]{1,4}", p in "[-_. /#]", suffix in "[0-9]{0,4}") {
            let s = format!("{prefix}{p}{suffix}");
            prop_assert!(RideId::parse(&s).is_err());
        }
    }
}
