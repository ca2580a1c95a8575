//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! filter tokens, in-range coordinates) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string could not be parsed as a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Latitude outside of `[-90, 90]`.
    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),
    /// Longitude outside of `[-180, 180]`.
    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CampsiteId, "Unique identifier for a campsite.");

/// Country filter token.
///
/// `""` and `"all"` (in any letter case) both mean "no filter" and collapse to
/// [`CountryFilter::Any`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    #[default]
    Any,
    Only(String),
}

impl CountryFilter {
    pub fn new(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::Any
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Token to send to the listing endpoint, if any.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Only(code) => Some(code),
        }
    }

    /// Case-insensitive comparison against a card's country code.
    pub fn matches(&self, country: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(code) => code.to_lowercase() == country.trim().to_lowercase(),
        }
    }
}

/// Validated geographic point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Rejects non-finite values and points outside the valid lat/lng ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TypeConstraintError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(TypeConstraintError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(TypeConstraintError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Parses raw attribute strings such as `data-lat`/`data-lng`.
    pub fn parse(lat: &str, lng: &str) -> Result<Self, TypeConstraintError> {
        Self::new(parse_number(lat)?, parse_number(lng)?)
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

fn parse_number(raw: &str) -> Result<f64, TypeConstraintError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TypeConstraintError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campsite_id_rejects_non_positive() {
        assert_eq!(CampsiteId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CampsiteId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CampsiteId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn campsite_id_deserializes_through_validation() {
        let id: CampsiteId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
        assert!(serde_json::from_str::<CampsiteId>("0").is_err());
    }

    #[test]
    fn country_filter_treats_all_and_empty_as_any() {
        assert_eq!(CountryFilter::new(""), CountryFilter::Any);
        assert_eq!(CountryFilter::new("  ALL "), CountryFilter::Any);
        assert_eq!(CountryFilter::new(" hr "), CountryFilter::Only("hr".into()));
        assert_eq!(CountryFilter::new("hr").as_query(), Some("hr"));
    }

    #[test]
    fn country_filter_matches_case_insensitively() {
        let filter = CountryFilter::new("HR");
        assert!(filter.matches("hr"));
        assert!(!filter.matches("si"));
        assert!(CountryFilter::Any.matches("anything"));
    }

    #[test]
    fn coordinates_validate_ranges() {
        assert!(Coordinates::new(45.0, 15.0).is_ok());
        assert_eq!(
            Coordinates::new(91.0, 0.0),
            Err(TypeConstraintError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinates::new(0.0, -181.0),
            Err(TypeConstraintError::LongitudeOutOfRange(-181.0))
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn coordinates_parse_rejects_garbage() {
        assert!(matches!(
            Coordinates::parse("abc", "1"),
            Err(TypeConstraintError::InvalidNumber(_))
        ));
        let point = Coordinates::parse(" 45.5 ", "13.25").unwrap();
        assert_eq!(point.lat(), 45.5);
        assert_eq!(point.lng(), 13.25);
    }
}
