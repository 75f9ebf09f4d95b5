//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, free text, coordinates and rating tokens are checked once at
//! the boundary and trusted everywhere else.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// A coordinate was not finite or fell outside its valid range.
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
    /// The same identifier was supplied twice where identifiers must be unique.
    #[error("duplicate {0}: {1}")]
    Duplicate(&'static str, String),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }

            /// Borrow the URL as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

macro_rules! bounded_f64_newtype {
    ($name:ident, $doc:expr, $field:expr, $min:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(try_from = "f64", into = "f64")]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite value inside the inclusive valid range.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && ($min..=$max).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::OutOfRange($field))
                }
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(CheckInId, "Unique identifier for a check-in.", "check-in id");
non_empty_string_newtype!(PlaceId, "Unique identifier for a place.", "place id");
non_empty_string_newtype!(
    CollectionId,
    "Unique identifier for a collection.",
    "collection id"
);
non_empty_string_newtype!(
    UserId,
    "Unique identifier for a user or collaborator.",
    "user id"
);

non_empty_string_newtype!(
    RestaurantName,
    "Name of the restaurant a check-in was logged at.",
    "restaurant name"
);
non_empty_string_newtype!(PlaceName, "Display name of a place.", "place name");
non_empty_string_newtype!(Address, "Street address of a place.", "address");
non_empty_string_newtype!(
    Location,
    "Free-text neighbourhood or area of a check-in.",
    "location"
);
non_empty_string_newtype!(CityName, "City a place or collection belongs to.", "city");
non_empty_string_newtype!(
    CuisineName,
    "Cuisine tag; free text drawn from a suggested set.",
    "cuisine"
);
non_empty_string_newtype!(DishName, "Name of a dish eaten during a visit.", "dish");
non_empty_string_newtype!(CollectionTitle, "Title of a collection.", "title");
non_empty_string_newtype!(
    CollectionDescription,
    "Optional collection blurb enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(Note, "Free-text note attached to a visit or place.", "note");
non_empty_string_newtype!(DisplayName, "Human readable user name.", "display name");

url_string_newtype!(ImageUrl, "Photo, cover or avatar URL.", "image url");

bounded_f64_newtype!(
    Latitude,
    "Latitude in degrees, between -90 and 90.",
    "latitude",
    -90.0,
    90.0
);
bounded_f64_newtype!(
    Longitude,
    "Longitude in degrees, between -180 and 180.",
    "longitude",
    -180.0,
    180.0
);

/// Number of users that saved a collection.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i32", into = "i32")]
pub struct SaveCount(i32);

impl SaveCount {
    /// Constructs a value that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("save count"))
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for SaveCount {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SaveCount> for i32 {
    fn from(value: SaveCount) -> Self {
        value.0
    }
}

/// A point on the map.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: Latitude,
    pub lng: Longitude,
}

impl Coordinates {
    /// Validates both components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            lat: Latitude::new(lat)?,
            lng: Longitude::new(lng)?,
        })
    }
}

/// Outcome of a visit.
///
/// Places and check-ins historically spelled the negative outcome differently
/// (`not_for_me` and `not`); both tokens parse into [`Rating::Disliked`] and
/// each context can still render its own spelling.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    #[serde(rename = "loved")]
    Loved,
    #[serde(rename = "ok")]
    Neutral,
    #[serde(rename = "not_for_me", alias = "not")]
    Disliked,
}

impl Rating {
    /// Every rating in display order.
    pub const ALL: [Rating; 3] = [Rating::Loved, Rating::Neutral, Rating::Disliked];

    /// Token used for places.
    pub const fn place_token(self) -> &'static str {
        match self {
            Self::Loved => "loved",
            Self::Neutral => "ok",
            Self::Disliked => "not_for_me",
        }
    }

    /// Token used for check-ins.
    pub const fn check_in_token(self) -> &'static str {
        match self {
            Self::Loved => "loved",
            Self::Neutral => "ok",
            Self::Disliked => "not",
        }
    }

    /// Badge text shown on cards and detail pages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loved => "Loved it",
            Self::Neutral => "It was ok",
            Self::Disliked => "Not for me",
        }
    }

    /// Short text used on filter chips.
    pub const fn filter_label(self) -> &'static str {
        match self {
            Self::Loved => "Loved",
            Self::Neutral => "Ok",
            Self::Disliked => "Not for me",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.place_token())
    }
}

impl TryFrom<&str> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "loved" => Ok(Self::Loved),
            "ok" => Ok(Self::Neutral),
            "not_for_me" | "not" => Ok(Self::Disliked),
            other => Err(TypeConstraintError::InvalidValue(format!("rating: {other}"))),
        }
    }
}

impl TryFrom<String> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Who can see a collection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = PlaceName::new("  Afuri  ").unwrap();
        assert_eq!(value.as_str(), "Afuri");
    }

    #[test]
    fn rejects_blank_identifiers() {
        let err = PlaceId::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("place id"));
    }

    #[test]
    fn validates_urls() {
        assert!(ImageUrl::new("https://i.pravatar.cc/100?u=1").is_ok());
        let err = ImageUrl::new("not-a-url").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("image url"));
    }

    #[test]
    fn validates_coordinate_ranges() {
        assert!(Coordinates::new(35.6762, 139.6503).is_ok());
        assert_eq!(
            Latitude::new(90.5).unwrap_err(),
            TypeConstraintError::OutOfRange("latitude")
        );
        assert_eq!(
            Longitude::new(f64::NAN).unwrap_err(),
            TypeConstraintError::OutOfRange("longitude")
        );
    }

    #[test]
    fn save_count_rejects_negative_numbers() {
        assert_eq!(SaveCount::new(0).unwrap().get(), 0);
        assert_eq!(
            SaveCount::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("save count")
        );
    }

    #[test]
    fn both_negative_rating_spellings_parse_to_disliked() {
        assert_eq!(Rating::try_from("not_for_me").unwrap(), Rating::Disliked);
        assert_eq!(Rating::try_from("not").unwrap(), Rating::Disliked);
        assert_eq!(Rating::Disliked.place_token(), "not_for_me");
        assert_eq!(Rating::Disliked.check_in_token(), "not");
    }

    #[test]
    fn unknown_rating_tokens_fail() {
        let err = Rating::try_from("meh").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidValue("rating: meh".into()));
    }

    #[test]
    fn rating_labels_differ_by_context() {
        assert_eq!(Rating::Neutral.label(), "It was ok");
        assert_eq!(Rating::Neutral.filter_label(), "Ok");
    }

    #[test]
    fn rating_wire_tokens() {
        let disliked: Rating = serde_json::from_str("\"not\"").unwrap();
        assert_eq!(disliked, Rating::Disliked);
        assert_eq!(serde_json::to_string(&disliked).unwrap(), "\"not_for_me\"");
        assert!(serde_json::from_str::<Rating>("\"meh\"").is_err());

        let coords: Result<Coordinates, _> = serde_json::from_str(r#"{"lat": 95.0, "lng": 0.0}"#);
        assert!(coords.is_err());
    }
}
