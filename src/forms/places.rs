use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::collaborator::Collaborator;
use crate::domain::place::NewPlace;
use crate::domain::types::{
    Address, CityName, CuisineName, ImageUrl, Note, PlaceName, Rating, TypeConstraintError,
};
use crate::engine::locale::{EnUs, Locale};

/// Cuisines offered in the add-place picker. Any other value is accepted too.
pub const CUISINE_SUGGESTIONS: [&str; 16] = [
    "Ramen",
    "Sushi",
    "Italian",
    "French",
    "Chinese",
    "Korean",
    "Thai",
    "Indian",
    "Mexican",
    "American",
    "Mediterranean",
    "Cafe",
    "Bakery",
    "Dessert",
    "Bar",
    "Other",
];

/// A known venue that can prefill the add-place form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSuggestion {
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
}

pub static LOCATION_SUGGESTIONS: [LocationSuggestion; 4] = [
    LocationSuggestion {
        name: "Ichiran Ramen",
        address: "1-22-7 Jinnan, Shibuya",
        city: "Tokyo",
    },
    LocationSuggestion {
        name: "Tsuta Ramen",
        address: "1-14-1 Sugamo, Toshima",
        city: "Tokyo",
    },
    LocationSuggestion {
        name: "Afuri",
        address: "1-1-7 Ebisu, Shibuya",
        city: "Tokyo",
    },
    LocationSuggestion {
        name: "Nakiryu",
        address: "2-34-4 Minamiōtsuka, Toshima",
        city: "Tokyo",
    },
];

/// Suggestions whose name or address contains `query`, ignoring case.
///
/// An empty query yields nothing; the dropdown is closed until the user types.
pub fn suggest_locations(query: &str) -> Vec<&'static LocationSuggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = EnUs.fold_case(query);
    LOCATION_SUGGESTIONS
        .iter()
        .filter(|s| {
            EnUs.fold_case(s.name).contains(&query) || EnUs.fold_case(s.address).contains(&query)
        })
        .collect()
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddPlaceForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub cuisine: String,
    pub rating: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddPlaceFormPayload {
    pub name: PlaceName,
    pub address: Address,
    pub city: CityName,
    pub cuisine: CuisineName,
    pub rating: Rating,
    pub photo: Option<ImageUrl>,
    pub notes: Option<Note>,
}

impl AddPlaceFormPayload {
    pub fn into_new_place(self, added_by: Collaborator, added_at: DateTime<Utc>) -> NewPlace {
        NewPlace {
            name: self.name,
            address: self.address,
            city: self.city,
            rating: self.rating,
            cuisine: self.cuisine,
            photo: self.photo,
            added_by,
            added_at,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddPlaceFormError {
    #[error("Add place form validation failed: {0}")]
    Validation(String),
    #[error("Add place form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddPlaceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddPlaceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddPlaceForm> for AddPlaceFormPayload {
    type Error = AddPlaceFormError;

    fn try_from(value: AddPlaceForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let notes = match value.notes.trim() {
            "" => None,
            notes => Some(Note::new(notes)?),
        };
        let photo = value
            .photo
            .filter(|photo| !photo.trim().is_empty())
            .map(ImageUrl::new)
            .transpose()?;

        Ok(Self {
            name: PlaceName::new(value.name)?,
            address: Address::new(value.address)?,
            city: CityName::new(value.city)?,
            cuisine: CuisineName::new(value.cuisine)?,
            rating: Rating::try_from(value.rating)?,
            photo,
            notes,
        })
    }
}
