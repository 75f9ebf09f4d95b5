use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::collaborator::Collaborator;
use crate::domain::types::{
    Address, CityName, Coordinates, CuisineName, ImageUrl, Note, PlaceId, PlaceName, Rating,
};

/// A point of interest owned by exactly one collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: PlaceName,
    pub address: Address,
    /// Expected to match the owning collection's city, but not enforced.
    pub city: CityName,
    pub rating: Rating,
    pub cuisine: CuisineName,
    pub photo: Option<ImageUrl>,
    pub coordinates: Coordinates,
    pub added_by: Collaborator,
    pub added_at: DateTime<Utc>,
    pub notes: Option<Note>,
}

/// Data required to add a new [`Place`] to a collection.
///
/// Coordinates are resolved later by geocoding, so they are absent here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlace {
    pub name: PlaceName,
    pub address: Address,
    pub city: CityName,
    pub rating: Rating,
    pub cuisine: CuisineName,
    pub photo: Option<ImageUrl>,
    pub added_by: Collaborator,
    pub added_at: DateTime<Utc>,
    pub notes: Option<Note>,
}
