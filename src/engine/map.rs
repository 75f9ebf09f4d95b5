//! Map positioning and external map links.

use serde::Serialize;

use crate::domain::place::Place;
use crate::domain::types::Coordinates;

/// Where the map opens when a collection has no places (Tokyo).
pub const DEFAULT_MAP_CENTER: MapCenter = MapCenter {
    lat: 35.6762,
    lng: 139.6503,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

/// Mean position of `places`, or [`DEFAULT_MAP_CENTER`].
pub fn map_center(places: &[Place]) -> MapCenter {
    if places.is_empty() {
        return DEFAULT_MAP_CENTER;
    }
    let count = places.len() as f64;
    let (lat, lng) = places.iter().fold((0.0, 0.0), |(lat, lng), place| {
        (
            lat + place.coordinates.lat.get(),
            lng + place.coordinates.lng.get(),
        )
    });
    MapCenter {
        lat: lat / count,
        lng: lng / count,
    }
}

/// Turn-by-turn directions to the coordinates.
pub fn directions_url(coordinates: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        coordinates.lat, coordinates.lng
    )
}

/// Pin search for the coordinates.
pub fn search_url(coordinates: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        coordinates.lat, coordinates.lng
    )
}
