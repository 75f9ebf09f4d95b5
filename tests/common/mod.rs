//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use dining_log::domain::check_in::CheckIn;
use dining_log::domain::collaborator::{Collaborator, Collaborators};
use dining_log::domain::collection::Collection;
use dining_log::domain::place::Place;
use dining_log::domain::types::{
    Address, CheckInId, CityName, CollectionId, CollectionTitle, Coordinates, CuisineName,
    DisplayName, ImageUrl, Location, PlaceId, PlaceName, Rating, RestaurantName, SaveCount,
    UserId, Visibility,
};

/// 2024-03-15 21:00 in UTC+9.
pub fn tokyo_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(2024, 3, 15, 21, 0, 0)
        .unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn check_in(id: &str, timestamp: DateTime<Utc>, rating: Rating) -> CheckIn {
    CheckIn {
        id: CheckInId::new(id).expect("valid check-in id"),
        restaurant_name: RestaurantName::new(format!("Restaurant {id}")).unwrap(),
        location: Location::new("Shibuya, Tokyo").unwrap(),
        rating,
        dishes: Vec::new(),
        note: None,
        photos: Vec::new(),
        timestamp,
    }
}

pub fn collaborator(id: &str) -> Collaborator {
    Collaborator {
        id: UserId::new(id).expect("valid user id"),
        name: DisplayName::new(format!("User {id}")).unwrap(),
        avatar: ImageUrl::new(format!("https://i.pravatar.cc/100?u={id}")).unwrap(),
    }
}

pub fn collaborators(count: usize) -> Collaborators {
    Collaborators::new((1..=count).map(|i| collaborator(&format!("u{i}"))).collect())
        .expect("unique collaborators")
}

pub fn place(id: &str, name: &str, cuisine: &str, rating: Rating) -> Place {
    Place {
        id: PlaceId::new(id).expect("valid place id"),
        name: PlaceName::new(name).unwrap(),
        address: Address::new("1-1-1 Chiyoda").unwrap(),
        city: CityName::new("Tokyo").unwrap(),
        rating,
        cuisine: CuisineName::new(cuisine).unwrap(),
        photo: None,
        coordinates: Coordinates::new(35.68, 139.76).unwrap(),
        added_by: collaborator("me"),
        added_at: utc(2024, 3, 1, 12, 0),
        notes: None,
    }
}

pub fn collection(id: &str, city: &str, places: Vec<Place>) -> Collection {
    Collection {
        id: CollectionId::new(id).expect("valid collection id"),
        title: CollectionTitle::new(format!("Collection {id}")).unwrap(),
        description: None,
        city: CityName::new(city).unwrap(),
        visibility: Visibility::Public,
        is_collaborative: false,
        is_subscribed: false,
        collaborators: Collaborators::default(),
        places,
        save_count: SaveCount::new(0).unwrap(),
        cover_image: None,
        updated_at: utc(2024, 3, 10, 12, 0),
    }
}
