//! Demo data, laid out relative to the instant it is generated for.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::check_in::CheckIn;
use crate::domain::collaborator::{Collaborator, Collaborators};
use crate::domain::collection::Collection;
use crate::domain::place::Place;
use crate::domain::types::{
    Address, CheckInId, CityName, CollectionDescription, CollectionId, CollectionTitle,
    Coordinates, CuisineName, DishName, DisplayName, ImageUrl, Location, Note, PlaceId, PlaceName,
    Rating, RestaurantName, SaveCount, TypeConstraintError, UserId, Visibility,
};
use crate::repository::InMemoryRepository;

type SeedResult<T> = Result<T, TypeConstraintError>;

/// `days` before `now` at `hour:00` local time.
fn days_ago<Tz: TimeZone>(now: &DateTime<Tz>, days: i64, hour: u32) -> SeedResult<DateTime<Utc>> {
    let day = now.date_naive() - Duration::days(days);
    let naive = day
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| TypeConstraintError::InvalidValue(format!("hour {hour}")))?;
    now.timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TypeConstraintError::InvalidValue(format!("local time {naive}")))
}

fn user(id: &str, name: &str) -> SeedResult<Collaborator> {
    Ok(Collaborator {
        id: UserId::new(id)?,
        name: DisplayName::new(name)?,
        avatar: ImageUrl::new(format!("https://i.pravatar.cc/100?u={id}"))?,
    })
}

struct CheckInSeed<'a> {
    id: &'a str,
    restaurant: &'a str,
    location: &'a str,
    rating: Rating,
    dishes: &'a [&'a str],
    note: Option<&'a str>,
    photo: Option<&'a str>,
    days_ago: i64,
    hour: u32,
}

impl CheckInSeed<'_> {
    fn build<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> SeedResult<CheckIn> {
        Ok(CheckIn {
            id: CheckInId::new(self.id)?,
            restaurant_name: RestaurantName::new(self.restaurant)?,
            location: Location::new(self.location)?,
            rating: self.rating,
            dishes: self
                .dishes
                .iter()
                .map(|dish| DishName::new(*dish))
                .collect::<SeedResult<_>>()?,
            note: self.note.map(Note::new).transpose()?,
            photos: self.photo.map(ImageUrl::new).into_iter().collect::<SeedResult<_>>()?,
            timestamp: days_ago(now, self.days_ago, self.hour)?,
        })
    }
}

struct PlaceSeed<'a> {
    id: &'a str,
    name: &'a str,
    address: &'a str,
    city: &'a str,
    rating: Rating,
    cuisine: &'a str,
    lat: f64,
    lng: f64,
    added_days_ago: i64,
    notes: Option<&'a str>,
}

impl PlaceSeed<'_> {
    fn build(&self, added_by: &Collaborator, now: DateTime<Utc>) -> SeedResult<Place> {
        Ok(Place {
            id: PlaceId::new(self.id)?,
            name: PlaceName::new(self.name)?,
            address: Address::new(self.address)?,
            city: CityName::new(self.city)?,
            rating: self.rating,
            cuisine: CuisineName::new(self.cuisine)?,
            photo: None,
            coordinates: Coordinates::new(self.lat, self.lng)?,
            added_by: added_by.clone(),
            added_at: now - Duration::days(self.added_days_ago),
            notes: self.notes.map(Note::new).transpose()?,
        })
    }
}

fn check_ins<Tz: TimeZone>(now: &DateTime<Tz>) -> SeedResult<Vec<CheckIn>> {
    let seeds = [
        CheckInSeed {
            id: "1",
            restaurant: "Tai Meshi Uotora",
            location: "Jingumae, Shibuya, Tokyo",
            rating: Rating::Loved,
            dishes: &["Sea Bream Rice Set", "Sashimi Platter"],
            note: Some("The fresh sea bream was absolutely delicious."),
            photo: None,
            days_ago: 0,
            hour: 13,
        },
        CheckInSeed {
            id: "2",
            restaurant: "Café de Flore",
            location: "Minami-Aoyama, Minato, Tokyo",
            rating: Rating::Neutral,
            dishes: &["Croissant", "Café Latte"],
            note: None,
            photo: None,
            days_ago: 0,
            hour: 9,
        },
        CheckInSeed {
            id: "3",
            restaurant: "Menya Itto",
            location: "Nishi-Shinjuku, Shinjuku, Tokyo",
            rating: Rating::Loved,
            dishes: &["Special Tsukemen", "Seasoned Egg"],
            note: Some("Rich seafood broth, worth the wait in line."),
            photo: Some("https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=400"),
            days_ago: 1,
            hour: 12,
        },
        CheckInSeed {
            id: "4",
            restaurant: "Trattoria Da Napoli",
            location: "Jiyugaoka, Meguro, Tokyo",
            rating: Rating::Loved,
            dishes: &["Margherita", "Carbonara", "Tiramisu"],
            note: Some("Authentic Neapolitan pizza."),
            photo: None,
            days_ago: 1,
            hour: 19,
        },
        CheckInSeed {
            id: "5",
            restaurant: "Sushiro Shinjuku",
            location: "Kabukicho, Shinjuku, Tokyo",
            rating: Rating::Disliked,
            dishes: &["Tuna", "Salmon", "Shrimp Tempura"],
            note: Some("Too crowded and the fish wasn't fresh."),
            photo: None,
            days_ago: 2,
            hour: 20,
        },
        CheckInSeed {
            id: "6",
            restaurant: "Saryo Tsujiri",
            location: "Higashiyama, Kyoto",
            rating: Rating::Loved,
            dishes: &["Matcha Parfait", "Warabi Mochi"],
            note: Some("Perfect ending to the Kyoto trip."),
            photo: Some("https://images.unsplash.com/photo-1563805042-7684c019e1cb?w=400"),
            days_ago: 3,
            hour: 15,
        },
        CheckInSeed {
            id: "7",
            restaurant: "Bistro Japon",
            location: "Ginza, Chuo, Tokyo",
            rating: Rating::Neutral,
            dishes: &["Wagyu Steak", "Foie Gras"],
            note: None,
            photo: None,
            days_ago: 5,
            hour: 19,
        },
        CheckInSeed {
            id: "8",
            restaurant: "Tempura Kondo",
            location: "Ginza, Chuo, Tokyo",
            rating: Rating::Loved,
            dishes: &["Tempura Course", "Prawn", "Sweet Potato"],
            note: Some("The best tempura of my life."),
            photo: None,
            days_ago: 7,
            hour: 12,
        },
    ];

    seeds.iter().map(|seed| seed.build(now)).collect()
}

#[allow(clippy::too_many_arguments)]
fn collection(
    id: &str,
    title: &str,
    description: Option<&str>,
    city: &str,
    visibility: Visibility,
    collaborators: Vec<Collaborator>,
    places: Vec<Place>,
    saves: i32,
    updated_at: DateTime<Utc>,
) -> SeedResult<Collection> {
    Ok(Collection {
        id: CollectionId::new(id)?,
        title: CollectionTitle::new(title)?,
        description: description.map(CollectionDescription::new).transpose()?,
        city: CityName::new(city)?,
        visibility,
        is_collaborative: !collaborators.is_empty(),
        is_subscribed: false,
        collaborators: Collaborators::new(collaborators)?,
        places,
        save_count: SaveCount::new(saves)?,
        cover_image: None,
        updated_at,
    })
}

fn collections(now: DateTime<Utc>) -> SeedResult<Vec<Collection>> {
    let me = user("me", "You")?;
    let alice = user("u1", "Alice")?;
    let bob = user("u2", "Bob")?;
    let carol = user("u3", "Carol")?;
    let dave = user("u4", "Dave")?;

    let tokyo_gems = [
        PlaceSeed {
            id: "p1",
            name: "Tsuta Ramen",
            address: "1-14-1 Sugamo, Toshima",
            city: "Tokyo",
            rating: Rating::Loved,
            cuisine: "Ramen",
            lat: 35.7333,
            lng: 139.7394,
            added_days_ago: 2,
            notes: Some("Amazing truffle shoyu ramen"),
        },
        PlaceSeed {
            id: "p2",
            name: "Afuri",
            address: "1-1-7 Ebisu, Shibuya",
            city: "Tokyo",
            rating: Rating::Loved,
            cuisine: "Ramen",
            lat: 35.6467,
            lng: 139.71,
            added_days_ago: 5,
            notes: None,
        },
        PlaceSeed {
            id: "p3",
            name: "Kikanbo",
            address: "2-10-9 Kajicho, Chiyoda",
            city: "Tokyo",
            rating: Rating::Neutral,
            cuisine: "Ramen",
            lat: 35.6917,
            lng: 139.775,
            added_days_ago: 10,
            notes: Some("Very spicy, not for everyone"),
        },
    ]
    .iter()
    .map(|seed| seed.build(&me, now))
    .collect::<SeedResult<Vec<_>>>()?;

    let ramen_crew = [
        (
            &alice,
            PlaceSeed {
                id: "p4",
                name: "Ippudo Shanghai",
                address: "IAPM Mall, 999 Middle Huaihai Road",
                city: "Shanghai",
                rating: Rating::Loved,
                cuisine: "Ramen",
                lat: 31.2194,
                lng: 121.4596,
                added_days_ago: 1,
                notes: None,
            },
        ),
        (
            &bob,
            PlaceSeed {
                id: "p5",
                name: "Nagi Ramen",
                address: "L3-310, K11 Art Mall",
                city: "Shanghai",
                rating: Rating::Loved,
                cuisine: "Ramen",
                lat: 31.235,
                lng: 121.475,
                added_days_ago: 3,
                notes: Some("Green king is the best flavor"),
            },
        ),
        (
            &carol,
            PlaceSeed {
                id: "p6",
                name: "Ramen Champion",
                address: "B1, Raffles City",
                city: "Shanghai",
                rating: Rating::Neutral,
                cuisine: "Ramen",
                lat: 31.24,
                lng: 121.47,
                added_days_ago: 7,
                notes: None,
            },
        ),
        (
            &alice,
            PlaceSeed {
                id: "p7",
                name: "Menya Musashi",
                address: "L6, Grand Gateway",
                city: "Shanghai",
                rating: Rating::Loved,
                cuisine: "Ramen",
                lat: 31.195,
                lng: 121.435,
                added_days_ago: 14,
                notes: None,
            },
        ),
    ]
    .iter()
    .map(|(added_by, seed)| seed.build(added_by, now))
    .collect::<SeedResult<Vec<_>>>()?;

    let brunch = vec![
        PlaceSeed {
            id: "p8",
            name: "Pain Chaud",
            address: "115 Xinle Road",
            city: "Shanghai",
            rating: Rating::Loved,
            cuisine: "French",
            lat: 31.215,
            lng: 121.455,
            added_days_ago: 20,
            notes: Some("Best croissants in town!"),
        }
        .build(&me, now)?,
    ];

    let mut subscribed = collection(
        "3",
        "Brunch Spots",
        Some("Perfect weekend brunch locations"),
        "Shanghai",
        Visibility::Private,
        vec![],
        brunch,
        42,
        now - Duration::days(1),
    )?;
    subscribed.is_subscribed = true;

    Ok(vec![
        collection(
            "1",
            "Tokyo Hidden Gems",
            Some("My favorite spots discovered during my trip to Tokyo"),
            "Tokyo",
            Visibility::Public,
            vec![],
            tokyo_gems,
            89,
            now - Duration::days(2),
        )?,
        collection(
            "2",
            "Best Ramen in Town",
            Some("Top-tier ramen spots curated by the team"),
            "Shanghai",
            Visibility::Public,
            vec![alice.clone(), bob.clone(), carol.clone(), dave],
            ramen_crew,
            156,
            now - Duration::days(5),
        )?,
        subscribed,
        collection(
            "4",
            "Coffee & Desserts Tour",
            Some("Best cafes for coffee lovers"),
            "Kyoto",
            Visibility::Public,
            vec![user("u5", "Emma")?, user("u6", "Frank")?],
            vec![],
            203,
            now - Duration::days(10),
        )?,
        collection(
            "5",
            "Date Night Restaurants",
            None,
            "Tokyo",
            Visibility::Public,
            vec![
                user("u7", "Grace")?,
                user("u8", "Henry")?,
                user("u9", "Ivy")?,
                user("u10", "Jack")?,
                user("u11", "Kate")?,
                user("u12", "Leo")?,
            ],
            vec![],
            128,
            now - Duration::days(3),
        )?,
    ])
}

/// Repository filled with the demo data set, relative to `now`.
///
/// Check-in hours are interpreted in the time zone of `now`.
pub fn demo_repository<Tz: TimeZone>(now: &DateTime<Tz>) -> SeedResult<InMemoryRepository> {
    Ok(InMemoryRepository::new(
        check_ins(now)?,
        collections(now.with_timezone(&Utc))?,
    ))
}
