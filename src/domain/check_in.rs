use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CheckInId, DishName, ImageUrl, Location, Note, Rating, RestaurantName};

/// A logged visit. Never mutated once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckIn {
    pub id: CheckInId,
    pub restaurant_name: RestaurantName,
    pub location: Location,
    pub rating: Rating,
    /// Dishes in the order they were entered.
    #[serde(default)]
    pub dishes: Vec<DishName>,
    pub note: Option<Note>,
    #[serde(default)]
    pub photos: Vec<ImageUrl>,
    /// Instant of the visit; drives both day bucketing and intra-day order.
    pub timestamp: DateTime<Utc>,
}
