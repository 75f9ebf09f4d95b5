use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::check_in::CheckIn;
use crate::engine::date_buckets::DateBucket;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInCardDto {
    pub id: String,
    pub restaurant_name: String,
    pub location: String,
    /// Check-in spelling of the rating, e.g. `"not"`.
    pub rating: &'static str,
    pub rating_label: &'static str,
    pub dishes: Vec<String>,
    pub note: Option<String>,
    pub photos: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<&CheckIn> for CheckInCardDto {
    fn from(value: &CheckIn) -> Self {
        Self {
            id: value.id.to_string(),
            restaurant_name: value.restaurant_name.to_string(),
            location: value.location.to_string(),
            rating: value.rating.check_in_token(),
            rating_label: value.rating.label(),
            dishes: value.dishes.iter().map(|d| d.to_string()).collect(),
            note: value.note.as_ref().map(|n| n.to_string()),
            photos: value.photos.iter().map(|p| p.to_string()).collect(),
            timestamp: value.timestamp,
        }
    }
}

/// One dated section of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSectionDto {
    pub day: NaiveDate,
    pub label: String,
    /// Set for `Today` and `Yesterday`.
    pub highlighted: bool,
    pub check_ins: Vec<CheckInCardDto>,
}

impl From<DateBucket<'_>> for TimelineSectionDto {
    fn from(value: DateBucket<'_>) -> Self {
        Self {
            day: value.day,
            label: value.label,
            highlighted: value.kind.is_relative(),
            check_ins: value.check_ins.into_iter().map(CheckInCardDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDto {
    /// Days with at least one check-in, ascending.
    pub marked_days: Vec<NaiveDate>,
    pub selected_day: Option<NaiveDate>,
    /// Check-ins on `selected_day`; zero when nothing is selected.
    pub selected_count: usize,
}
