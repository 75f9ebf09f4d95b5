use serde::Serialize;

use crate::domain::collaborator::Collaborator;
use crate::domain::collection::CollectionSummary;
use crate::domain::place::Place;
use crate::domain::types::{Rating, Visibility};
use crate::engine::avatars::AvatarStack;
use crate::engine::map::MapCenter;
use crate::engine::place_filter::PlaceFilterState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarStackDto {
    pub shown: Vec<Collaborator>,
    pub overflow: usize,
    pub overflow_label: Option<String>,
}

impl From<AvatarStack<'_>> for AvatarStackDto {
    fn from(value: AvatarStack<'_>) -> Self {
        Self {
            shown: value.shown.to_vec(),
            overflow: value.overflow,
            overflow_label: value.overflow_label(),
        }
    }
}

/// Card on the collections list page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionCardDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub has_collaborators: bool,
    pub place_count: usize,
    pub save_count: i32,
    /// e.g. `"2 days ago"`.
    pub updated: String,
    pub avatars: Option<AvatarStackDto>,
}

impl CollectionCardDto {
    pub fn new(
        summary: &CollectionSummary,
        updated: String,
        avatars: Option<AvatarStackDto>,
    ) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.to_string(),
            description: summary.description.as_ref().map(|d| d.to_string()),
            is_public: summary.is_public,
            has_collaborators: summary.has_collaborators,
            place_count: summary.place_count,
            save_count: summary.save_count.get(),
            updated,
            avatars,
        }
    }
}

/// One rating chip in the filter bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingOptionDto {
    pub token: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl RatingOptionDto {
    /// Chips for every rating, marking those selected in `filters`.
    pub fn all(filters: &PlaceFilterState) -> Vec<Self> {
        Rating::ALL
            .into_iter()
            .map(|rating| Self {
                token: rating.place_token(),
                label: rating.filter_label(),
                active: filters.ratings.contains(&rating),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySectionDto {
    pub city: String,
    pub collections: Vec<CollectionCardDto>,
}

/// Collection detail page with the filtered place list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDetailDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub city: String,
    pub visibility: Visibility,
    pub avatars: Option<AvatarStackDto>,
    pub total_places: usize,
    pub places: Vec<Place>,
    pub rating_options: Vec<RatingOptionDto>,
    pub available_cuisines: Vec<String>,
    pub active_filter_count: usize,
    pub has_active_filters: bool,
    pub map_center: MapCenter,
}
