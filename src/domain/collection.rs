use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::collaborator::Collaborators;
use crate::domain::place::Place;
use crate::domain::types::{
    CityName, CollectionDescription, CollectionId, CollectionTitle, ImageUrl, PlaceId, SaveCount,
    Visibility,
};

/// A curated, named group of places.
///
/// This is the single stored shape. The list page works from
/// [`CollectionSummary`], the detail page reads the collection directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub id: CollectionId,
    pub title: CollectionTitle,
    pub description: Option<CollectionDescription>,
    pub city: CityName,
    pub visibility: Visibility,
    pub is_collaborative: bool,
    pub is_subscribed: bool,
    #[serde(default)]
    pub collaborators: Collaborators,
    #[serde(default)]
    pub places: Vec<Place>,
    pub save_count: SaveCount,
    pub cover_image: Option<ImageUrl>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Looks up an owned place by id.
    pub fn find_place(&self, id: &PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| &p.id == id)
    }

    /// Lightweight projection used by list views.
    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            city: self.city.clone(),
            is_public: self.visibility == Visibility::Public,
            has_collaborators: self.is_collaborative,
            place_count: self.place_count(),
            save_count: self.save_count,
            collaborators: self.collaborators.clone(),
            cover_image: self.cover_image.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Counts-only view of a [`Collection`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionSummary {
    pub id: CollectionId,
    pub title: CollectionTitle,
    pub description: Option<CollectionDescription>,
    pub city: CityName,
    pub is_public: bool,
    pub has_collaborators: bool,
    pub place_count: usize,
    pub save_count: SaveCount,
    pub collaborators: Collaborators,
    pub cover_image: Option<ImageUrl>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Collection> for CollectionSummary {
    fn from(value: &Collection) -> Self {
        value.summary()
    }
}
