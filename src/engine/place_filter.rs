//! Search and facet filtering of places.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::place::Place;
use crate::domain::types::Rating;
use crate::engine::locale::{EnUs, Locale};

/// Current filter selection.
///
/// Values are replaced wholesale: every edit returns a new state and leaves
/// the old one untouched. Empty facet sets mean "no filter" on that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceFilterState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub ratings: BTreeSet<Rating>,
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
}

impl PlaceFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_query(&self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self.clone()
        }
    }

    /// Adds `rating` when absent, removes it when present.
    pub fn toggle_rating(&self, rating: Rating) -> Self {
        let mut ratings = self.ratings.clone();
        if !ratings.remove(&rating) {
            ratings.insert(rating);
        }
        Self {
            ratings,
            ..self.clone()
        }
    }

    /// Adds `cuisine` when absent, removes it when present.
    pub fn toggle_cuisine(&self, cuisine: &str) -> Self {
        let mut cuisines = self.cuisines.clone();
        if !cuisines.remove(cuisine) {
            cuisines.insert(cuisine.to_string());
        }
        Self {
            cuisines,
            ..self.clone()
        }
    }

    /// Empty query and empty facet sets.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Number shown on the filter button badge. Search text is not counted.
    pub fn active_filter_count(&self) -> usize {
        self.ratings.len() + self.cuisines.len()
    }

    /// Whether the "clear all" control should be offered.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty() || self.active_filter_count() > 0
    }
}

/// Free-function form of [`PlaceFilterState::active_filter_count`].
pub fn active_filter_count(state: &PlaceFilterState) -> usize {
    state.active_filter_count()
}

fn passes_facets(place: &Place, state: &PlaceFilterState) -> bool {
    if !state.ratings.is_empty() && !state.ratings.contains(&place.rating) {
        return false;
    }
    if !state.cuisines.is_empty() && !state.cuisines.contains(place.cuisine.as_str()) {
        return false;
    }
    true
}

fn passes_search<L: Locale + ?Sized>(place: &Place, folded_query: &str, locale: &L) -> bool {
    folded_query.is_empty()
        || [
            place.name.as_str(),
            place.address.as_str(),
            place.cuisine.as_str(),
        ]
        .into_iter()
        .any(|field| locale.fold_case(field).contains(folded_query))
}

/// Whether `place` survives every active criterion, folding case with `locale`.
///
/// Search text must appear in the name, address or cuisine. A non-empty
/// rating or cuisine set must contain the place's value. All three checks
/// must pass.
pub fn matches_in<L: Locale + ?Sized>(place: &Place, state: &PlaceFilterState, locale: &L) -> bool {
    let folded_query = locale.fold_case(&state.search_query);
    passes_search(place, &folded_query, locale) && passes_facets(place, state)
}

/// [`matches_in`] with English case folding.
pub fn matches(place: &Place, state: &PlaceFilterState) -> bool {
    matches_in(place, state, &EnUs)
}

/// Places that match `state`, in input order.
pub fn filter_places<'a, L: Locale + ?Sized>(
    places: &'a [Place],
    state: &PlaceFilterState,
    locale: &L,
) -> Vec<&'a Place> {
    let folded_query = locale.fold_case(&state.search_query);
    places
        .iter()
        .filter(|place| passes_search(place, &folded_query, locale) && passes_facets(place, state))
        .collect()
}

/// Distinct cuisines present in `places`, sorted ascending.
pub fn available_cuisines(places: &[Place]) -> Vec<String> {
    places
        .iter()
        .map(|place| place.cuisine.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collaborator::Collaborator;
    use crate::domain::types::{
        Address, CityName, Coordinates, CuisineName, DisplayName, ImageUrl, PlaceId, PlaceName,
        UserId,
    };
    use chrono::DateTime;

    fn place(id: &str, name: &str, cuisine: &str, rating: Rating) -> Place {
        Place {
            id: PlaceId::new(id).unwrap(),
            name: PlaceName::new(name).unwrap(),
            address: Address::new("1-1-7 Ebisu, Shibuya").unwrap(),
            city: CityName::new("Tokyo").unwrap(),
            rating,
            cuisine: CuisineName::new(cuisine).unwrap(),
            photo: None,
            coordinates: Coordinates::new(35.6467, 139.71).unwrap(),
            added_by: Collaborator {
                id: UserId::new("me").unwrap(),
                name: DisplayName::new("You").unwrap(),
                avatar: ImageUrl::new("https://i.pravatar.cc/100?u=me").unwrap(),
            },
            added_at: DateTime::from_timestamp(0, 0).unwrap(),
            notes: None,
        }
    }

    fn sample_places() -> Vec<Place> {
        vec![
            place("p1", "Tsuta Ramen", "Ramen", Rating::Loved),
            place("p2", "Kikanbo", "Ramen", Rating::Neutral),
            place("p3", "Sushi Saito", "Sushi", Rating::Disliked),
        ]
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn empty_state_keeps_everything() {
        let places = sample_places();
        let state = PlaceFilterState::new();
        assert!(places.iter().all(|p| matches(p, &state)));
    }

    #[test]
    fn search_is_a_case_insensitive_substring() {
        let places = sample_places();
        let state = PlaceFilterState::new().with_search_query("RAMEN");

        let result = filter_places(&places, &state, &EnUs);

        assert_eq!(ids(&result), ["p1", "p2"]);
    }

    #[test]
    fn search_covers_address() {
        let places = sample_places();
        let state = PlaceFilterState::new().with_search_query("ebisu");
        assert_eq!(filter_places(&places, &state, &EnUs).len(), 3);
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let places = sample_places();
        let state = PlaceFilterState::new()
            .with_search_query("ramen")
            .toggle_rating(Rating::Neutral);

        assert_eq!(ids(&filter_places(&places, &state, &EnUs)), ["p2"]);
    }

    #[test]
    fn values_within_a_facet_are_alternatives() {
        let places = sample_places();
        let state = PlaceFilterState::new()
            .toggle_rating(Rating::Loved)
            .toggle_rating(Rating::Disliked);

        assert_eq!(ids(&filter_places(&places, &state, &EnUs)), ["p1", "p3"]);
    }

    #[test]
    fn cuisine_facet_matches_exact_values() {
        let places = sample_places();
        let state = PlaceFilterState::new().toggle_cuisine("Sushi");
        assert_eq!(ids(&filter_places(&places, &state, &EnUs)), ["p3"]);

        let state = PlaceFilterState::new().toggle_cuisine("sushi");
        assert!(filter_places(&places, &state, &EnUs).is_empty());
    }

    #[test]
    fn toggling_twice_removes_the_value() {
        let state = PlaceFilterState::new().toggle_cuisine("Ramen");
        assert_eq!(state.active_filter_count(), 1);

        let state = state.toggle_cuisine("Ramen");
        assert_eq!(state, PlaceFilterState::new());
    }

    #[test]
    fn badge_count_ignores_search_text() {
        let state = PlaceFilterState::new()
            .with_search_query("ramen")
            .toggle_rating(Rating::Loved)
            .toggle_cuisine("Ramen")
            .toggle_cuisine("Sushi");

        assert_eq!(active_filter_count(&state), 3);
        assert!(state.has_active_filters());
        assert!(!state.cleared().has_active_filters());
    }

    #[test]
    fn editing_leaves_the_previous_state_untouched() {
        let before = PlaceFilterState::new().toggle_rating(Rating::Loved);
        let _after = before.toggle_rating(Rating::Loved);
        assert!(before.ratings.contains(&Rating::Loved));
    }

    #[test]
    fn available_cuisines_are_distinct_and_sorted() {
        let places = vec![
            place("p1", "B", "Sushi", Rating::Loved),
            place("p2", "A", "Ramen", Rating::Loved),
            place("p3", "C", "Ramen", Rating::Loved),
        ];
        assert_eq!(available_cuisines(&places), ["Ramen", "Sushi"]);
    }
}
