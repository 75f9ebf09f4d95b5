use chrono::{DateTime, Utc};

use crate::domain::collaborator::Collaborator;
use crate::domain::collection::{Collection, CollectionSummary};
use crate::domain::place::NewPlace;
use crate::domain::types::CollectionId;
use crate::dto::collections::{
    AvatarStackDto, CitySectionDto, CollectionCardDto, CollectionDetailDto, RatingOptionDto,
};
use crate::engine::avatars::avatar_stack;
use crate::engine::city_groups::group_by_city;
use crate::engine::locale::Locale;
use crate::engine::map::map_center;
use crate::engine::place_filter::{PlaceFilterState, available_cuisines, filter_places};
use crate::engine::relative_time::format_distance_to_now;
use crate::forms::filters::PlaceFiltersForm;
use crate::forms::places::{AddPlaceForm, AddPlaceFormPayload};
use crate::models::config::AppConfig;
use crate::repository::CollectionReader;

use super::{ServiceError, ServiceResult};

/// Loads a collection or reports `NotFound`.
///
/// Identifiers that cannot be valid are treated as missing.
pub(crate) fn find_collection<R>(collection_id: &str, repo: &R) -> ServiceResult<Collection>
where
    R: CollectionReader,
{
    let collection_id = match CollectionId::new(collection_id) {
        Ok(collection_id) => collection_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_collection_by_id(&collection_id) {
        Ok(Some(collection)) => Ok(collection),
        Ok(None) => {
            log::debug!("Collection {collection_id} not found");
            Err(ServiceError::NotFound)
        }
        Err(e) => {
            log::error!("Failed to get collection: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Collections list page: cards grouped by city in first-seen order.
pub fn show_collections<R>(
    repo: &R,
    now: DateTime<Utc>,
    config: &AppConfig,
) -> ServiceResult<Vec<CitySectionDto>>
where
    R: CollectionReader,
{
    let summaries: Vec<CollectionSummary> = match repo.list_collections() {
        Ok(collections) => collections.iter().map(Collection::summary).collect(),
        Err(e) => {
            log::error!("Failed to list collections: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(group_by_city(&summaries)
        .into_iter()
        .map(|group| CitySectionDto {
            city: group.city.to_string(),
            collections: group
                .items
                .into_iter()
                .map(|summary| {
                    CollectionCardDto::new(
                        summary,
                        format_distance_to_now(summary.updated_at, now),
                        avatar_stack(&summary.collaborators, config.card_avatar_limit)
                            .map(AvatarStackDto::from),
                    )
                })
                .collect(),
        })
        .collect())
}

/// Collection detail page with `filters` applied to its places.
pub fn show_collection<R, L>(
    collection_id: &str,
    filters: &PlaceFilterState,
    repo: &R,
    config: &AppConfig,
    locale: &L,
) -> ServiceResult<CollectionDetailDto>
where
    R: CollectionReader,
    L: Locale + ?Sized,
{
    let collection = find_collection(collection_id, repo)?;

    let places = filter_places(&collection.places, filters, locale)
        .into_iter()
        .cloned()
        .collect();

    Ok(CollectionDetailDto {
        id: collection.id.to_string(),
        title: collection.title.to_string(),
        description: collection.description.as_ref().map(|d| d.to_string()),
        city: collection.city.to_string(),
        visibility: collection.visibility,
        avatars: avatar_stack(&collection.collaborators, config.avatar_stack_limit)
            .map(AvatarStackDto::from),
        total_places: collection.place_count(),
        places,
        rating_options: RatingOptionDto::all(filters),
        available_cuisines: available_cuisines(&collection.places),
        active_filter_count: filters.active_filter_count(),
        has_active_filters: filters.has_active_filters(),
        // The map always shows every place, filtered or not.
        map_center: map_center(&collection.places),
    })
}

/// [`show_collection`] driven by raw query parameters.
pub fn show_collection_with_query<R, L>(
    collection_id: &str,
    form: PlaceFiltersForm,
    repo: &R,
    config: &AppConfig,
    locale: &L,
) -> ServiceResult<CollectionDetailDto>
where
    R: CollectionReader,
    L: Locale + ?Sized,
{
    let filters = PlaceFilterState::try_from(form)?;
    show_collection(collection_id, &filters, repo, config, locale)
}

/// Validates an add-place submission against an existing collection.
///
/// Nothing is stored; the caller receives the place ready to persist.
pub fn prepare_new_place<R>(
    collection_id: &str,
    form: AddPlaceForm,
    added_by: Collaborator,
    now: DateTime<Utc>,
    repo: &R,
) -> ServiceResult<NewPlace>
where
    R: CollectionReader,
{
    let collection = find_collection(collection_id, repo)?;
    let payload = AddPlaceFormPayload::try_from(form)?;

    if payload.city != collection.city {
        log::info!(
            "Place city {} differs from collection city {}",
            payload.city,
            collection.city
        );
    }

    Ok(payload.into_new_place(added_by, now))
}
