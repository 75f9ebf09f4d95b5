use chrono::TimeZone;

use crate::domain::types::PlaceId;
use crate::dto::places::PlaceDetailDto;
use crate::engine::locale::Locale;
use crate::engine::map::{directions_url, search_url};
use crate::repository::CollectionReader;

use super::collections::find_collection;
use super::{ServiceError, ServiceResult};

/// Place detail page.
///
/// Both the collection and the place must exist; either missing yields
/// `NotFound`. `tz` decides the calendar day shown as the add date.
pub fn show_place<R, Tz, L>(
    collection_id: &str,
    place_id: &str,
    repo: &R,
    tz: &Tz,
    locale: &L,
) -> ServiceResult<PlaceDetailDto>
where
    R: CollectionReader,
    Tz: TimeZone,
    L: Locale + ?Sized,
{
    let collection = find_collection(collection_id, repo)?;

    let place_id = match PlaceId::new(place_id) {
        Ok(place_id) => place_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let Some(place) = collection.find_place(&place_id) else {
        log::debug!("Place {place_id} not found in collection {}", collection.id);
        return Err(ServiceError::NotFound);
    };

    Ok(PlaceDetailDto {
        collection_id: collection.id.to_string(),
        collection_title: collection.title.to_string(),
        rating_label: place.rating.label(),
        added_on: locale.format_day(place.added_at.with_timezone(tz).date_naive()),
        directions_url: directions_url(&place.coordinates),
        search_url: search_url(&place.coordinates),
        place: place.clone(),
    })
}
