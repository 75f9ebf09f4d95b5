use serde::Serialize;

use crate::domain::place::Place;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetailDto {
    pub collection_id: String,
    pub collection_title: String,
    pub place: Place,
    pub rating_label: &'static str,
    /// Day the place was added, e.g. `"Mar 5, 2024"`.
    pub added_on: String,
    pub directions_url: String,
    pub search_url: String,
}
