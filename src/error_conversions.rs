//! Error conversion glue between layers.
//!
//! Forms must not depend on service error types, so the mapping lives here.

use crate::forms::filters::PlaceFiltersFormError;
use crate::forms::places::AddPlaceFormError;
use crate::services::errors::ServiceError;

impl From<PlaceFiltersFormError> for ServiceError {
    fn from(val: PlaceFiltersFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddPlaceFormError> for ServiceError {
    fn from(val: AddPlaceFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
