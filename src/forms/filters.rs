use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CuisineName, Rating, TypeConstraintError};
use crate::engine::place_filter::PlaceFilterState;

/// Query-string shape of the place filters, e.g.
/// `?q=ramen&rating=loved&rating=ok&cuisine=Ramen`. Facet keys repeat once per
/// selected value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PlaceFiltersForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub q: String,
    #[serde(default, rename = "rating")]
    pub ratings: Vec<String>,
    #[serde(default, rename = "cuisine")]
    pub cuisines: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PlaceFiltersFormError {
    #[error("Place filters validation failed: {0}")]
    Validation(String),
    #[error("Place filters contain invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for PlaceFiltersFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for PlaceFiltersFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<PlaceFiltersForm> for PlaceFilterState {
    type Error = PlaceFiltersFormError;

    fn try_from(value: PlaceFiltersForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let ratings: BTreeSet<Rating> = value
            .ratings
            .iter()
            .map(|token| Rating::try_from(token.as_str()))
            .collect::<Result<_, TypeConstraintError>>()?;
        let cuisines: BTreeSet<String> = value
            .cuisines
            .into_iter()
            .map(|cuisine| CuisineName::new(cuisine).map(String::from))
            .collect::<Result<_, TypeConstraintError>>()?;

        // The query is kept verbatim; search matches it as typed.
        Ok(Self {
            search_query: value.q,
            ratings,
            cuisines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_state_from_query_values() {
        let form = PlaceFiltersForm {
            q: "ramen".to_string(),
            ratings: vec!["loved".into(), "not".into()],
            cuisines: vec![" Ramen ".into()],
        };

        let state: PlaceFilterState = form.try_into().unwrap();

        assert_eq!(state.search_query, "ramen");
        assert!(state.ratings.contains(&Rating::Loved));
        assert!(state.ratings.contains(&Rating::Disliked));
        assert!(state.cuisines.contains("Ramen"));
        assert_eq!(state.active_filter_count(), 3);
    }

    #[test]
    fn repeated_values_collapse() {
        let form = PlaceFiltersForm {
            ratings: vec!["ok".into(), "ok".into()],
            ..PlaceFiltersForm::default()
        };
        let state: PlaceFilterState = form.try_into().unwrap();
        assert_eq!(state.ratings.len(), 1);
    }

    #[test]
    fn rejects_unknown_ratings() {
        let form = PlaceFiltersForm {
            ratings: vec!["meh".into()],
            ..PlaceFiltersForm::default()
        };
        let result: Result<PlaceFilterState, _> = form.try_into();
        assert!(matches!(result, Err(PlaceFiltersFormError::TypeConstraint(_))));
    }

    #[test]
    fn rejects_overlong_queries() {
        let form = PlaceFiltersForm {
            q: "x".repeat(201),
            ..PlaceFiltersForm::default()
        };
        let result: Result<PlaceFilterState, _> = form.try_into();
        assert!(matches!(result, Err(PlaceFiltersFormError::Validation(_))));
    }
}
