//! Grouping of collections by city.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::collection::{Collection, CollectionSummary};
use crate::domain::place::Place;
use crate::domain::types::CityName;

/// Anything that belongs to a city.
pub trait CityScoped {
    fn city(&self) -> &CityName;
}

impl CityScoped for Collection {
    fn city(&self) -> &CityName {
        &self.city
    }
}

impl CityScoped for CollectionSummary {
    fn city(&self) -> &CityName {
        &self.city
    }
}

impl CityScoped for Place {
    fn city(&self) -> &CityName {
        &self.city
    }
}

/// Items of one city, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityGroup<'a, T> {
    pub city: &'a CityName,
    pub items: Vec<&'a T>,
}

/// Stable partition by city.
///
/// Cities appear in the order they are first seen; items keep their relative
/// input order inside each city.
pub fn group_by_city<T: CityScoped>(items: &[T]) -> Vec<CityGroup<'_, T>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CityGroup<'_, T>> = Vec::new();

    for item in items {
        let city = item.city();
        match index.get(city.as_str()) {
            Some(&position) => groups[position].items.push(item),
            None => {
                index.insert(city.as_str(), groups.len());
                groups.push(CityGroup {
                    city,
                    items: vec![item],
                });
            }
        }
    }

    groups
}
