//! Pure view-building routines.
//!
//! Every function here is deterministic over its inputs: the caller supplies
//! the entities, the filter state, the current instant and the locale. Nothing
//! reads the system clock, logs or mutates its arguments.

pub mod avatars;
pub mod city_groups;
pub mod date_buckets;
pub mod locale;
pub mod map;
pub mod place_filter;
pub mod relative_time;
