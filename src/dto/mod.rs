//! Owned view models handed to the presentation layer.

pub mod collections;
pub mod places;
pub mod timeline;
