pub mod filters;
pub mod places;
