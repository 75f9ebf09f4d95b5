//! Entities shared by the engine, the services and the forms.

pub mod check_in;
pub mod collaborator;
pub mod collection;
pub mod place;
pub mod types;
