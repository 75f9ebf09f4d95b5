pub use errors::{ServiceError, ServiceResult};

pub mod collections;
pub mod errors;
pub mod places;
pub mod timeline;
