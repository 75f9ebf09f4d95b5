use thiserror::Error;

use crate::domain::check_in::CheckIn;
use crate::domain::collection::Collection;
use crate::domain::types::CollectionId;

pub mod seed;

/// Failures reported by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be read.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Stored data failed domain validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repositories.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only operations for check-ins.
pub trait CheckInReader {
    /// Every check-in of the current user, in storage order.
    fn list_check_ins(&self) -> RepositoryResult<Vec<CheckIn>>;
}

/// Read-only operations for collections and the places they own.
pub trait CollectionReader {
    /// Every collection, in storage order.
    fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
    /// Retrieve a collection by its identifier.
    fn get_collection_by_id(&self, id: &CollectionId) -> RepositoryResult<Option<Collection>>;
}

/// Repository holding everything in memory.
///
/// There is no persistence layer; the data is handed in at construction and
/// never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    check_ins: Vec<CheckIn>,
    collections: Vec<Collection>,
}

impl InMemoryRepository {
    pub fn new(check_ins: Vec<CheckIn>, collections: Vec<Collection>) -> Self {
        Self {
            check_ins,
            collections,
        }
    }
}

impl CheckInReader for InMemoryRepository {
    fn list_check_ins(&self) -> RepositoryResult<Vec<CheckIn>> {
        Ok(self.check_ins.clone())
    }
}

impl CollectionReader for InMemoryRepository {
    fn list_collections(&self) -> RepositoryResult<Vec<Collection>> {
        Ok(self.collections.clone())
    }

    fn get_collection_by_id(&self, id: &CollectionId) -> RepositoryResult<Option<Collection>> {
        Ok(self.collections.iter().find(|c| &c.id == id).cloned())
    }
}
