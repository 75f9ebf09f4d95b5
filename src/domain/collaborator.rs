use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::types::{DisplayName, ImageUrl, TypeConstraintError, UserId};

/// A user shown on a collection or credited with adding a place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collaborator {
    pub id: UserId,
    pub name: DisplayName,
    pub avatar: ImageUrl,
}

/// Ordered collaborator list without duplicate identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<Collaborator>", into = "Vec<Collaborator>")]
pub struct Collaborators(Vec<Collaborator>);

impl Collaborators {
    /// Keeps the given order and rejects repeated ids.
    pub fn new(collaborators: Vec<Collaborator>) -> Result<Self, TypeConstraintError> {
        let mut seen = HashSet::with_capacity(collaborators.len());
        for collaborator in &collaborators {
            if !seen.insert(collaborator.id.as_str()) {
                return Err(TypeConstraintError::Duplicate(
                    "collaborator",
                    collaborator.id.to_string(),
                ));
            }
        }
        Ok(Self(collaborators))
    }

    pub fn as_slice(&self) -> &[Collaborator] {
        &self.0
    }
}

impl std::ops::Deref for Collaborators {
    type Target = [Collaborator];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Collaborator>> for Collaborators {
    type Error = TypeConstraintError;

    fn try_from(value: Vec<Collaborator>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Collaborators> for Vec<Collaborator> {
    fn from(value: Collaborators) -> Self {
        value.0
    }
}
