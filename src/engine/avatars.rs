//! Which collaborator avatars are drawn and how many collapse into "+k".

use serde::Serialize;

use crate::domain::collaborator::Collaborator;

/// Limit used by the stacked avatar row on the collection header.
pub const AVATAR_STACK_LIMIT: usize = 4;
/// Limit used by the compact row on collection cards.
pub const CARD_AVATAR_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvatarStack<'a> {
    pub shown: &'a [Collaborator],
    pub overflow: usize,
}

impl AvatarStack<'_> {
    /// The `+k` marker, only when something was collapsed.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

/// Returns `None` for an empty list so the caller skips the row entirely.
///
/// Order is kept as given and nothing is deduplicated.
pub fn avatar_stack(collaborators: &[Collaborator], max_display: usize) -> Option<AvatarStack<'_>> {
    if collaborators.is_empty() {
        return None;
    }

    let shown = &collaborators[..collaborators.len().min(max_display)];
    Some(AvatarStack {
        shown,
        overflow: collaborators.len().saturating_sub(max_display),
    })
}
