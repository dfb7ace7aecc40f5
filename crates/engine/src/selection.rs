//! The set of participants an EQUAL expense is divided among.

use std::collections::BTreeSet;

use crate::{EngineError, ParticipantId, ResultEngine};

/// Non-empty set of selected participants.
///
/// Removing the last participant is rejected with
/// [`EngineError::EmptySelection`] and leaves the selection unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSelection {
    selected: BTreeSet<ParticipantId>,
}

impl ParticipantSelection {
    /// Builds a selection from `ids`, dropping duplicates.
    pub fn new<I>(ids: I) -> ResultEngine<Self>
    where
        I: IntoIterator,
        I::Item: Into<ParticipantId>,
    {
        let selected: BTreeSet<ParticipantId> = ids.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            return Err(EngineError::EmptySelection);
        }
        Ok(Self { selected })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Adds `id`; returns `false` if it was already selected.
    pub fn insert(&mut self, id: impl Into<ParticipantId>) -> bool {
        self.selected.insert(id.into())
    }

    /// Removes `id`, refusing to empty the selection.
    ///
    /// Returns `Ok(false)` if `id` was not selected.
    pub fn remove(&mut self, id: &str) -> ResultEngine<bool> {
        if !self.selected.contains(id) {
            return Ok(false);
        }
        if self.selected.len() == 1 {
            return Err(EngineError::EmptySelection);
        }
        Ok(self.selected.remove(id))
    }

    /// Selects `id` if unselected, deselects it otherwise.
    pub fn toggle(&mut self, id: impl Into<ParticipantId>) -> ResultEngine<()> {
        let id = id.into();
        if self.selected.contains(&id) {
            self.remove(id.as_str())?;
        } else {
            self.insert(id);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> {
        self.selected.iter()
    }
}
