//! Selection state for list views.
//!
//! [`SelectionSet`] is an insertion-ordered set of [`ModelId`]s. It holds no
//! visual state and emits nothing; the owning view mirrors membership onto its
//! rows and announces changes.

use std::collections::HashSet;

use super::collection::ModelId;

/// Ordered set of selected models.
///
/// Iteration order is the order in which models were selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// Selected ids in selection order.
    order: Vec<ModelId>,
    /// Same ids for O(1) lookup.
    lookup: HashSet<ModelId>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of selected models.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `id` is selected.
    pub fn contains(&self, id: ModelId) -> bool {
        self.lookup.contains(&id)
    }

    /// Adds `id`. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: ModelId) -> bool {
        if !self.lookup.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Removes `id`. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: ModelId) -> bool {
        if !self.lookup.remove(&id) {
            return false;
        }
        self.order.retain(|&other| other != id);
        true
    }

    /// Empties the selection, returning what was selected.
    pub fn clear(&mut self) -> Vec<ModelId> {
        self.lookup.clear();
        std::mem::take(&mut self.order)
    }

    /// Keeps only ids for which `keep` returns `true`, returning the dropped ids.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<ModelId>
    where
        F: FnMut(ModelId) -> bool,
    {
        let mut dropped = Vec::new();
        self.order.retain(|&id| {
            let kept = keep(id);
            if !kept {
                dropped.push(id);
            }
            kept
        });
        for id in &dropped {
            self.lookup.remove(id);
        }
        dropped
    }

    /// Iterates the selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.order.iter().copied()
    }

    /// Returns the most recently selected id.
    pub fn last(&self) -> Option<ModelId> {
        self.order.last().copied()
    }
}
