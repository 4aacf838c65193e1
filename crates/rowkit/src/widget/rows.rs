//! Rendered rows and their model bindings.
//!
//! [`RowTable`] is the widget's element tree: every [`Row`] wraps exactly one
//! model, carries its rendered content and visual selected state, and has a
//! stable element id that drag payloads refer to. The table keeps an explicit
//! two-way mapping between [`RowId`] and [`ModelId`], plus the display order of
//! attached rows.

use std::collections::{HashMap, HashSet};

use slotmap::{new_key_type, SlotMap};

use crate::model::ModelId;

new_key_type! {
    /// Identifies a row within one list.
    pub struct RowId;
}

/// A rendered row bound to one model.
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    model: ModelId,
    element_id: String,
    content: String,
    selected: bool,
    attached: bool,
}

impl Row {
    /// The row's id.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The model this row displays.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Stable element id, unique per process.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the row is drawn as selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Outcome of a full rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Rows created for models that had none.
    pub created: usize,
    /// Existing rows detached and re-attached.
    pub reused: usize,
    /// Orphaned rows whose model is gone.
    pub destroyed: usize,
}

/// Row storage, model mapping, and display order.
#[derive(Debug)]
pub struct RowTable {
    prefix: String,
    next_element: u64,
    rows: SlotMap<RowId, Row>,
    /// Attached rows, top to bottom.
    order: Vec<RowId>,
    by_model: HashMap<ModelId, RowId>,
}

impl RowTable {
    /// Creates an empty table whose element ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_element: 0,
            rows: SlotMap::with_key(),
            order: Vec::new(),
            by_model: HashMap::new(),
        }
    }

    /// Number of attached rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no rows are attached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a row.
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Attached rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Row> + '_ {
        self.order.iter().filter_map(|&id| self.rows.get(id))
    }

    /// Attached row ids in display order.
    pub fn ids(&self) -> &[RowId] {
        &self.order
    }

    /// The row bound to `model`.
    pub fn row_for_model(&self, model: ModelId) -> Option<RowId> {
        self.by_model.get(&model).copied()
    }

    /// The model bound to `row`.
    pub fn model_for_row(&self, row: RowId) -> Option<ModelId> {
        self.rows.get(row).map(|r| r.model)
    }

    /// Display index of an attached row.
    pub fn index_of(&self, row: RowId) -> Option<usize> {
        self.order.iter().position(|&id| id == row)
    }

    /// The attached row at display index `index`.
    pub fn at(&self, index: usize) -> Option<RowId> {
        self.order.get(index).copied()
    }

    /// First attached row.
    pub fn first(&self) -> Option<RowId> {
        self.order.first().copied()
    }

    /// Last attached row.
    pub fn last(&self) -> Option<RowId> {
        self.order.last().copied()
    }

    /// Finds an attached row by element id.
    pub fn find_by_element(&self, element_id: &str) -> Option<RowId> {
        self.iter()
            .find(|row| row.element_id == element_id)
            .map(|row| row.id)
    }

    /// Renders `model` into a row attached at display `index` (clamped).
    ///
    /// If the model already has a row, that row is detached, refreshed with
    /// `content`, and re-attached instead of creating a second one.
    pub fn insert(&mut self, model: ModelId, content: String, index: usize) -> RowId {
        let id = match self.by_model.get(&model).copied() {
            Some(existing) => {
                self.detach(existing);
                if let Some(row) = self.rows.get_mut(existing) {
                    row.content = content;
                }
                existing
            }
            None => self.create(model, content),
        };
        self.attach(id, index);
        id
    }

    /// Destroys a row and its model binding.
    pub fn destroy(&mut self, row: RowId) -> Option<Row> {
        self.detach(row);
        let removed = self.rows.remove(row)?;
        self.by_model.remove(&removed.model);
        Some(removed)
    }

    /// Moves an attached row to display `index` (clamped, measured after the
    /// row is taken out).
    pub fn move_row(&mut self, row: RowId, index: usize) -> bool {
        if !self.detach(row) {
            return false;
        }
        self.attach(row, index);
        true
    }

    /// Sets a row's visual selected state.
    pub fn set_selected(&mut self, row: RowId, selected: bool) {
        if let Some(row) = self.rows.get_mut(row) {
            row.selected = selected;
        }
    }

    /// Discards the element tree and renders `entries` in order.
    ///
    /// Rows of models that are still present are reused; rows whose model is
    /// not in `entries` are destroyed. Every row comes back unselected.
    pub fn rebuild<I>(&mut self, entries: I) -> RebuildStats
    where
        I: IntoIterator<Item = (ModelId, String)>,
    {
        let mut stats = RebuildStats::default();
        for &id in &self.order {
            if let Some(row) = self.rows.get_mut(id) {
                row.attached = false;
            }
        }
        self.order.clear();

        let mut live = HashSet::new();
        let mut seen = HashSet::new();
        for (model, content) in entries {
            if !seen.insert(model) {
                continue;
            }
            let id = match self.by_model.get(&model).copied() {
                Some(existing) => {
                    if let Some(row) = self.rows.get_mut(existing) {
                        row.content = content;
                        row.selected = false;
                    }
                    stats.reused += 1;
                    existing
                }
                None => {
                    stats.created += 1;
                    self.create(model, content)
                }
            };
            let end = self.order.len();
            self.attach(id, end);
            live.insert(id);
        }

        let orphans: Vec<RowId> = self.rows.keys().filter(|id| !live.contains(id)).collect();
        for id in orphans {
            self.destroy(id);
            stats.destroyed += 1;
        }
        stats
    }

    fn create(&mut self, model: ModelId, content: String) -> RowId {
        let element_id = format!("{}-row-{}", self.prefix, self.next_element);
        self.next_element += 1;
        let id = self.rows.insert_with_key(|id| Row {
            id,
            model,
            element_id,
            content,
            selected: false,
            attached: false,
        });
        self.by_model.insert(model, id);
        id
    }

    fn attach(&mut self, row: RowId, index: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            if r.attached {
                return;
            }
            r.attached = true;
            let index = index.min(self.order.len());
            self.order.insert(index, row);
        }
    }

    fn detach(&mut self, row: RowId) -> bool {
        match self.rows.get_mut(row) {
            Some(r) if r.attached => {
                r.attached = false;
                self.order.retain(|&id| id != row);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    fn models(n: usize) -> Vec<ModelId> {
        (0..n).map(|i| Model::new(i).id()).collect()
    }

    fn contents(table: &RowTable) -> Vec<&str> {
        table.iter().map(|r| r.content()).collect()
    }

    #[test]
    fn test_insert_creates_one_row_per_model() {
        let m = models(2);
        let mut table = RowTable::new("list0");
        let a = table.insert(m[0], "A".into(), 0);
        let b = table.insert(m[1], "B".into(), 1);

        assert_eq!(table.len(), 2);
        assert_eq!(table.row_for_model(m[0]), Some(a));
        assert_eq!(table.model_for_row(b), Some(m[1]));
        assert_eq!(contents(&table), vec!["A", "B"]);
        assert!(!table.get(a).unwrap().is_selected());
    }

    #[test]
    fn test_insert_reuses_existing_row() {
        let m = models(2);
        let mut table = RowTable::new("list0");
        let a = table.insert(m[0], "A".into(), 0);
        table.insert(m[1], "B".into(), 1);
        let element = table.get(a).unwrap().element_id().to_string();

        let again = table.insert(m[0], "A2".into(), 5);
        assert_eq!(again, a);
        assert_eq!(table.len(), 2);
        assert_eq!(contents(&table), vec!["B", "A2"]);
        assert_eq!(table.get(a).unwrap().element_id(), element);
    }

    #[test]
    fn test_element_ids_are_unique_and_findable() {
        let m = models(3);
        let mut table = RowTable::new("list7");
        let ids: Vec<RowId> = m
            .iter()
            .enumerate()
            .map(|(i, &id)| table.insert(id, i.to_string(), i))
            .collect();

        let elements: HashSet<&str> = table.iter().map(|r| r.element_id()).collect();
        assert_eq!(elements.len(), 3);
        assert!(elements.iter().all(|e| e.starts_with("list7-row-")));
        let second = table.get(ids[1]).unwrap().element_id().to_string();
        assert_eq!(table.find_by_element(&second), Some(ids[1]));
        assert_eq!(table.find_by_element("list7-row-99"), None);
    }

    #[test]
    fn test_move_row() {
        let m = models(3);
        let mut table = RowTable::new("l");
        let a = table.insert(m[0], "A".into(), 0);
        table.insert(m[1], "B".into(), 1);
        table.insert(m[2], "C".into(), 2);

        assert!(table.move_row(a, 2));
        assert_eq!(contents(&table), vec!["B", "C", "A"]);
        assert_eq!(table.index_of(a), Some(2));
    }

    #[test]
    fn test_destroy_drops_mapping() {
        let m = models(2);
        let mut table = RowTable::new("l");
        let a = table.insert(m[0], "A".into(), 0);
        table.insert(m[1], "B".into(), 1);

        let row = table.destroy(a).unwrap();
        assert_eq!(row.model(), m[0]);
        assert_eq!(table.row_for_model(m[0]), None);
        assert!(table.get(a).is_none());
        assert_eq!(contents(&table), vec!["B"]);
        assert!(table.destroy(a).is_none());
    }

    #[test]
    fn test_rebuild_reuses_and_destroys_orphans() {
        let m = models(3);
        let mut table = RowTable::new("l");
        let a = table.insert(m[0], "A".into(), 0);
        let b = table.insert(m[1], "B".into(), 1);
        table.set_selected(b, true);

        let stats = table.rebuild(vec![(m[1], "B".into()), (m[2], "C".into())]);

        assert_eq!(
            stats,
            RebuildStats {
                created: 1,
                reused: 1,
                destroyed: 1
            }
        );
        assert!(table.get(a).is_none());
        assert_eq!(table.row_for_model(m[1]), Some(b));
        assert!(!table.get(b).unwrap().is_selected());
        assert_eq!(contents(&table), vec!["B", "C"]);
    }

    #[test]
    fn test_rebuild_ignores_duplicate_entries() {
        let m = models(1);
        let mut table = RowTable::new("l");
        table.rebuild(vec![(m[0], "A".into()), (m[0], "A".into())]);
        assert_eq!(table.len(), 1);
    }
}
