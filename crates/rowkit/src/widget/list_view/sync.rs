//! Keeping rows in step with the collection.

use rowkit_core::logging::{span_names, targets};
use rowkit_core::PerfSpan;

use crate::model::ModelId;

use super::{CollectionChange, ListView};

impl<T: Send + Sync + 'static> ListView<T> {
    /// Applies queued collection notifications to the rows and selection.
    ///
    /// Every mutating operation runs this first. Hosts that change the
    /// collection directly call it before reading the view.
    pub fn sync(&mut self) {
        loop {
            let change = self.pending.lock().pop_front();
            let Some(change) = change else {
                break;
            };
            match change {
                CollectionChange::Added(model) => self.on_added(model),
                CollectionChange::Removed(model) => self.on_removed(model),
                CollectionChange::Reset => {
                    tracing::debug!(target: targets::SYNC, list = %self.id, "collection reset");
                    self.render();
                }
            }
        }
    }

    /// Discards all rows, renders one per collection member, and restores the
    /// visual state of models that are still selected.
    pub fn render(&mut self) {
        let _perf = PerfSpan::new(span_names::RENDER);
        let models = self.collection.models();
        let renderer = &self.renderer;
        let stats = self
            .rows
            .rebuild(models.iter().map(|m| (m.id(), renderer.render(m.value()))));

        if self.focus.is_some_and(|row| self.rows.get(row).is_none()) {
            self.focus = None;
        }
        if self
            .drag_source
            .as_ref()
            .is_some_and(|drag| self.rows.get(drag.row()).is_none())
        {
            self.drag_source = None;
        }
        self.drop_indicator = None;

        tracing::debug!(
            target: targets::SYNC,
            list = %self.id,
            rows = self.rows.len(),
            created = stats.created,
            reused = stats.reused,
            destroyed = stats.destroyed,
            "rendered"
        );
        self.restore_selection();
    }

    /// Re-applies the selected state to rows whose model is still selected,
    /// and drops selected models that no longer have a row.
    pub fn restore_selection(&mut self) {
        let rows = &self.rows;
        let dropped = self.selection.retain(|id| rows.row_for_model(id).is_some());
        if !dropped.is_empty() {
            tracing::debug!(
                target: targets::SELECTION,
                list = %self.id,
                dropped = dropped.len(),
                "pruned selection"
            );
        }

        let states: Vec<_> = self
            .rows
            .iter()
            .map(|row| (row.id(), self.selection.contains(row.model())))
            .collect();
        for (row, selected) in states {
            self.rows.set_selected(row, selected);
        }
    }

    fn on_added(&mut self, model: ModelId) {
        if self.rows.row_for_model(model).is_some() {
            tracing::trace!(target: targets::SYNC, %model, "already rendered");
            return;
        }
        let Some(index) = self.collection.index_of(model) else {
            tracing::trace!(target: targets::SYNC, %model, "added then removed before sync");
            return;
        };
        let Some(value) = self.collection.get(index) else {
            return;
        };

        // Place the row before the row of the next rendered member, so display
        // order follows collection order unless a drop rearranged it.
        let position = self
            .collection
            .models()
            .iter()
            .skip(index + 1)
            .find_map(|next| self.rows.row_for_model(next.id()))
            .and_then(|row| self.rows.index_of(row))
            .unwrap_or(self.rows.len());

        let content = self.renderer.render(value.value());
        let row = self.rows.insert(model, content, position);
        tracing::debug!(target: targets::SYNC, list = %self.id, %model, ?row, position, "row added");
    }

    fn on_removed(&mut self, model: ModelId) {
        if self.selection.remove(model) {
            tracing::debug!(target: targets::SELECTION, list = %self.id, %model, "selected model removed");
        }
        let Some(row) = self.rows.row_for_model(model) else {
            return;
        };
        if self.focus == Some(row) {
            self.focus = None;
        }
        if self.drag_source.as_ref().is_some_and(|drag| drag.row() == row) {
            self.drag_source = None;
        }
        if self.drop_indicator.is_some_and(|indicator| indicator.row == row) {
            self.drop_indicator = None;
        }
        self.rows.destroy(row);
        tracing::debug!(target: targets::SYNC, list = %self.id, %model, "row removed");
    }
}
