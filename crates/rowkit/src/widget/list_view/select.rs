//! Selection operations.

use rowkit_core::logging::targets;

use crate::model::ModelId;
use crate::widget::rows::RowId;

use super::{ClearOptions, ListView};

impl<T: Send + Sync + 'static> ListView<T> {
    /// Makes `row` the only selected row and the focus anchor.
    ///
    /// Any previous selection is cleared silently. Does nothing if selection
    /// is disabled or the row is already selected.
    pub fn select(&mut self, row: RowId) {
        self.sync();
        if !self.options.allow_select {
            tracing::trace!(target: targets::SELECTION, list = %self.id, "selection disabled");
            return;
        }
        let Some(model) = self.rows.model_for_row(row) else {
            return;
        };
        if self.selection.contains(model) {
            return;
        }
        if !self.selection.is_empty() {
            self.clear_selection(ClearOptions::SILENT);
        }
        self.add_to_selection(row, model);
    }

    /// Adds `row` to the selection without clearing it.
    ///
    /// Behaves like [`select`](Self::select) when multiple selection is off.
    pub fn select_another(&mut self, row: RowId) {
        self.sync();
        if !self.options.allow_multiple {
            self.select(row);
            return;
        }
        if !self.options.allow_select {
            return;
        }
        let Some(model) = self.rows.model_for_row(row) else {
            return;
        };
        if self.selection.contains(model) {
            return;
        }
        self.add_to_selection(row, model);
    }

    /// Selects the first row.
    pub fn select_first(&mut self) {
        self.sync();
        if let Some(row) = self.rows.first() {
            self.select(row);
        }
    }

    /// Selects the last row.
    pub fn select_last(&mut self) {
        self.sync();
        if let Some(row) = self.rows.last() {
            self.select(row);
        }
    }

    /// Adds every row to the selection. Requires multiple selection.
    pub fn select_all(&mut self) {
        self.sync();
        if !(self.options.allow_select && self.options.allow_multiple) {
            return;
        }
        let rows = self.rows.ids().to_vec();
        for row in rows {
            self.select_another(row);
        }
    }

    /// Removes `row` from the selection and emits `deselected`.
    pub fn deselect(&mut self, row: RowId) {
        self.sync();
        let Some(model) = self.rows.model_for_row(row) else {
            return;
        };
        if !self.selection.remove(model) {
            return;
        }
        self.rows.set_selected(row, false);
        tracing::debug!(target: targets::SELECTION, list = %self.id, %model, "deselected");
        if let Some(model) = self.collection.find(model) {
            self.deselected.emit(model);
        }
    }

    /// Empties the selection.
    ///
    /// Emits `cleared` with the previously selected models unless `options`
    /// is silent. A non-silent clear of an empty selection still emits.
    pub fn clear_selection(&mut self, options: ClearOptions) {
        self.sync();
        let previous = self.selection.clear();
        for &model in &previous {
            if let Some(row) = self.rows.row_for_model(model) {
                self.rows.set_selected(row, false);
            }
        }
        tracing::debug!(
            target: targets::SELECTION,
            list = %self.id,
            count = previous.len(),
            silent = options.silent,
            "selection cleared"
        );
        if !options.silent {
            let models = self.models_for(previous);
            self.cleared.emit(models);
        }
    }

    /// Emits `opened` with the current selection.
    pub fn open(&mut self) {
        self.sync();
        let models = self.selection();
        tracing::debug!(target: targets::SELECTION, list = %self.id, count = models.len(), "open");
        self.opened.emit(models);
    }

    /// Removes the selected models from the collection and emits `removed`.
    ///
    /// Does nothing when removal is disabled or nothing is selected.
    pub fn remove(&mut self) {
        self.sync();
        if !self.options.allow_remove {
            tracing::trace!(target: targets::SELECTION, list = %self.id, "removal disabled");
            return;
        }
        if self.selection.is_empty() {
            return;
        }
        let models = self.selection();
        self.clear_selection(ClearOptions::SILENT);
        for model in &models {
            self.collection.remove(model.id());
        }
        self.sync();
        tracing::debug!(target: targets::SELECTION, list = %self.id, count = models.len(), "removed");
        self.removed.emit(models);
    }

    fn add_to_selection(&mut self, row: RowId, model: ModelId) {
        self.selection.insert(model);
        self.rows.set_selected(row, true);
        self.focus = Some(row);
        tracing::debug!(target: targets::SELECTION, list = %self.id, %model, "selected");
        if let Some(model) = self.collection.find(model) {
            self.selected.emit(model);
        }
    }
}
