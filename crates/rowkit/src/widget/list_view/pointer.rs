//! Mouse selection and drag-to-reorder.

use rowkit_core::logging::targets;

use crate::widget::drag_drop::{DragData, DragSession, DropAction, DropIndicator, DropPosition};
use crate::widget::events::{MouseButton, MousePressEvent};
use crate::widget::rows::RowId;

use super::{ClearOptions, ListView};

impl<T: Send + Sync + 'static> ListView<T> {
    /// Routes a mouse press.
    ///
    /// - plain click: the row becomes the only selection
    /// - Control/Meta click: toggles the row (removing needs `allow_deselect`)
    /// - Shift click: selects the range from the focus anchor to the row
    /// - click below the last row: clears the selection if `allow_deselect`
    pub fn handle_mouse_press(&mut self, event: &mut MousePressEvent) -> bool {
        self.sync();
        if event.button != MouseButton::Left {
            return false;
        }
        let modifiers = event.modifiers;
        let Some(row) = self.row_at_y(event.local_pos.y) else {
            tracing::trace!(target: targets::INPUT, list = %self.id, y = event.local_pos.y, "press on empty area");
            if self.options.allow_deselect {
                self.clear_selection(ClearOptions::default());
                event.base.accept();
                return true;
            }
            return false;
        };

        tracing::trace!(target: targets::INPUT, list = %self.id, ?row, ?modifiers, "press on row");
        if modifiers.multi_select() {
            if self.is_selected(row) {
                if self.options.allow_deselect {
                    self.deselect(row);
                }
            } else {
                self.select_another(row);
            }
            self.set_focus(row);
        } else if modifiers.range_select() {
            self.expand_selection_to_element(row);
        } else {
            if self.is_selected(row) && self.selection.len() > 1 {
                self.clear_selection(ClearOptions::SILENT);
            }
            self.select(row);
            self.set_focus(row);
        }
        event.base.accept();
        true
    }

    /// Starts dragging `row`. Returns `None` when reordering is disabled or
    /// the row does not exist.
    pub fn start_drag(&mut self, row: RowId) -> Option<DragSession<T>> {
        self.sync();
        if !self.options.allow_reorder {
            tracing::trace!(target: targets::DRAG, list = %self.id, "reorder disabled");
            return None;
        }
        let model = self.model_for_row(row)?;
        let data = {
            let r = self.rows.get(row)?;
            DragData::for_list_item(r.element_id(), r.content())
        };
        tracing::debug!(target: targets::DRAG, list = %self.id, ?row, model = %model.id(), "drag started");
        let session = DragSession::new(self.id, row, model, data);
        self.drag_source = Some(session.handle());
        Some(session)
    }

    /// Whether this list would take `session` if it were dropped here.
    pub fn accepts_drag(&self, session: &DragSession<T>) -> bool {
        self.options.allow_reorder
            && session.supported_actions().contains(DropAction::MOVE)
            && session.data().is_list_item()
            && self.collection.contains(session.model().id())
    }

    /// Updates the drop indicator for a drag hovering at `y`.
    pub fn drag_over(&mut self, session: &DragSession<T>, y: f32) -> DropAction {
        self.sync();
        if !self.accepts_drag(session) {
            self.drop_indicator = None;
            return DropAction::NONE;
        }
        self.drop_indicator = self
            .drop_target(y)
            .map(|(row, position)| DropIndicator { row, position });
        DropAction::MOVE
    }

    /// The drag left the list.
    pub fn drag_leave(&mut self) {
        self.drop_indicator = None;
    }

    /// Completes a drag over this list at `y`.
    ///
    /// The dragged row is found by the element id in the payload (or, for a
    /// session from another list over the same collection, by its model) and
    /// moved above or below the row under the pointer. Emits `reordered` and
    /// returns `true` if the display order changed. Consuming the session ends
    /// the drag in the source list too.
    pub fn drop_session(&mut self, session: DragSession<T>, y: f32) -> bool {
        self.sync();
        self.drop_indicator = None;
        tracing::trace!(
            target: targets::DRAG,
            list = %self.id,
            source = %session.source(),
            source_row = ?session.source_row(),
            y,
            "drop"
        );
        let moved = self.reorder(&session, y);
        if session.source() == self.id {
            self.drag_source = None;
        }
        moved
    }

    /// Ends a drag started here while its session is still held.
    pub fn end_drag(&mut self) {
        if self.drag_source.take().is_some_and(|drag| drag.is_live()) {
            tracing::debug!(target: targets::DRAG, list = %self.id, "drag ended");
        }
        self.drop_indicator = None;
    }

    fn drop_target(&self, y: f32) -> Option<(RowId, DropPosition)> {
        let row = self.row_at_y(y)?;
        let index = self.rows.index_of(row)?;
        let height = self.options.row_height;
        let top = index as f32 * height;
        Some((row, DropPosition::from_offset(y - top, height)))
    }

    fn reorder(&mut self, session: &DragSession<T>, y: f32) -> bool {
        if !self.accepts_drag(session) {
            tracing::debug!(target: targets::DRAG, list = %self.id, "drop rejected");
            return false;
        }
        let element = match session.data().list_item_id() {
            Ok(element) => element,
            Err(err) => {
                tracing::debug!(target: targets::DRAG, list = %self.id, %err, "drop ignored");
                return false;
            }
        };
        let dragged = match self.rows.find_by_element(element) {
            Some(row) => row,
            None if session.source() != self.id => {
                match self.rows.row_for_model(session.model().id()) {
                    Some(row) => row,
                    None => return false,
                }
            }
            None => {
                tracing::debug!(target: targets::DRAG, list = %self.id, element, "dragged row is gone");
                return false;
            }
        };
        let Some((target, position)) = self.drop_target(y) else {
            return false;
        };
        if dragged == target {
            return false;
        }
        let (Some(from), Some(target_index)) = (self.rows.index_of(dragged), self.rows.index_of(target))
        else {
            return false;
        };

        let mut to = match position {
            DropPosition::Above => target_index,
            DropPosition::Below => target_index + 1,
        };
        if from < to {
            to -= 1;
        }
        if from == to {
            return false;
        }
        self.rows.move_row(dragged, to);
        tracing::debug!(target: targets::DRAG, list = %self.id, from, to, ?position, "row moved");

        let order = self.display_models();
        self.reordered.emit(order);
        true
    }
}
