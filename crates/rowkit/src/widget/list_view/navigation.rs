//! Focus movement, range selection, and key handling.

use rowkit_core::logging::targets;

use crate::widget::events::{Key, KeyPressEvent};
use crate::widget::rows::RowId;

use super::{ClearOptions, ListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_sub(1),
            Self::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}

impl<T: Send + Sync + 'static> ListView<T> {
    /// Selects every row between the focus anchor and `target`, inclusive,
    /// keeping the existing selection. Focus moves to `target`.
    ///
    /// Without an anchor the range is `target` alone. With multiple selection
    /// off this is a plain [`select`](Self::select).
    pub fn expand_selection_to_element(&mut self, target: RowId) {
        self.sync();
        if !self.options.allow_multiple {
            self.select(target);
            return;
        }
        let Some(target_index) = self.rows.index_of(target) else {
            return;
        };
        let anchor_index = self.anchor_index().unwrap_or(target_index);
        let (start, end) = if anchor_index <= target_index {
            (anchor_index, target_index)
        } else {
            (target_index, anchor_index)
        };
        tracing::debug!(target: targets::SELECTION, list = %self.id, start, end, "expand to range");

        let range = self.rows.ids()[start..=end].to_vec();
        for row in range {
            self.select_another(row);
        }
        self.set_focus(target);
    }

    /// Moves the single selection one row up.
    pub fn move_selection_up(&mut self) {
        self.move_selection(Direction::Up);
    }

    /// Moves the single selection one row down.
    pub fn move_selection_down(&mut self) {
        self.move_selection(Direction::Down);
    }

    /// Adds the row above the focus anchor to the selection and focuses it.
    pub fn expand_selection_up(&mut self) {
        self.expand_selection(Direction::Up);
    }

    /// Adds the row below the focus anchor to the selection and focuses it.
    pub fn expand_selection_down(&mut self) {
        self.expand_selection(Direction::Down);
    }

    /// Routes a key press. Returns `true` and accepts the event if the list
    /// handled the key.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        self.sync();
        let modifiers = event.modifiers;
        let handled = match event.key {
            Key::ArrowUp | Key::ArrowDown => {
                let direction = if event.key == Key::ArrowUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                if self.selection.is_empty() {
                    self.select_first();
                } else if modifiers.range_select() || modifiers.multi_select() {
                    self.expand_selection(direction);
                } else {
                    self.move_selection(direction);
                }
                true
            }
            Key::Home => {
                self.select_first();
                true
            }
            Key::End => {
                self.select_last();
                true
            }
            Key::A if modifiers.multi_select() => {
                self.select_all();
                true
            }
            Key::Enter | Key::NumpadEnter => {
                self.open();
                true
            }
            Key::Delete | Key::Backspace => {
                self.remove();
                true
            }
            // Swallowed so the host does not scroll.
            Key::Space => true,
            _ => false,
        };

        tracing::trace!(
            target: targets::INPUT,
            list = %self.id,
            key = ?event.key,
            ?modifiers,
            repeat = event.is_repeat,
            handled,
            "key press"
        );
        if handled {
            event.base.accept();
        }
        handled
    }

    /// Display index of the focus anchor, falling back to the most recently
    /// selected row.
    fn anchor_index(&self) -> Option<usize> {
        self.focus
            .or_else(|| {
                self.selection
                    .last()
                    .and_then(|model| self.rows.row_for_model(model))
            })
            .and_then(|row| self.rows.index_of(row))
    }

    fn neighbor(&self, direction: Direction) -> Option<RowId> {
        let current = self.anchor_index()?;
        let next = direction.step(current, self.rows.len())?;
        self.rows.at(next)
    }

    fn move_selection(&mut self, direction: Direction) {
        self.sync();
        let Some(row) = self.neighbor(direction) else {
            tracing::trace!(target: targets::SELECTION, list = %self.id, ?direction, "at boundary");
            return;
        };
        self.clear_selection(ClearOptions::SILENT);
        self.select(row);
        self.set_focus(row);
    }

    fn expand_selection(&mut self, direction: Direction) {
        self.sync();
        let Some(row) = self.neighbor(direction) else {
            tracing::trace!(target: targets::SELECTION, list = %self.id, ?direction, "at boundary");
            return;
        };
        self.select_another(row);
        self.set_focus(row);
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn test_direction_step_stops_at_edges() {
        assert_eq!(Direction::Up.step(0, 3), None);
        assert_eq!(Direction::Up.step(2, 3), Some(1));
        assert_eq!(Direction::Down.step(1, 3), Some(2));
        assert_eq!(Direction::Down.step(2, 3), None);
        assert_eq!(Direction::Down.step(0, 0), None);
    }
}
