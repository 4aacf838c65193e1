//! Drag and drop support for list widgets.
//!
//! A drag gesture is represented by a [`DragSession`]: the source list creates
//! it in [`ListView::start_drag`](super::ListView::start_drag), the host passes
//! it to whichever list is under the pointer, and the drop consumes it. There
//! is no process-wide "currently dragged item"; everything a drop target needs
//! travels with the session.
//!
//! ```ignore
//! let session = source.start_drag(row).expect("row exists");
//! if target.drag_over(&session, pointer_y).is_accepted() {
//!     target.drop_session(session, pointer_y);
//! }
//! ```
//!
//! The source list reports [`InteractionState::Dragging`] for as long as the
//! session exists. Once it is dropped on a list or discarded by the host, the
//! source is no longer dragging; [`ListView::end_drag`] is only needed to stop
//! earlier.
//!
//! [`InteractionState::Dragging`]: super::InteractionState::Dragging
//! [`ListView::end_drag`]: super::ListView::end_drag
//!
//! The session's [`DragData`] carries the dragged row's element id under
//! [`mime::LIST_ITEM`]; the target re-locates the row from that id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};
use crate::model::Model;

use super::list_view::ListId;
use super::rows::RowId;

/// MIME types used in drag payloads.
pub mod mime {
    /// Plain text MIME type.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// A list row; the payload is the row's element id as UTF-8.
    pub const LIST_ITEM: &str = "application/x-rowkit-item";
}

/// Actions that can be performed during a drop operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropAction(u8);

impl DropAction {
    /// No action (drop not allowed).
    pub const NONE: Self = Self(0);
    /// Copy the data.
    pub const COPY: Self = Self(1 << 0);
    /// Move the data.
    pub const MOVE: Self = Self(1 << 1);

    /// Returns true if this action set contains another action.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if this is anything other than [`DropAction::NONE`].
    pub fn is_accepted(self) -> bool {
        self != Self::NONE
    }
}

impl std::ops::BitOr for DropAction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for DropAction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

/// Data being transferred in a drag and drop operation.
///
/// Holds any number of representations keyed by MIME type.
#[derive(Debug, Clone, Default)]
pub struct DragData {
    data: HashMap<String, Vec<u8>>,
}

impl DragData {
    /// Creates empty drag data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the payload for dragging a list row.
    pub fn for_list_item(element_id: &str, text: &str) -> Self {
        let mut data = Self::new();
        data.set_data(mime::LIST_ITEM, element_id.as_bytes());
        data.set_data(mime::TEXT_PLAIN, text.as_bytes());
        data
    }

    /// Returns true if this drag data is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the available MIME formats.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Checks if data is available for the given MIME type.
    pub fn has_format(&self, mime_type: &str) -> bool {
        self.data.contains_key(mime_type)
    }

    /// Gets raw data for a MIME type.
    pub fn get_data(&self, mime_type: &str) -> Option<&[u8]> {
        self.data.get(mime_type).map(|v| v.as_slice())
    }

    /// Sets raw data for a MIME type.
    pub fn set_data(&mut self, mime_type: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data.insert(mime_type.into(), data.into());
    }

    /// Removes the data for a MIME type.
    pub fn remove_data(&mut self, mime_type: &str) -> Option<Vec<u8>> {
        self.data.remove(mime_type)
    }

    /// Gets the plain text content, if available.
    pub fn text(&self) -> Option<String> {
        self.get_data(mime::TEXT_PLAIN)
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    /// Returns true if the payload identifies itself as a list item.
    pub fn is_list_item(&self) -> bool {
        self.has_format(mime::LIST_ITEM)
    }

    /// Decodes the dragged row's element id.
    pub fn list_item_id(&self) -> Result<&str> {
        let bytes = self
            .get_data(mime::LIST_ITEM)
            .ok_or_else(|| Error::malformed_payload("no list item data"))?;
        let id = std::str::from_utf8(bytes)
            .map_err(|e| Error::malformed_payload(format!("element id is not UTF-8: {e}")))?;
        if id.is_empty() {
            return Err(Error::malformed_payload("empty element id"));
        }
        Ok(id)
    }
}

/// One drag gesture, from drag start to drop.
///
/// Created by the source list. Dropping consumes the session, so a gesture can
/// be completed at most once.
pub struct DragSession<T> {
    source: ListId,
    row: RowId,
    model: Model<T>,
    data: DragData,
    supported_actions: DropAction,
    live: Arc<AtomicBool>,
}

impl<T> DragSession<T> {
    pub(crate) fn new(source: ListId, row: RowId, model: Model<T>, data: DragData) -> Self {
        Self {
            source,
            row,
            model,
            data,
            supported_actions: DropAction::MOVE,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The source list's handle on this session.
    pub(crate) fn handle(&self) -> DragHandle {
        DragHandle {
            row: self.row,
            live: self.live.clone(),
        }
    }

    /// The list the drag started in.
    pub fn source(&self) -> ListId {
        self.source
    }

    /// The dragged row in the source list.
    pub fn source_row(&self) -> RowId {
        self.row
    }

    /// The dragged model.
    pub fn model(&self) -> &Model<T> {
        &self.model
    }

    /// The transferred payload.
    pub fn data(&self) -> &DragData {
        &self.data
    }

    /// Mutable access to the payload, for hosts that attach extra formats.
    pub fn data_mut(&mut self) -> &mut DragData {
        &mut self.data
    }

    /// Actions the source supports.
    pub fn supported_actions(&self) -> DropAction {
        self.supported_actions
    }
}

impl<T> Drop for DragSession<T> {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Release);
    }
}

impl<T> fmt::Debug for DragSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSession")
            .field("source", &self.source)
            .field("row", &self.row)
            .field("model", &self.model.id())
            .field("formats", &self.data.formats().collect::<Vec<_>>())
            .finish()
    }
}

/// What the source list keeps of a session it handed out.
#[derive(Debug, Clone)]
pub(crate) struct DragHandle {
    row: RowId,
    live: Arc<AtomicBool>,
}

impl DragHandle {
    pub(crate) fn row(&self) -> RowId {
        self.row
    }

    /// False once the session has been dropped.
    pub(crate) fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

/// Where a dragged row lands relative to the row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    /// Pointer in the upper half: insert before the target.
    Above,
    /// Pointer in the lower half: insert after the target.
    Below,
}

impl DropPosition {
    /// Picks a side from the pointer's offset within a row of `height`.
    pub fn from_offset(offset_y: f32, height: f32) -> Self {
        if offset_y < height / 2.0 {
            Self::Above
        } else {
            Self::Below
        }
    }
}

/// The drop indicator a host should paint while a drag hovers a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    /// Row under the pointer.
    pub row: RowId,
    /// Side of that row the drop would land on.
    pub position: DropPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_action_flags() {
        let both = DropAction::COPY | DropAction::MOVE;
        assert!(both.contains(DropAction::MOVE));
        assert!(!DropAction::COPY.contains(DropAction::MOVE));
        assert_eq!(both & DropAction::MOVE, DropAction::MOVE);
        assert!(!DropAction::NONE.is_accepted());
    }

    #[test]
    fn test_list_item_payload() {
        let data = DragData::for_list_item("list1-row-4", "Apple");
        assert!(data.is_list_item());
        assert_eq!(data.list_item_id().unwrap(), "list1-row-4");
        assert_eq!(data.text().as_deref(), Some("Apple"));
    }

    #[test]
    fn test_foreign_payload_is_not_list_item() {
        let mut data = DragData::new();
        data.set_data(mime::TEXT_PLAIN, "hello");
        assert!(!data.is_list_item());
        assert!(matches!(data.list_item_id(), Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_malformed_element_id() {
        let mut data = DragData::new();
        data.set_data(mime::LIST_ITEM, vec![0xff, 0xfe]);
        assert!(data.list_item_id().is_err());

        data.set_data(mime::LIST_ITEM, Vec::new());
        assert!(data.list_item_id().is_err());
    }

    #[test]
    fn test_drop_position_halves() {
        assert_eq!(DropPosition::from_offset(0.0, 24.0), DropPosition::Above);
        assert_eq!(DropPosition::from_offset(11.9, 24.0), DropPosition::Above);
        assert_eq!(DropPosition::from_offset(12.0, 24.0), DropPosition::Below);
        assert_eq!(DropPosition::from_offset(23.0, 24.0), DropPosition::Below);
    }
}
