//! The list widget and its input model.
//!
//! - [`ListView`]: rows, selection, keyboard navigation, drag-to-reorder
//! - [`events`]: key and mouse events hosts feed into the view
//! - [`drag_drop`]: drag sessions, payloads, drop indicators
//! - [`rows`]: the rendered row table
//!
//! # Driving a list
//!
//! A host owns the view, translates its native input into [`KeyPressEvent`]
//! and [`MousePressEvent`], and repaints from [`ListView::rows`] afterwards.
//! Accepted events should not receive the host's default action.
//!
//! ```
//! use std::sync::Arc;
//! use rowkit::{Collection, ListOptions, ListView};
//! use rowkit::widget::{KeyboardModifiers, MousePressEvent};
//!
//! let collection = Arc::new(Collection::new(vec!["one", "two", "three"]));
//! let mut list = ListView::new(collection).with_options(ListOptions::new().with_multiple(true))?;
//! let height = list.options().row_height;
//!
//! let mut press = MousePressEvent::left_at(height * 1.5, KeyboardModifiers::NONE);
//! list.handle_mouse_press(&mut press);
//!
//! let painted: Vec<_> = list.rows().map(|row| (row.content().to_string(), row.is_selected())).collect();
//! assert_eq!(painted[1], ("two".to_string(), true));
//! # Ok::<(), rowkit::Error>(())
//! ```

pub mod drag_drop;
pub mod events;
pub mod list_view;
pub mod rows;

pub use drag_drop::{mime, DragData, DragSession, DropAction, DropIndicator, DropPosition};
pub use events::{
    EventBase, Key, KeyPressEvent, KeyboardModifiers, MouseButton, MousePressEvent, Point,
};
pub use list_view::{ClearOptions, InteractionState, ListId, ListView};
pub use rows::{RebuildStats, Row, RowId, RowTable};
