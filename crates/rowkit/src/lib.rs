//! rowkit - a headless list widget with selection, keyboard navigation,
//! and drag-to-reorder.
//!
//! A [`ListView`] observes a shared [`Collection`] of models and keeps one
//! row per model. It tracks which models are selected, moves a focus anchor
//! with the arrow keys, supports Control/Meta and Shift multi-selection, and
//! reorders rows by drag and drop. Rendering is up to the host: the view only
//! reports row content and state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rowkit::{Collection, ListOptions, ListView};
//!
//! let todo = Arc::new(Collection::new(vec!["write", "review", "ship"]));
//! let mut list = ListView::new(todo.clone())
//!     .with_options(ListOptions::new().with_remove(true))?;
//!
//! list.removed.connect(|models| println!("removed {} item(s)", models.len()));
//!
//! list.select_first();
//! list.remove();
//! assert_eq!(todo.len(), 2);
//! # Ok::<(), rowkit::Error>(())
//! ```
//!
//! # Logging
//!
//! rowkit logs through `tracing` under the targets in
//! [`rowkit_core::logging::targets`]; install a subscriber to see them.

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use rowkit_core::{ConnectionId, PerfSpan, Signal, SignalEmitter, Subscription};

pub use config::ListOptions;
pub use error::{Error, Result};
pub use model::{Collection, DisplayRenderer, FnRenderer, ItemRenderer, Model, ModelId};
pub use widget::{ClearOptions, DragSession, InteractionState, ListView, RowId};
