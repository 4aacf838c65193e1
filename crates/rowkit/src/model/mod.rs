//! Data side of the list widget.
//!
//! - [`Collection`]: ordered, observable set of [`Model`] handles
//! - [`SelectionSet`]: which models are selected, in selection order
//! - [`ItemRenderer`]: how a model value becomes row content
//!
//! ```text
//! ┌─────────────┐  added/removed/reset  ┌─────────────┐
//! │ Collection  │──────────────────────>│  ListView   │
//! └─────────────┘                       │  RowTable   │
//!       ▲              remove()         │ SelectionSet│
//!       └───────────────────────────────└─────────────┘
//! ```

pub mod collection;
pub mod renderer;
pub mod selection;

pub use collection::{Collection, CollectionSignals, Model, ModelId};
pub use renderer::{DisplayRenderer, FnRenderer, ItemRenderer};
pub use selection::SelectionSet;
