//! ListView widget: a selectable, keyboard-navigable, reorderable list.
//!
//! [`ListView`] presents the models of a [`Collection`] as rows and owns all
//! interaction state: which models are selected, which row is the keyboard
//! focus anchor, and the in-flight drag. It is headless: hosts feed it input
//! events and paint what [`ListView::rows`] reports.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rowkit::{Collection, ListOptions, ListView};
//! use rowkit::widget::{Key, KeyPressEvent, KeyboardModifiers};
//!
//! let fruits = Arc::new(Collection::new(vec!["Apple", "Banana", "Cherry"]));
//! let mut list = ListView::new(fruits.clone())
//!     .with_options(ListOptions::new().with_multiple(true))?;
//!
//! list.opened.connect(|models| {
//!     for model in models {
//!         println!("open {}", **model);
//!     }
//! });
//!
//! let mut down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
//! assert!(list.handle_key_press(&mut down)); // nothing selected: selects Apple
//! assert_eq!(list.selection().len(), 1);
//!
//! fruits.push("Damson");
//! list.sync();
//! assert_eq!(list.row_count(), 4);
//! # Ok::<(), rowkit::Error>(())
//! ```
//!
//! # Signals
//!
//! - `selected(Model)`: a model joined the selection
//! - `deselected(Model)`: a model left the selection
//! - `cleared(Vec<Model>)`: the selection was cleared (not emitted when silent)
//! - `opened(Vec<Model>)`: Enter was pressed, with the current selection
//! - `removed(Vec<Model>)`: selected models were removed from the collection
//! - `reordered(Vec<Model>)`: a drop changed the display order

mod navigation;
mod pointer;
mod select;
mod sync;

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rowkit_core::{Signal, Subscription};

use crate::config::ListOptions;
use crate::error::Result;
use crate::model::{Collection, DisplayRenderer, ItemRenderer, Model, ModelId, SelectionSet};

use super::drag_drop::{DragHandle, DropIndicator};
use super::rows::{Row, RowId, RowTable};

/// Unique identifier for a ListView instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

impl ListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list{}", self.0)
    }
}

/// Coarse interaction state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing selected, no drag.
    Idle,
    /// Exactly one model selected.
    SingleSelected,
    /// More than one model selected.
    MultiSelected,
    /// A drag session started from this list is still alive.
    Dragging,
}

/// Options for [`ListView::clear_selection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearOptions {
    /// Skip the `cleared` notification.
    pub silent: bool,
}

impl ClearOptions {
    /// Clear without notifying.
    pub const SILENT: Self = Self { silent: true };
}

/// A queued collection notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionChange {
    Added(ModelId),
    Removed(ModelId),
    Reset,
}

type Inbox = Arc<Mutex<VecDeque<CollectionChange>>>;

/// A list widget over a shared [`Collection`].
///
/// The view observes the collection through subscriptions; notifications are
/// queued and applied by [`sync`](Self::sync), which every mutating operation
/// runs first. Read accessors report the state as of the last sync.
pub struct ListView<T: Send + Sync + 'static> {
    id: ListId,
    collection: Arc<Collection<T>>,
    options: ListOptions,
    renderer: Arc<dyn ItemRenderer<T>>,

    rows: RowTable,
    selection: SelectionSet,
    focus: Option<RowId>,

    drag_source: Option<DragHandle>,
    drop_indicator: Option<DropIndicator>,

    pending: Inbox,
    subscriptions: Vec<Subscription>,

    /// Emitted when a model joins the selection.
    pub selected: Signal<Model<T>>,
    /// Emitted when a model leaves the selection through `deselect`.
    pub deselected: Signal<Model<T>>,
    /// Emitted by a non-silent clear, with the models that were selected.
    pub cleared: Signal<Vec<Model<T>>>,
    /// Emitted on Enter, with the current selection.
    pub opened: Signal<Vec<Model<T>>>,
    /// Emitted after selected models were removed from the collection.
    pub removed: Signal<Vec<Model<T>>>,
    /// Emitted after a drop reordered rows, with the models in display order.
    pub reordered: Signal<Vec<Model<T>>>,
}

impl<T: Send + Sync + fmt::Display + 'static> ListView<T> {
    /// Creates a list rendering each model with its `Display` implementation.
    pub fn new(collection: Arc<Collection<T>>) -> Self {
        Self::with_renderer(collection, Arc::new(DisplayRenderer))
    }
}

impl<T: Send + Sync + 'static> ListView<T> {
    /// Creates a list with a custom row renderer.
    pub fn with_renderer(collection: Arc<Collection<T>>, renderer: Arc<dyn ItemRenderer<T>>) -> Self {
        let id = ListId::new();
        let pending: Inbox = Arc::new(Mutex::new(VecDeque::new()));
        let subscriptions = Self::subscribe_to(&collection, &pending);

        let mut list = Self {
            id,
            collection,
            options: ListOptions::default(),
            renderer,
            rows: RowTable::new(id.to_string()),
            selection: SelectionSet::new(),
            focus: None,
            drag_source: None,
            drop_indicator: None,
            pending,
            subscriptions,
            selected: Signal::new(),
            deselected: Signal::new(),
            cleared: Signal::new(),
            opened: Signal::new(),
            removed: Signal::new(),
            reordered: Signal::new(),
        };
        list.render();
        list
    }

    /// Sets the options (builder style).
    ///
    /// Fails with [`Error::InvalidRowHeight`](crate::Error::InvalidRowHeight)
    /// when the options do not validate.
    pub fn with_options(mut self, options: ListOptions) -> Result<Self> {
        self.set_options(options)?;
        Ok(self)
    }

    fn subscribe_to(collection: &Collection<T>, pending: &Inbox) -> Vec<Subscription> {
        let signals = collection.signals();

        let inbox = pending.clone();
        let added = signals.added.subscribe(move |(_, model)| {
            inbox.lock().push_back(CollectionChange::Added(model.id()));
        });

        let inbox = pending.clone();
        let removed = signals.removed.subscribe(move |(_, model)| {
            inbox.lock().push_back(CollectionChange::Removed(model.id()));
        });

        let inbox = pending.clone();
        let reset = signals.reset.subscribe(move |_| {
            inbox.lock().push_back(CollectionChange::Reset);
        });

        vec![added, removed, reset]
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// This list's id. Row element ids are prefixed with it.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// The observed collection.
    pub fn collection(&self) -> &Arc<Collection<T>> {
        &self.collection
    }

    /// Current options.
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Turning selection off clears the selection silently; turning multiple
    /// selection off keeps only the most recently selected model. Options
    /// that fail [`ListOptions::validate`] are rejected and the current ones
    /// stay in effect.
    pub fn set_options(&mut self, options: ListOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        if !self.options.allow_select {
            self.clear_selection(ClearOptions::SILENT);
        } else if !self.options.allow_multiple && self.selection.len() > 1 {
            let keep = self.selection.last();
            let dropped = self.selection.retain(|id| Some(id) == keep);
            for id in dropped {
                if let Some(row) = self.rows.row_for_model(id) {
                    self.rows.set_selected(row, false);
                }
            }
        }
        if !self.options.allow_reorder {
            self.drop_indicator = None;
        }
        Ok(())
    }

    /// Replaces the row renderer and re-renders every row.
    pub fn set_renderer(&mut self, renderer: Arc<dyn ItemRenderer<T>>) {
        self.renderer = renderer;
        self.render();
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up a row.
    pub fn row(&self, row: RowId) -> Option<&Row> {
        self.rows.get(row)
    }

    /// The row at display index `index`.
    pub fn row_at(&self, index: usize) -> Option<RowId> {
        self.rows.at(index)
    }

    /// Display index of `row`.
    pub fn index_of(&self, row: RowId) -> Option<usize> {
        self.rows.index_of(row)
    }

    /// The row under vertical offset `y`, using the uniform row height.
    pub fn row_at_y(&self, y: f32) -> Option<RowId> {
        if !y.is_finite() || y < 0.0 {
            return None;
        }
        let index = (y / self.options.row_height).floor() as usize;
        self.rows.at(index)
    }

    /// The row displaying `model`.
    pub fn row_for_model(&self, model: ModelId) -> Option<RowId> {
        self.rows.row_for_model(model)
    }

    /// The model displayed by `row`.
    pub fn model_for_row(&self, row: RowId) -> Option<Model<T>> {
        self.rows
            .model_for_row(row)
            .and_then(|id| self.collection.find(id))
    }

    /// Models in display order.
    pub fn display_models(&self) -> Vec<Model<T>> {
        self.rows
            .iter()
            .filter_map(|row| self.collection.find(row.model()))
            .collect()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Selected models, in selection order.
    pub fn selection(&self) -> Vec<Model<T>> {
        self.selection
            .iter()
            .filter_map(|id| self.collection.find(id))
            .collect()
    }

    /// Ids of the selected models, in selection order.
    ///
    /// Like [`selection`](Self::selection), models that already left the
    /// collection are skipped even before the next sync.
    pub fn selected_ids(&self) -> Vec<ModelId> {
        self.selection
            .iter()
            .filter(|&id| self.collection.contains(id))
            .collect()
    }

    /// Whether `row`'s model is selected.
    pub fn is_selected(&self, row: RowId) -> bool {
        self.rows
            .model_for_row(row)
            .is_some_and(|id| self.selection.contains(id))
    }

    /// The keyboard focus anchor.
    pub fn focused_row(&self) -> Option<RowId> {
        self.focus
    }

    /// Where a hovering drag would land, for painting a drop indicator.
    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        self.drop_indicator
    }

    /// Coarse interaction state.
    pub fn state(&self) -> InteractionState {
        if self.drag_source.as_ref().is_some_and(DragHandle::is_live) {
            return InteractionState::Dragging;
        }
        match self.selection.len() {
            0 => InteractionState::Idle,
            1 => InteractionState::SingleSelected,
            _ => InteractionState::MultiSelected,
        }
    }

    /// Stops observing the collection.
    ///
    /// Rows and selection are kept as they are; later collection changes are
    /// no longer reflected.
    pub fn teardown(&mut self) {
        self.subscriptions.clear();
        self.pending.lock().clear();
        self.drag_source = None;
        self.drop_indicator = None;
    }

    /// Moves the focus anchor. The anchor only follows selection, so this is
    /// a no-op while selection is disabled.
    fn set_focus(&mut self, row: RowId) {
        if self.options.allow_select {
            self.focus = Some(row);
        }
    }

    fn models_for(&self, ids: impl IntoIterator<Item = ModelId>) -> Vec<Model<T>> {
        ids.into_iter()
            .filter_map(|id| self.collection.find(id))
            .collect()
    }
}

impl<T: Send + Sync + 'static> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("rows", &self.rows.len())
            .field("selection", &self.selection)
            .field("focus", &self.focus)
            .field("state", &self.state())
            .finish()
    }
}

static_assertions::assert_impl_all!(ListView<String>: Send, Sync);
