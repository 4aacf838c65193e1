//! Observable ordered collection.
//!
//! [`Collection`] is the data side of a list widget: an ordered set of
//! [`Model`] handles that announces every membership change through signals.
//! Views never own the collection; they hold an `Arc` and subscribe.
//!
//! # Example
//!
//! ```
//! use rowkit::model::Collection;
//!
//! let fruits = Collection::new(vec!["Apple", "Banana"]);
//!
//! let _sub = fruits.signals().added.subscribe(|(index, model)| {
//!     println!("{} added at {}", **model, index);
//! });
//!
//! let cherry = fruits.push("Cherry");
//! assert_eq!(fruits.index_of(cherry.id()), Some(2));
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rowkit_core::logging::targets;
use rowkit_core::Signal;

use crate::error::{Error, Result};

/// Process-unique identity of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl ModelId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// The raw numeric id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// A shared handle to one model value.
///
/// Cloning is cheap and keeps the identity: two handles are equal exactly when
/// they came from the same [`Model::new`] call.
pub struct Model<T> {
    id: ModelId,
    value: Arc<T>,
}

impl<T> Model<T> {
    /// Wraps a value, assigning it a fresh identity.
    pub fn new(value: T) -> Self {
        Self {
            id: ModelId::next(),
            value: Arc::new(value),
        }
    }

    /// The model's identity.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Deref for Model<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> PartialEq for Model<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Model<T> {}

impl<T: fmt::Debug> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> From<T> for Model<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Change notifications emitted by a [`Collection`].
///
/// Signals are reference counted so observers can hold
/// [`Subscription`](rowkit_core::Subscription)s to them.
pub struct CollectionSignals<T> {
    /// A model was inserted. Args: (index, model)
    pub added: Arc<Signal<(usize, Model<T>)>>,
    /// A model was removed. Args: (former index, model)
    pub removed: Arc<Signal<(usize, Model<T>)>>,
    /// The whole contents were replaced.
    pub reset: Arc<Signal<()>>,
}

impl<T: Send + Sync + 'static> CollectionSignals<T> {
    fn new() -> Self {
        Self {
            added: Arc::new(Signal::new()),
            removed: Arc::new(Signal::new()),
            reset: Arc::new(Signal::new()),
        }
    }
}

/// An ordered set of models with change notification.
///
/// Membership is by [`ModelId`]: adding a model that is already present does
/// nothing. Signals are emitted after the internal lock is released, so
/// observers may query the collection from their slots.
pub struct Collection<T> {
    items: RwLock<Vec<Model<T>>>,
    signals: CollectionSignals<T>,
}

impl<T: Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::from_models(Vec::new())
    }
}

impl<T: Send + Sync + 'static> Collection<T> {
    /// Creates a collection from plain values.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_models(values.into_iter().map(Model::new).collect())
    }

    /// Creates a collection from existing model handles.
    ///
    /// Duplicate handles are dropped, keeping the first occurrence.
    pub fn from_models(models: Vec<Model<T>>) -> Self {
        Self {
            items: RwLock::new(dedup(models)),
            signals: CollectionSignals::new(),
        }
    }

    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the change notifications.
    pub fn signals(&self) -> &CollectionSignals<T> {
        &self.signals
    }

    /// Returns the number of models.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the model at `index`.
    pub fn get(&self, index: usize) -> Option<Model<T>> {
        self.items.read().get(index).cloned()
    }

    /// Returns a snapshot of all models in order.
    pub fn models(&self) -> Vec<Model<T>> {
        self.items.read().clone()
    }

    /// Returns the position of the model with `id`.
    pub fn index_of(&self, id: ModelId) -> Option<usize> {
        self.items.read().iter().position(|m| m.id == id)
    }

    /// Returns `true` if the model with `id` is a member.
    pub fn contains(&self, id: ModelId) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the model with `id`.
    pub fn find(&self, id: ModelId) -> Option<Model<T>> {
        self.items.read().iter().find(|m| m.id == id).cloned()
    }

    /// Wraps `value` in a new model and appends it.
    pub fn push(&self, value: T) -> Model<T> {
        let model = Model::new(value);
        self.add(model.clone());
        model
    }

    /// Appends an existing model. Does nothing if it is already a member.
    pub fn add(&self, model: Model<T>) {
        let index = {
            let mut items = self.items.write();
            if items.iter().any(|m| m.id == model.id) {
                tracing::trace!(target: targets::COLLECTION, model = %model.id, "already a member");
                return;
            }
            items.push(model.clone());
            items.len() - 1
        };
        tracing::debug!(target: targets::COLLECTION, model = %model.id, index, "model added");
        self.signals.added.emit((index, model));
    }

    /// Inserts a model at `index`.
    ///
    /// Inserting a model that is already a member does nothing.
    pub fn insert(&self, index: usize, model: Model<T>) -> Result<()> {
        {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(Error::IndexOutOfBounds {
                    index,
                    len: items.len(),
                });
            }
            if items.iter().any(|m| m.id == model.id) {
                return Ok(());
            }
            items.insert(index, model.clone());
        }
        tracing::debug!(target: targets::COLLECTION, model = %model.id, index, "model inserted");
        self.signals.added.emit((index, model));
        Ok(())
    }

    /// Removes the model with `id`, returning it if it was a member.
    pub fn remove(&self, id: ModelId) -> Option<Model<T>> {
        let (index, model) = {
            let mut items = self.items.write();
            let index = items.iter().position(|m| m.id == id)?;
            (index, items.remove(index))
        };
        tracing::debug!(target: targets::COLLECTION, model = %id, index, "model removed");
        self.signals.removed.emit((index, model.clone()));
        Some(model)
    }

    /// Replaces the whole contents.
    pub fn reset(&self, models: Vec<Model<T>>) {
        let len = {
            let mut items = self.items.write();
            *items = dedup(models);
            items.len()
        };
        tracing::debug!(target: targets::COLLECTION, len, "collection reset");
        self.signals.reset.emit(());
    }

    /// Removes every model. Emits `reset`.
    pub fn clear(&self) {
        self.reset(Vec::new());
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &*self.items.read())
            .finish()
    }
}

fn dedup<T>(models: Vec<Model<T>>) -> Vec<Model<T>> {
    let mut seen = std::collections::HashSet::with_capacity(models.len());
    models.into_iter().filter(|m| seen.insert(m.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_models_have_distinct_ids() {
        let a = Model::new("a");
        let b = Model::new("a");
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
        assert_eq!(*a, "a");
    }

    #[test]
    fn test_push_and_signals() {
        let collection = Collection::<&str>::empty();
        let added = Arc::new(Mutex::new(Vec::new()));

        let recv = added.clone();
        collection.signals().added.connect(move |(index, model)| {
            recv.lock().push((*index, **model));
        });

        collection.push("A");
        collection.push("B");

        assert_eq!(collection.len(), 2);
        assert_eq!(*added.lock(), vec![(0, "A"), (1, "B")]);
    }

    #[test]
    fn test_add_existing_member_is_noop() {
        let collection = Collection::new(vec!["A"]);
        let count = Arc::new(Mutex::new(0));
        let recv = count.clone();
        collection.signals().added.connect(move |_| *recv.lock() += 1);

        let a = collection.get(0).unwrap();
        collection.add(a);

        assert_eq!(collection.len(), 1);
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let collection = Collection::new(vec!["A"]);
        let err = collection.insert(3, Model::new("X")).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 3, len: 1 }));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_insert_in_middle() {
        let collection = Collection::new(vec!["A", "C"]);
        let b = Model::new("B");
        collection.insert(1, b.clone()).unwrap();
        assert_eq!(collection.index_of(b.id()), Some(1));
        let values: Vec<&str> = collection.models().iter().map(|m| **m).collect();
        assert_eq!(values, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_and_signals() {
        let collection = Collection::new(vec!["A", "B", "C"]);
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        collection.signals().removed.connect(move |(index, model)| {
            recv.lock().push((*index, **model));
        });

        let b = collection.get(1).unwrap();
        assert_eq!(collection.remove(b.id()), Some(b.clone()));
        assert_eq!(collection.remove(b.id()), None);

        assert_eq!(collection.len(), 2);
        assert!(!collection.contains(b.id()));
        assert_eq!(*removed.lock(), vec![(1, "B")]);
    }

    #[test]
    fn test_reset_keeps_identity() {
        let collection = Collection::new(vec!["A", "B", "C"]);
        let resets = Arc::new(Mutex::new(0));
        let recv = resets.clone();
        collection.signals().reset.connect(move |_| *recv.lock() += 1);

        let b = collection.get(1).unwrap();
        let c = collection.get(2).unwrap();
        collection.reset(vec![b.clone(), c, b.clone()]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.index_of(b.id()), Some(0));
        assert_eq!(*resets.lock(), 1);

        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(*resets.lock(), 2);
    }

    #[test]
    fn test_slot_can_read_collection() {
        let collection = Arc::new(Collection::new(vec!["A"]));
        let seen = Arc::new(Mutex::new(0));

        let weak = Arc::downgrade(&collection);
        let recv = seen.clone();
        collection.signals().added.connect(move |_| {
            if let Some(c) = weak.upgrade() {
                *recv.lock() = c.len();
            }
        });

        collection.push("B");
        assert_eq!(*seen.lock(), 2);
    }
}
