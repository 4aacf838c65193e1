//! Signal/slot system for rowkit.
//!
//! Signals are typed publish/subscribe channels. A widget or collection owns a
//! [`Signal<Args>`] and emits it when its state changes; observers connect
//! slots (closures) and are invoked synchronously, in connection order, on the
//! emitting thread.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Identifier returned when connecting a slot
//! - [`Subscription`] - Handle that disconnects its slot when dropped
//! - [`SignalEmitter`] - Type-erased view of a signal
//!
//! # Example
//!
//! ```
//! use rowkit_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # Re-entrancy
//!
//! Slots are snapshotted before invocation, so a slot may connect or
//! disconnect slots on the same signal (or emit it again) without deadlocking.
//! Changes made during an emission take effect from the next emission.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(usize, String)` for several.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot and return a [`Subscription`] that disconnects it on drop.
    ///
    /// The subscription only holds a weak reference, so it never keeps the
    /// signal alive and is harmless if the signal is dropped first.
    ///
    /// ```
    /// use rowkit_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Arc::new(Signal::<i32>::new());
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter_clone = counter.clone();
    ///     let _sub = signal.subscribe(move |&n| {
    ///         counter_clone.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);
    /// }
    /// signal.emit(43);
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    pub fn subscribe<F>(self: &Arc<Self>, slot: F) -> Subscription
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        let signal: Weak<dyn SignalEmitter> = Arc::downgrade(self) as Weak<dyn SignalEmitter>;
        Subscription { signal, id }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots with `args`.
    #[tracing::instrument(skip_all, target = "rowkit_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Release the lock before calling out so slots may touch this signal.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// Type-erased signal trait.
///
/// This lets a [`Subscription`] refer to a signal without knowing its
/// argument type.
pub trait SignalEmitter: Send + Sync {
    /// Disconnect a connection by ID.
    fn disconnect(&self, id: ConnectionId) -> bool;

    /// Disconnect all connections.
    fn disconnect_all(&self);

    /// Get the number of connections.
    fn connection_count(&self) -> usize;

    /// Check if blocked.
    fn is_blocked(&self) -> bool;

    /// Set blocked state.
    fn set_blocked(&self, blocked: bool);
}

impl<Args: 'static> SignalEmitter for Signal<Args> {
    fn disconnect(&self, id: ConnectionId) -> bool {
        Signal::disconnect(self, id)
    }

    fn disconnect_all(&self) {
        Signal::disconnect_all(self);
    }

    fn connection_count(&self) -> usize {
        Signal::connection_count(self)
    }

    fn is_blocked(&self) -> bool {
        Signal::is_blocked(self)
    }

    fn set_blocked(&self, blocked: bool) {
        Signal::set_blocked(self, blocked);
    }
}

/// A connection handle that disconnects its slot when dropped.
///
/// Created via [`Signal::subscribe`]. Owners typically keep a
/// `Vec<Subscription>` and clear it on teardown.
pub struct Subscription {
    signal: Weak<dyn SignalEmitter>,
    id: ConnectionId,
}

impl Subscription {
    /// The connection this subscription owns.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Whether the signal this subscription refers to is still alive.
    pub fn is_active(&self) -> bool {
        self.signal.strong_count() > 0
    }

    /// Disconnect now. Equivalent to dropping the subscription.
    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.upgrade() {
            signal.disconnect(self.id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(Subscription: Send, Sync);
