//! Core systems for rowkit.
//!
//! This crate provides the pieces every rowkit widget builds on:
//!
//! - **Signal/Slot System**: typed publish/subscribe with RAII subscriptions
//! - **Logging**: `tracing` targets and timing spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use rowkit_core::Signal;
//! use std::sync::Arc;
//!
//! let value_changed = Arc::new(Signal::<i32>::new());
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Scoped connection: disconnected when `sub` is dropped.
//! let sub = value_changed.subscribe(|value| {
//!     println!("Also saw: {}", value);
//! });
//!
//! value_changed.emit(42);
//!
//! value_changed.disconnect(conn_id);
//! drop(sub);
//! assert_eq!(value_changed.connection_count(), 0);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal, SignalEmitter, Subscription};
