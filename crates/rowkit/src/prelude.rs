//! Commonly used types.
//!
//! ```
//! use rowkit::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::{Signal, Subscription};

// ============================================================================
// Models
// ============================================================================

pub use crate::model::{Collection, ItemRenderer, Model, ModelId};

// ============================================================================
// Widget
// ============================================================================

pub use crate::config::ListOptions;
pub use crate::widget::{
    ClearOptions, DragSession, DropAction, InteractionState, Key, KeyPressEvent,
    KeyboardModifiers, ListView, MouseButton, MousePressEvent, RowId,
};
