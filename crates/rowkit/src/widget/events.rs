//! Input event types understood by list widgets.
//!
//! Hosts translate their native keyboard and pointer events into these types
//! and hand them to the widget. A widget *accepts* an event it handled;
//! accepted events should not receive the host's default action (scrolling on
//! Space, browser navigation on Backspace, and so on).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Control or Meta: toggles a row in or out of the selection.
    pub fn multi_select(&self) -> bool {
        self.control || self.meta
    }

    /// Shift: extends the selection as a range.
    pub fn range_select(&self) -> bool {
        self.shift
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keys a list widget reacts to.
///
/// Anything else arrives as [`Key::Other`] and is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    /// Enter on the numeric keypad; handled like [`Key::Enter`].
    NumpadEnter,
    Space,
    Backspace,
    Delete,
    /// The letter A (select all with Control/Meta).
    A,
    /// Any key the list does not interpret.
    Other,
}

/// A position in widget-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset from the list's left edge.
    pub x: f32,
    /// Vertical offset from the top of the first row.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event; the host should suppress its default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing the default action.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// Marks the event as an auto-repeat.
    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}

/// Mouse press event.
#[derive(Debug, Clone)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in list content coordinates (scroll offset already applied).
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }

    /// A left-button press at vertical offset `y`.
    pub fn left_at(y: f32, modifiers: KeyboardModifiers) -> Self {
        Self::new(MouseButton::Left, Point::new(0.0, y), modifiers)
    }
}
