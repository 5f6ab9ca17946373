//! Input event types delivered to menus.
//!
//! The host's input source turns hardware state into these discrete events and
//! hands them to the [`Manager`](crate::Manager). Every event carries an
//! [`EventBase`] so a handler can mark it accepted and stop further
//! propagation.

use crate::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Keys the menu subsystem reacts to.
///
/// Everything else arrives as [`Key::Other`] and is left unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Enter,
    Space,
    Escape,
    /// Any other key, identified by the host's key code.
    Other(u16),
}

impl Key {
    /// Check if this is an arrow key.
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

/// Semantic gamepad actions, already mapped from physical buttons by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamepadAction {
    /// No mapped action.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    /// Move to the next control (usually the right shoulder).
    NextControl,
    /// Move to the previous control (usually the left shoulder).
    PrevControl,
    /// Confirm / press the focused control.
    Press,
}

/// Common data for all input events.
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

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Pointer event (move, press, release or leave).
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in absolute screen coordinates.
    pub position: Point,
    /// The button involved, if any.
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    /// Create a pointer event without a button (moves and leaves).
    pub fn moved(position: Point) -> Self {
        Self {
            base: EventBase::new(),
            position,
            button: None,
        }
    }

    /// Create a pointer event for a button press or release.
    pub fn button(position: Point, button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            position,
            button: Some(button),
        }
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }

    /// Create a key press event with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Whether this is Tab without Shift.
    pub fn is_forward_tab(&self) -> bool {
        self.key == Key::Tab && !self.modifiers.shift
    }

    /// Whether this is Shift+Tab.
    pub fn is_back_tab(&self) -> bool {
        self.key == Key::Tab && self.modifiers.shift
    }
}

/// Gamepad button press event.
#[derive(Debug, Clone, Copy)]
pub struct GamepadEvent {
    /// Base event data.
    pub base: EventBase,
    /// The semantic action of the pressed button.
    pub action: GamepadAction,
}

impl GamepadEvent {
    /// Create a new gamepad event.
    pub fn new(action: GamepadAction) -> Self {
        Self {
            base: EventBase::new(),
            action,
        }
    }
}

/// How an entry activation was triggered.
///
/// Keyboard and gamepad handlers synthesize a [`Activation::Phantom`]
/// activation that carries no button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A real pointer click with the given button.
    Pointer(MouseButton),
    /// Synthesized by keyboard, gamepad or the dwell timer.
    Phantom,
}

impl Activation {
    /// Only left clicks and phantom activations act on entries.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Activation::Pointer(MouseButton::Left) | Activation::Phantom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept() {
        let mut event = KeyPressEvent::plain(Key::Escape);
        assert!(!event.base.is_accepted());
        event.base.accept();
        assert!(event.base.is_accepted());
        event.base.ignore();
        assert!(!event.base.is_accepted());
    }

    #[test]
    fn test_tab_direction() {
        assert!(KeyPressEvent::plain(Key::Tab).is_forward_tab());
        let back = KeyPressEvent::new(Key::Tab, KeyboardModifiers::SHIFT);
        assert!(back.is_back_tab());
        assert!(!back.is_forward_tab());
    }

    #[test]
    fn test_activation_buttons() {
        assert!(Activation::Phantom.is_actionable());
        assert!(Activation::Pointer(MouseButton::Left).is_actionable());
        assert!(!Activation::Pointer(MouseButton::Right).is_actionable());
    }
}
