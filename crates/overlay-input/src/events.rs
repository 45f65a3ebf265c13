//! Raw host events.
//!
//! Sinks receive these by reference and queue value copies: the host owns
//! the original and may reuse it after the callback returns.

use crate::keys::KeyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Keyboard,
    Mouse,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// First frame of a press.
    Pressed,
    /// Held (auto-repeat).
    Down,
    Released,
    /// Analog value changed; carries no up/down meaning.
    Changed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: KeyId,
    pub device: DeviceType,
    pub state: KeyState,
    /// Text the host associates with the key, e.g. "a" or "F1".
    pub character: Option<String>,
}

impl RawKeyEvent {
    #[inline]
    pub fn keyboard(key: KeyId, state: KeyState) -> Self {
        Self {
            key,
            device: DeviceType::Keyboard,
            state,
            character: None,
        }
    }

    #[inline]
    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device = device;
        self
    }

    #[inline]
    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    DoubleClick(MouseButton),
    Wheel,
    /// Host event code this layer does not interpret.
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPointerEvent {
    pub x: i32,
    pub y: i32,
    pub kind: PointerKind,
    /// Only meaningful for `PointerKind::Wheel`, in host wheel units.
    pub wheel_delta: i32,
}

impl RawPointerEvent {
    #[inline]
    pub fn new(x: i32, y: i32, kind: PointerKind) -> Self {
        Self {
            x,
            y,
            kind,
            wheel_delta: 0,
        }
    }

    #[inline]
    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerKind::Move)
    }

    #[inline]
    pub fn wheel(x: i32, y: i32, delta: i32) -> Self {
        Self {
            wheel_delta: delta,
            ..Self::new(x, y, PointerKind::Wheel)
        }
    }
}
