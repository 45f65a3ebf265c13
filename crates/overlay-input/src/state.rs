use ahash::AHashMap;

use crate::keys::{KeyId, Modifier};

pub const BUTTON_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    #[inline]
    pub fn set(&mut self, m: Modifier, down: bool) {
        match m {
            Modifier::Alt => self.alt = down,
            Modifier::Ctrl => self.ctrl = down,
            Modifier::Shift => self.shift = down,
        }
    }
}

/// UI-facing view of the input devices.
///
/// Owned by the frame driver. Written only while a frame translates its queued
/// events, read by the UI pass of that same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputState {
    pub keys_down: AHashMap<KeyId, bool>,
    pub modifiers: Modifiers,
    /// Viewport pixels.
    pub cursor: [f32; 2],
    pub buttons_down: [bool; BUTTON_COUNT],
    /// A `ButtonDown` arrived in this translate pass. Catches a press and
    /// release that land in the same frame, which `buttons_down` cannot show.
    pub buttons_pressed: [bool; BUTTON_COUNT],
    /// One-frame pulse, cleared at the start of every translate pass.
    pub buttons_double_clicked: [bool; BUTTON_COUNT],
    /// Wheel notches since the last UI pass.
    pub wheel: f32,
    pub pending_chars: Vec<char>,
    pub frame_dt: f32,
    pub viewport: [u32; 2],
}

impl Default for NormalizedInputState {
    fn default() -> Self {
        Self {
            keys_down: AHashMap::new(),
            modifiers: Modifiers::default(),
            cursor: [0.0, 0.0],
            buttons_down: [false; BUTTON_COUNT],
            buttons_pressed: [false; BUTTON_COUNT],
            buttons_double_clicked: [false; BUTTON_COUNT],
            wheel: 0.0,
            pending_chars: Vec::new(),
            frame_dt: 0.0,
            viewport: [0, 0],
        }
    }
}

impl NormalizedInputState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn key_down(&self, key: KeyId) -> bool {
        self.keys_down.get(&key).copied().unwrap_or(false)
    }

    pub fn keys_held(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.keys_down
            .iter()
            .filter_map(|(k, down)| down.then_some(*k))
    }

    /// Start of a translate pass.
    #[inline]
    pub fn begin_translate(&mut self) {
        self.buttons_pressed = [false; BUTTON_COUNT];
        self.buttons_double_clicked = [false; BUTTON_COUNT];
    }

    /// The UI pass consumed wheel and text for this frame.
    #[inline]
    pub fn end_ui_pass(&mut self) {
        self.wheel = 0.0;
        self.pending_chars.clear();
    }
}
