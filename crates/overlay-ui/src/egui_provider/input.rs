use overlay_core::Frame;
use overlay_input::{KeyId, MouseButton, NormalizedInputState, BUTTON_COUNT};

/// Host key id -> egui key, for the keys UI navigation and text editing need.
#[derive(Debug, Clone)]
pub struct KeyMap {
    entries: Vec<(KeyId, egui::Key)>,
}

impl KeyMap {
    pub fn standard() -> Self {
        use egui::Key;

        Self {
            entries: vec![
                (KeyId::Tab, Key::Tab),
                (KeyId::Left, Key::ArrowLeft),
                (KeyId::Right, Key::ArrowRight),
                (KeyId::Up, Key::ArrowUp),
                (KeyId::Down, Key::ArrowDown),
                (KeyId::PgUp, Key::PageUp),
                (KeyId::PgDn, Key::PageDown),
                (KeyId::Home, Key::Home),
                (KeyId::End, Key::End),
                (KeyId::Insert, Key::Insert),
                (KeyId::Delete, Key::Delete),
                (KeyId::Backspace, Key::Backspace),
                (KeyId::Space, Key::Space),
                (KeyId::Enter, Key::Enter),
                (KeyId::Escape, Key::Escape),
                // Ctrl shortcuts in text fields.
                (KeyId::A, Key::A),
                (KeyId::C, Key::C),
                (KeyId::V, Key::V),
                (KeyId::X, Key::X),
                (KeyId::Y, Key::Y),
                (KeyId::Z, Key::Z),
            ],
        }
    }

    #[inline]
    pub fn get(&self, key: KeyId) -> Option<egui::Key> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, e)| *e)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns the level-based `NormalizedInputState` into egui's edge-based events.
///
/// Keeps the previous frame's key/button/cursor levels to find edges.
pub struct EguiInputBridge {
    key_map: KeyMap,
    prev_keys: Vec<bool>,
    prev_buttons: [bool; BUTTON_COUNT],
    prev_cursor: Option<[f32; 2]>,
}

impl EguiInputBridge {
    pub fn new(key_map: KeyMap) -> Self {
        let prev_keys = vec![false; key_map.len()];
        Self {
            key_map,
            prev_keys,
            prev_buttons: [false; BUTTON_COUNT],
            prev_cursor: None,
        }
    }

    #[inline]
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn build_raw_input(&mut self, st: &NormalizedInputState, frame: &Frame) -> egui::RawInput {
        let modifiers = egui::Modifiers {
            alt: st.modifiers.alt,
            ctrl: st.modifiers.ctrl,
            shift: st.modifiers.shift,
            mac_cmd: false,
            command: st.modifiers.ctrl,
        };

        let mut events = Vec::new();

        let pos = egui::pos2(st.cursor[0], st.cursor[1]);
        if self.prev_cursor != Some(st.cursor) {
            events.push(egui::Event::PointerMoved(pos));
            self.prev_cursor = Some(st.cursor);
        }

        for (i, (id, key)) in self.key_map.entries.iter().enumerate() {
            let down = st.key_down(*id);
            if down == self.prev_keys[i] {
                continue;
            }
            self.prev_keys[i] = down;

            events.push(egui::Event::Key {
                key: *key,
                physical_key: None,
                pressed: down,
                repeat: false,
                modifiers,
            });

            if down && modifiers.command {
                match key {
                    egui::Key::C => events.push(egui::Event::Copy),
                    egui::Key::X => events.push(egui::Event::Cut),
                    _ => {}
                }
            }
        }

        for b in MouseButton::ALL {
            let i = b.index();
            let button = pointer_button(b);
            let down = st.buttons_down[i];

            if st.buttons_double_clicked[i] {
                // Second click of the pair; egui derives the double click from timing.
                events.push(egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    modifiers,
                });
                events.push(egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: false,
                    modifiers,
                });
            }

            let prev = self.prev_buttons[i];
            self.prev_buttons[i] = down;
            // A press inside an unchanged level means a whole click (or release
            // and re-press) fell between two frames: replay both edges.
            let (edges, n) = match (prev == down, st.buttons_pressed[i]) {
                (false, _) => ([down, false], 1),
                (true, true) => ([!down, down], 2),
                (true, false) => ([false, false], 0),
            };
            for &pressed in &edges[..n] {
                events.push(egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                });
            }
        }

        if st.wheel != 0.0 {
            events.push(egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Line,
                delta: egui::vec2(0.0, st.wheel),
                modifiers,
            });
        }

        // Shortcut chords are not text; control characters travel as key events.
        if !(modifiers.ctrl && !modifiers.alt) {
            let text: String = st
                .pending_chars
                .iter()
                .copied()
                .filter(|c| !c.is_control())
                .collect();
            if !text.is_empty() {
                events.push(egui::Event::Text(text));
            }
        }

        egui::RawInput {
            screen_rect: Some(screen_rect(st.viewport)),
            time: Some(frame.time),
            predicted_dt: frame.dt,
            modifiers,
            events,
            focused: true,
            ..Default::default()
        }
    }
}

#[inline]
pub(crate) fn screen_rect(viewport: [u32; 2]) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(viewport[0] as f32, viewport[1] as f32),
    )
}

#[inline]
fn pointer_button(b: MouseButton) -> egui::PointerButton {
    match b {
        MouseButton::Left => egui::PointerButton::Primary,
        MouseButton::Right => egui::PointerButton::Secondary,
        MouseButton::Middle => egui::PointerButton::Middle,
    }
}
