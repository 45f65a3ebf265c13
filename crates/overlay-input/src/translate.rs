//! Raw host event -> `NormalizedInputState` mutation.
//!
//! Nothing here fails: events outside the handled set are dropped silently.

use crate::events::{DeviceType, KeyState, PointerKind, RawKeyEvent, RawPointerEvent};
use crate::keys::KeyId;
use crate::state::NormalizedInputState;

/// Host wheel units per notch when the host does not say otherwise.
pub const DEFAULT_WHEEL_UNIT: i32 = 120;

pub fn translate_key(st: &mut NormalizedInputState, ev: &RawKeyEvent) {
    let is_down = match ev.state {
        KeyState::Pressed | KeyState::Down => true,
        KeyState::Released => false,
        KeyState::Changed => return,
    };

    st.keys_down.insert(ev.key, is_down);
    if let Some(m) = ev.key.modifier() {
        st.modifiers.set(m, is_down);
    }

    if ev.device == DeviceType::Mouse || ev.state != KeyState::Pressed {
        return;
    }

    if let Some(c) = produced_char(ev) {
        st.pending_chars.push(c);
    }
}

/// Allow-list text production: space, tab, or a single-character payload.
/// Named keys ("F1", "Left") and empty payloads produce nothing.
pub fn produced_char(ev: &RawKeyEvent) -> Option<char> {
    match ev.key {
        KeyId::Space => Some(' '),
        KeyId::Tab => Some('\t'),
        _ => {
            let mut chars = ev.character.as_deref()?.chars();
            let c = chars.next()?;
            chars.next().is_none().then_some(c)
        }
    }
}

pub fn translate_pointer(st: &mut NormalizedInputState, ev: &RawPointerEvent, wheel_unit: i32) {
    match ev.kind {
        PointerKind::Move => st.cursor = [ev.x as f32, ev.y as f32],
        PointerKind::ButtonDown(b) => {
            st.buttons_down[b.index()] = true;
            st.buttons_pressed[b.index()] = true;
        }
        PointerKind::ButtonUp(b) => st.buttons_down[b.index()] = false,
        PointerKind::DoubleClick(b) => st.buttons_double_clicked[b.index()] = true,
        // Integer division on purpose: partial notches are dropped, as the host does.
        PointerKind::Wheel => st.wheel += (ev.wheel_delta / wheel_unit.max(1)) as f32,
        PointerKind::Other(_) => {}
    }
}
