use overlay_input::KeyId;
use winit::keyboard::KeyCode;

/// Physical winit key to host key id. Keys the overlay has no id for map to `None`.
pub fn key_id(code: KeyCode) -> Option<KeyId> {
    use KeyCode as C;

    let id = match code {
        C::Escape => KeyId::Escape,
        C::F1 => KeyId::F1,
        C::F2 => KeyId::F2,
        C::F3 => KeyId::F3,
        C::F4 => KeyId::F4,
        C::F5 => KeyId::F5,
        C::F6 => KeyId::F6,
        C::F7 => KeyId::F7,
        C::F8 => KeyId::F8,
        C::F9 => KeyId::F9,
        C::F10 => KeyId::F10,
        C::F11 => KeyId::F11,
        C::F12 => KeyId::F12,
        C::Backquote => KeyId::Tilde,

        C::Digit1 => KeyId::D1,
        C::Digit2 => KeyId::D2,
        C::Digit3 => KeyId::D3,
        C::Digit4 => KeyId::D4,
        C::Digit5 => KeyId::D5,
        C::Digit6 => KeyId::D6,
        C::Digit7 => KeyId::D7,
        C::Digit8 => KeyId::D8,
        C::Digit9 => KeyId::D9,
        C::Digit0 => KeyId::D0,
        C::Minus => KeyId::Minus,
        C::Equal => KeyId::Equals,
        C::Backspace => KeyId::Backspace,
        C::Tab => KeyId::Tab,

        C::KeyQ => KeyId::Q,
        C::KeyW => KeyId::W,
        C::KeyE => KeyId::E,
        C::KeyR => KeyId::R,
        C::KeyT => KeyId::T,
        C::KeyY => KeyId::Y,
        C::KeyU => KeyId::U,
        C::KeyI => KeyId::I,
        C::KeyO => KeyId::O,
        C::KeyP => KeyId::P,
        C::BracketLeft => KeyId::LBracket,
        C::BracketRight => KeyId::RBracket,
        C::Backslash => KeyId::Backslash,
        C::CapsLock => KeyId::CapsLock,

        C::KeyA => KeyId::A,
        C::KeyS => KeyId::S,
        C::KeyD => KeyId::D,
        C::KeyF => KeyId::F,
        C::KeyG => KeyId::G,
        C::KeyH => KeyId::H,
        C::KeyJ => KeyId::J,
        C::KeyK => KeyId::K,
        C::KeyL => KeyId::L,
        C::Semicolon => KeyId::Semicolon,
        C::Quote => KeyId::Apostrophe,
        C::Enter | C::NumpadEnter => KeyId::Enter,

        C::KeyZ => KeyId::Z,
        C::KeyX => KeyId::X,
        C::KeyC => KeyId::C,
        C::KeyV => KeyId::V,
        C::KeyB => KeyId::B,
        C::KeyN => KeyId::N,
        C::KeyM => KeyId::M,
        C::Comma => KeyId::Comma,
        C::Period => KeyId::Period,
        C::Slash => KeyId::Slash,

        C::ShiftLeft => KeyId::LShift,
        C::ShiftRight => KeyId::RShift,
        C::ControlLeft => KeyId::LCtrl,
        C::ControlRight => KeyId::RCtrl,
        C::AltLeft => KeyId::LAlt,
        C::AltRight => KeyId::RAlt,
        C::SuperLeft => KeyId::LWin,
        C::SuperRight => KeyId::RWin,
        C::Space => KeyId::Space,

        C::Insert => KeyId::Insert,
        C::Delete => KeyId::Delete,
        C::Home => KeyId::Home,
        C::End => KeyId::End,
        C::PageUp => KeyId::PgUp,
        C::PageDown => KeyId::PgDn,
        C::ArrowLeft => KeyId::Left,
        C::ArrowRight => KeyId::Right,
        C::ArrowUp => KeyId::Up,
        C::ArrowDown => KeyId::Down,

        _ => return None,
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hotkey_and_modifiers_are_mapped() {
        assert_eq!(key_id(KeyCode::F9), Some(KeyId::F9));
        assert_eq!(key_id(KeyCode::ControlRight), Some(KeyId::RCtrl));
        assert_eq!(key_id(KeyCode::NumpadEnter), Some(KeyId::Enter));
        assert_eq!(key_id(KeyCode::Backquote), Some(KeyId::Tilde));
    }

    #[test]
    fn unknown_codes_are_dropped() {
        assert_eq!(key_id(KeyCode::MediaPlayPause), None);
        assert_eq!(key_id(KeyCode::F24), None);
    }

    #[test]
    fn mapping_never_produces_mouse_or_sentinel_ids() {
        let codes = [KeyCode::KeyA, KeyCode::Space, KeyCode::ArrowUp, KeyCode::Digit0];
        for c in codes {
            let id = key_id(c).unwrap();
            assert!(!matches!(id, KeyId::Mouse1 | KeyId::Mouse2 | KeyId::Mouse3 | KeyId::SysCommit));
        }
    }
}
