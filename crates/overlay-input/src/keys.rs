use std::fmt;
use std::str::FromStr;

use overlay_core::OverlayError;

macro_rules! key_ids {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Host key identifiers.
        ///
        /// Mouse buttons show up here as well because the host reports them
        /// through the key stream with `DeviceType::Mouse`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum KeyId {
            $($variant),*
        }

        impl KeyId {
            pub const ALL: &'static [KeyId] = &[$(KeyId::$variant),*];

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(KeyId::$variant => $name),*
                }
            }
        }
    };
}

key_ids! {
    Escape => "Escape",
    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
    Tilde => "Tilde",
    D1 => "1", D2 => "2", D3 => "3", D4 => "4", D5 => "5",
    D6 => "6", D7 => "7", D8 => "8", D9 => "9", D0 => "0",
    Minus => "Minus", Equals => "Equals", Backspace => "Backspace",
    Tab => "Tab",
    Q => "Q", W => "W", E => "E", R => "R", T => "T", Y => "Y", U => "U", I => "I", O => "O", P => "P",
    LBracket => "LBracket", RBracket => "RBracket", Backslash => "Backslash",
    CapsLock => "CapsLock",
    A => "A", S => "S", D => "D", F => "F", G => "G", H => "H", J => "J", K => "K", L => "L",
    Semicolon => "Semicolon", Apostrophe => "Apostrophe", Enter => "Enter",
    LShift => "LShift",
    Z => "Z", X => "X", C => "C", V => "V", B => "B", N => "N", M => "M",
    Comma => "Comma", Period => "Period", Slash => "Slash",
    RShift => "RShift",
    LCtrl => "LCtrl", LWin => "LWin", LAlt => "LAlt",
    Space => "Space",
    RAlt => "RAlt", RWin => "RWin", RCtrl => "RCtrl",
    Insert => "Insert", Delete => "Delete", Home => "Home", End => "End",
    PgUp => "PgUp", PgDn => "PgDn",
    Left => "Left", Right => "Right", Up => "Up", Down => "Down",
    Mouse1 => "Mouse1", Mouse2 => "Mouse2", Mouse3 => "Mouse3",
    MouseWheelUp => "MouseWheelUp", MouseWheelDown => "MouseWheelDown",
    SysCommit => "SysCommit",
}

/// Modifier groups; left and right variants share one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
}

impl KeyId {
    #[inline]
    pub const fn modifier(self) -> Option<Modifier> {
        match self {
            KeyId::LAlt | KeyId::RAlt => Some(Modifier::Alt),
            KeyId::LCtrl | KeyId::RCtrl => Some(Modifier::Ctrl),
            KeyId::LShift | KeyId::RShift => Some(Modifier::Shift),
            _ => None,
        }
    }

    /// Case-insensitive lookup by host key name.
    pub fn from_name(name: &str) -> Option<KeyId> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for KeyId {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyId::from_name(s).ok_or_else(|| OverlayError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
