use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while a key event is delivered or a tick runs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CONTROL = 1 << 0;
        const SHIFT   = 1 << 1;
    }
}

impl Modifiers {
    #[inline]
    pub fn control(self) -> bool {
        self.contains(Self::CONTROL)
    }

    #[inline]
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }
}

/// Physical key identifier delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// Printable key, always stored lowercase.
    Char(char),
    /// Keypad digit.
    Numpad(u8),
    /// Any other key, identified by its raw key code.
    Code(u32),
}

impl Key {
    /// Reserved key that freezes the sketch.
    pub const STOP: Self = Self::Numpad(1);

    /// Builds a printable key, folding case so `'E'` and `'e'` are one key.
    pub fn char(ch: char) -> Self {
        Self::Char(ch.to_ascii_lowercase())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{ch}"),
            Self::Numpad(digit) => write!(f, "numpad {digit}"),
            Self::Code(code) => write!(f, "keyCode {code}"),
        }
    }
}

/// A discrete key-down event together with the modifiers held at that moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_keys_fold_case() {
        assert_eq!(Key::char('E'), Key::Char('e'));
        assert_eq!(Key::char('e'), Key::Char('e'));
        assert_eq!(Key::char('1'), Key::Char('1'));
    }

    #[test]
    fn displays_raw_key() {
        assert_eq!(Key::Char('z').to_string(), "z");
        assert_eq!(Key::STOP.to_string(), "numpad 1");
        assert_eq!(Key::Code(13).to_string(), "keyCode 13");
    }
}
