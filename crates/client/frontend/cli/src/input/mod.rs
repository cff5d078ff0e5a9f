//! Input processing for the CLI client.
//!
//! This module owns the crossterm-to-sketch key mapping so the rest of the
//! application only deals in [`KeyPress`] values and never inspects raw
//! `crossterm` events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, ModifierKeyCode,
};
use sage_core::{Key, KeyPress, Modifiers};

mod held;
pub use held::{HeldKeys, HoldTimeout};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Discrete key-down to feed the engine.
    Press(KeyPress),
    /// Auto-repeat of a key already down; only refreshes held state.
    Repeat(KeyPress),
    Release(KeyPress),
    /// A modifier key went down or up on its own.
    Modifier { modifier: Modifiers, pressed: bool },
}

/// Translates `KeyEvent`s into sketch input.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler {
    /// Treat the top-row `1` as keypad 1, for terminals that never flag
    /// keypad digits.
    keypad_fallback: bool,
}

impl InputHandler {
    pub fn new(keypad_fallback: bool) -> Self {
        Self { keypad_fallback }
    }

    /// How the stop key is labelled in the instruction panel.
    pub fn stop_label(&self) -> &'static str {
        if self.keypad_fallback { "1" } else { "numpad 1" }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return KeyAction::Quit;
        }

        if let Some(modifier) = modifier_flag(key.code) {
            return KeyAction::Modifier {
                modifier,
                pressed: key.kind != KeyEventKind::Release,
            };
        }

        let mut press = map_key(&key);
        if self.keypad_fallback && press.key == Key::Char('1') {
            press.key = Key::STOP;
        }
        match key.kind {
            KeyEventKind::Press => KeyAction::Press(press),
            KeyEventKind::Repeat => KeyAction::Repeat(press),
            KeyEventKind::Release => KeyAction::Release(press),
        }
    }
}

/// Maps a crossterm event onto a sketch key press.
///
/// Letters fold to lowercase and an uppercase letter implies shift. Keypad
/// digits become [`Key::Numpad`]; other keys use browser key codes, and keys
/// without one map to `Key::Code(0)`.
pub fn map_key(event: &KeyEvent) -> KeyPress {
    let mut modifiers = map_modifiers(event.modifiers);

    let key = match event.code {
        KeyCode::Char(ch)
            if event.state.contains(KeyEventState::KEYPAD) && ch.is_ascii_digit() =>
        {
            Key::Numpad(ch as u8 - b'0')
        }
        KeyCode::Char(ch) => {
            if ch.is_uppercase() {
                modifiers |= Modifiers::SHIFT;
            }
            Key::char(ch)
        }
        code => Key::Code(key_code(code)),
    };

    KeyPress::new(key, modifiers)
}

fn map_modifiers(raw: KeyModifiers) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if raw.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CONTROL;
    }
    if raw.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    modifiers
}

fn modifier_flag(code: KeyCode) -> Option<Modifiers> {
    let KeyCode::Modifier(code) = code else {
        return None;
    };
    match code {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(Modifiers::SHIFT),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => {
            Some(Modifiers::CONTROL)
        }
        _ => None,
    }
}

fn key_code(code: KeyCode) -> u32 {
    match code {
        KeyCode::Backspace => 8,
        KeyCode::Tab | KeyCode::BackTab => 9,
        KeyCode::Enter => 13,
        KeyCode::Pause => 19,
        KeyCode::CapsLock => 20,
        KeyCode::Esc => 27,
        KeyCode::PageUp => 33,
        KeyCode::PageDown => 34,
        KeyCode::End => 35,
        KeyCode::Home => 36,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::PrintScreen => 44,
        KeyCode::Insert => 45,
        KeyCode::Delete => 46,
        KeyCode::Menu => 93,
        KeyCode::F(n) if (1..=24).contains(&n) => 111 + u32::from(n),
        KeyCode::NumLock => 144,
        KeyCode::ScrollLock => 145,
        KeyCode::Modifier(ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt) => 18,
        KeyCode::Modifier(ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper) => 91,
        _ => UNKNOWN_KEY_CODE,
    }
}

const UNKNOWN_KEY_CODE: u32 = 0;
