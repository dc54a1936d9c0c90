//! Keyboard event model
//!
//! Frontends translate their native key events into `KeyPress`. With the
//! `crossterm` feature a conversion from `crossterm::event::KeyEvent` is
//! provided.

/// Logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Escape,
    Enter,
    Other,
}

/// A key event that handlers may claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    default_prevented: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    #[must_use]
    pub const fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }

    /// Mark the event as consumed so the frontend skips its own handling
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Digit carried by the event, if any
    #[must_use]
    pub fn digit(&self) -> Option<char> {
        match self.key {
            Key::Char(ch) if ch.is_ascii_digit() => Some(ch),
            _ => None,
        }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

#[cfg(feature = "crossterm")]
mod crossterm_support {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Key, KeyPress};

    impl From<&KeyEvent> for KeyPress {
        fn from(event: &KeyEvent) -> Self {
            // Ctrl/Alt chords belong to the frontend's global keymap
            let chord = event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            let key = match event.code {
                KeyCode::Char(ch) if !chord => Key::Char(ch),
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Esc => Key::Escape,
                KeyCode::Enter => Key::Enter,
                _ => Key::Other,
            };
            KeyPress::new(key)
        }
    }

}
