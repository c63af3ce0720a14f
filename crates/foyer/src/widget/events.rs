//! Input events delivered to widgets.

/// A physical key, independent of any binding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Tab,
    Space,
    Escape,
    /// A printable character key.
    Character(char),
    /// A key the platform layer could not map.
    Unknown,
}

/// A key press, carrying the key and any text it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Text produced by the press, empty for non-printing keys.
    pub text: String,
}

impl KeyEvent {
    /// Create an event for a non-printing key.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            text: String::new(),
        }
    }

    /// Create an event for a printable character.
    pub fn character(c: char) -> Self {
        Self {
            key: Key::Character(c),
            text: c.to_string(),
        }
    }

    /// Builder-style helper overriding the produced text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_event_carries_text() {
        let event = KeyEvent::character('q');
        assert_eq!(event.key, Key::Character('q'));
        assert_eq!(event.text, "q");
    }

    #[test]
    fn test_non_printing_event_has_empty_text() {
        assert!(KeyEvent::new(Key::Backspace).text.is_empty());
    }
}
