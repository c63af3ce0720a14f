//! Translation of physical keys into named actions.
//!
//! Widgets never inspect raw keys. A press is first translated through the
//! bindings of a named context (text entry uses `"Global"`), producing a
//! list of action strings the widget walks in order.

use std::collections::HashMap;

use super::events::{Key, KeyEvent};

/// Per-context key-to-action bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    contexts: HashMap<String, HashMap<Key, Vec<String>>>,
}

impl KeyBindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table seeded with the standard `"Global"` context.
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();
        bindings.bind("Global", Key::ArrowLeft, "LEFT");
        bindings.bind("Global", Key::ArrowRight, "RIGHT");
        bindings.bind("Global", Key::ArrowUp, "UP");
        bindings.bind("Global", Key::ArrowDown, "DOWN");
        bindings.bind("Global", Key::Backspace, "BACKSPACE");
        bindings.bind("Global", Key::Delete, "DELETE");
        bindings.bind("Global", Key::Enter, "SELECT");
        bindings.bind("Global", Key::Escape, "ESCAPE");
        bindings
    }

    /// Append an action binding for a key within a context.
    ///
    /// A key may carry several actions; they are tried in bind order.
    pub fn bind(
        &mut self,
        context: impl Into<String>,
        key: Key,
        action: impl Into<String>,
    ) {
        self.contexts
            .entry(context.into())
            .or_default()
            .entry(key)
            .or_default()
            .push(action.into());
    }

    /// Translate a key press into the actions bound to it in `context`.
    ///
    /// Unbound keys translate to an empty list, leaving the widget to fall
    /// back on the event's text.
    pub fn translate_key_press(&self, context: &str, event: &KeyEvent) -> Vec<String> {
        self.contexts
            .get(context)
            .and_then(|keys| keys.get(&event.key))
            .cloned()
            .unwrap_or_default()
    }
}
