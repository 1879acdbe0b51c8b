//! Input events delivered to components
//!
//! Components do not listen to a platform event loop. The host translates
//! native events into these types and calls the component's handler
//! (`handle_key`, `toggle`, `change`, ...) directly.

use std::fmt;

/// A key identified the way `KeyboardEvent.key` reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Any other key, by its `key` value
    Other(String),
}

impl Key {
    /// Parse a DOM `key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Tab" => Key::Tab,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::Enter => f.write_str("Enter"),
            Key::Space => f.write_str(" "),
            Key::Tab => f.write_str("Tab"),
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Other(key) => f.write_str(key),
        }
    }
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyboardEvent {
    /// A key press without modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    /// Same key with Shift held
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Whether any modifier other than Shift is held
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

impl From<Key> for KeyboardEvent {
    fn from(key: Key) -> Self {
        KeyboardEvent::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("a"), Key::Other("a".to_string()));
        assert_eq!(Key::from_dom("Tab").to_string(), "Tab");
    }

    #[test]
    fn test_shift_modifier() {
        let event = KeyboardEvent::new(Key::Tab).with_shift();
        assert!(event.shift);
        assert!(!event.has_command_modifier());
    }
}
