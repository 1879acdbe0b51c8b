//! Document-level services: focused element, body scroll lock and clipboard

use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct DocumentState {
    active_element: Option<String>,
    scroll_locks: usize,
    clipboard: Option<String>,
}

/// Shared handle to document state. Elements are identified by their `id`
/// attribute.
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Arc<Mutex<DocumentState>>,
}

impl Document {
    /// Create a document with nothing focused
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut DocumentState) -> R) -> R {
        match self.state.lock() {
            Ok(mut state) => f(&mut state),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// Id of the focused element
    pub fn active_element(&self) -> Option<String> {
        self.with_state(|state| state.active_element.clone())
    }

    /// Move focus to the element with `id`
    pub fn focus(&self, id: impl Into<String>) {
        let id = id.into();
        self.with_state(|state| state.active_element = Some(id));
    }

    /// Clear focus
    pub fn blur(&self) {
        self.with_state(|state| state.active_element = None);
    }

    /// Prevent background scrolling. Locks nest.
    pub fn lock_scroll(&self) {
        self.with_state(|state| state.scroll_locks += 1);
    }

    /// Release one scroll lock
    pub fn unlock_scroll(&self) {
        self.with_state(|state| state.scroll_locks = state.scroll_locks.saturating_sub(1));
    }

    /// Whether background scrolling is currently prevented
    pub fn is_scroll_locked(&self) -> bool {
        self.with_state(|state| state.scroll_locks > 0)
    }

    /// Write text to the clipboard
    pub fn write_clipboard(&self, text: impl Into<String>) {
        let text = text.into();
        self.with_state(|state| state.clipboard = Some(text));
    }

    /// Read the clipboard
    pub fn clipboard(&self) -> Option<String> {
        self.with_state(|state| state.clipboard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_and_scroll() {
        let document = Document::new();
        assert_eq!(document.active_element(), None);

        document.focus("name");
        assert_eq!(document.active_element().as_deref(), Some("name"));

        document.lock_scroll();
        document.lock_scroll();
        document.unlock_scroll();
        assert!(document.is_scroll_locked());
        document.unlock_scroll();
        document.unlock_scroll();
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_clones_share_state() {
        let document = Document::new();
        let other = document.clone();
        other.write_clipboard("secret");
        assert_eq!(document.clipboard().as_deref(), Some("secret"));
    }
}
