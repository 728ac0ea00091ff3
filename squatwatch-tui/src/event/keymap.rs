//! Shortcut configuration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Check whether a key event matches this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default shortcut set.
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const EXPORT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Table
    pub const WHITELIST: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_matches_without_modifiers() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(DefaultKeymap::QUIT.matches(&key));
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&key));
    }

    #[test]
    fn test_ctrl_binding_requires_the_modifier() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl_c));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&plain_c));
    }

    #[test]
    fn test_different_code_does_not_match() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!DefaultKeymap::REFRESH.matches(&key));
        assert!(!DefaultKeymap::BACK.matches(&key));
    }
}
