//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to list actions.
///
/// Provides default vim-style bindings alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Selection movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::SelectNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::SelectPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SelectNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SelectPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::SelectFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::SelectFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::SelectLast,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::SelectLast,
        );

        // Reply toggle
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::ToggleReplies,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleReplies,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
