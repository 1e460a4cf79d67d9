//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Plain printable characters are only
/// consulted when the keyword box does not have focus; the event loop sends
/// them to the text input otherwise.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shifted(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::SHIFT)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Vim-style movement
        bindings.insert(key(KeyCode::Char('k')), KeyAction::MoveUp);
        bindings.insert(key(KeyCode::Char('j')), KeyAction::MoveDown);
        bindings.insert(key(KeyCode::Char('h')), KeyAction::MoveLeft);
        bindings.insert(key(KeyCode::Char('l')), KeyAction::MoveRight);

        // Arrow keys
        bindings.insert(key(KeyCode::Up), KeyAction::MoveUp);
        bindings.insert(key(KeyCode::Down), KeyAction::MoveDown);
        bindings.insert(key(KeyCode::Left), KeyAction::MoveLeft);
        bindings.insert(key(KeyCode::Right), KeyAction::MoveRight);

        bindings.insert(key(KeyCode::Enter), KeyAction::Select);
        bindings.insert(key(KeyCode::Char(' ')), KeyAction::Select);

        // Focus switching
        bindings.insert(key(KeyCode::Tab), KeyAction::CycleFocus);
        bindings.insert(key(KeyCode::Char('1')), KeyAction::FocusIndexers);
        bindings.insert(key(KeyCode::Char('2')), KeyAction::FocusCategories);
        bindings.insert(key(KeyCode::Char('3')), KeyAction::FocusKeyword);
        bindings.insert(key(KeyCode::Char('/')), KeyAction::FocusKeyword);
        bindings.insert(key(KeyCode::Char('4')), KeyAction::FocusResults);

        // Search
        bindings.insert(shifted('S'), KeyAction::Submit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            KeyAction::Submit,
        );

        // Pagination
        bindings.insert(key(KeyCode::Char('n')), KeyAction::NextPage);
        bindings.insert(key(KeyCode::Char(']')), KeyAction::NextPage);
        bindings.insert(key(KeyCode::PageDown), KeyAction::NextPage);
        bindings.insert(key(KeyCode::Char('p')), KeyAction::PrevPage);
        bindings.insert(key(KeyCode::Char('[')), KeyAction::PrevPage);
        bindings.insert(key(KeyCode::PageUp), KeyAction::PrevPage);
        bindings.insert(key(KeyCode::Char('g')), KeyAction::FirstPage);
        bindings.insert(key(KeyCode::Home), KeyAction::FirstPage);
        bindings.insert(shifted('G'), KeyAction::LastPage);
        bindings.insert(key(KeyCode::End), KeyAction::LastPage);

        // History
        bindings.insert(key(KeyCode::Char('b')), KeyAction::HistoryBack);
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::ALT),
            KeyAction::HistoryBack,
        );
        bindings.insert(key(KeyCode::Char('f')), KeyAction::HistoryForward);
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::ALT),
            KeyAction::HistoryForward,
        );

        bindings.insert(key(KeyCode::Char('d')), KeyAction::Download);

        // Application controls
        bindings.insert(key(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(key(KeyCode::Char('?')), KeyAction::Help);
        bindings.insert(key(KeyCode::Char('r')), KeyAction::Refresh);
        bindings.insert(key(KeyCode::F(5)), KeyAction::Refresh);

        Self { bindings }
    }
}
