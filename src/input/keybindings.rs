//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::models::Category;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_feed_bindings();
        config.setup_selection_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.bind(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.bind(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.bind(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
    }

    fn setup_feed_bindings(&mut self) {
        for (n, category) in (1u32..).zip(Category::ALL) {
            if let Some(digit) = char::from_digit(n, 10) {
                self.bind(
                    KeyCombo::plain(KeyCode::Char(digit)),
                    Command::SelectCategory(category),
                );
            }
        }

        self.bind(KeyCombo::plain(KeyCode::Tab), Command::NextCategory);
        self.bind(KeyCombo::shift(KeyCode::BackTab), Command::PrevCategory);
        // Some terminals report BackTab without the Shift modifier
        self.bind(KeyCombo::plain(KeyCode::BackTab), Command::PrevCategory);
        self.bind(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
        self.bind(KeyCombo::plain(KeyCode::Char('m')), Command::LoadMore);
    }

    fn setup_selection_bindings(&mut self) {
        self.bind(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        self.bind(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.bind(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        self.bind(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.bind(KeyCombo::plain(KeyCode::Home), Command::MoveToTop);
        self.bind(KeyCombo::plain(KeyCode::Char('g')), Command::MoveToTop);
        self.bind(KeyCombo::plain(KeyCode::End), Command::MoveToBottom);
        self.bind(KeyCombo::shift(KeyCode::Char('G')), Command::MoveToBottom);
        self.bind(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        self.bind(KeyCombo::plain(KeyCode::Char('c')), Command::ToggleComments);
        self.bind(KeyCombo::plain(KeyCode::Char('u')), Command::ViewUser);
        self.bind(KeyCombo::plain(KeyCode::Char('o')), Command::OpenLink);
        self.bind(KeyCombo::plain(KeyCode::Esc), Command::ClosePanel);
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, combo: KeyCombo, command: Command) {
        self.bindings.insert(combo, command);
    }

    pub fn get(&self, combo: &KeyCombo) -> Option<Command> {
        self.bindings.get(combo).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_select_categories() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get(&KeyCombo::plain(KeyCode::Char('1'))),
            Some(Command::SelectCategory(Category::Top))
        );
        assert_eq!(
            config.get(&KeyCombo::plain(KeyCode::Char('6'))),
            Some(Command::SelectCategory(Category::Job))
        );
        assert_eq!(config.get(&KeyCombo::plain(KeyCode::Char('7'))), None);
    }

    #[test]
    fn test_bind_overrides() {
        let mut config = KeybindingConfig::new();
        config.bind(KeyCombo::plain(KeyCode::Char('r')), Command::LoadMore);
        assert_eq!(
            config.get(&KeyCombo::plain(KeyCode::Char('r'))),
            Some(Command::LoadMore)
        );
    }
}
