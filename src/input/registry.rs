//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// The keybinding configuration
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns the command bound to `key`, or `None` if the key is unbound
    /// or is a release/repeat event.
    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(cmd) = self.config.get(&combo) {
            return Some(cmd);
        }

        // Uppercase letters arrive with SHIFT on some terminals and without it
        // on others.
        let without_shift = KeyCombo::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT));
        let with_shift = KeyCombo::new(key.code, key.modifiers.union(KeyModifiers::SHIFT));
        self.config
            .get(&without_shift)
            .or_else(|| self.config.get(&with_shift))
    }
}
