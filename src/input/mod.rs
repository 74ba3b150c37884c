//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed against the [`App`] by [`execute_command`]
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App mutation
//! ```

pub mod command;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;

/// Dispatch `key` and run the resulting command. Returns `true` if the key
/// was bound.
pub fn handle_key_event(app: &mut App, registry: &CommandRegistry, key: KeyEvent) -> bool {
    match registry.dispatch(key) {
        Some(cmd) => {
            execute_command(app, cmd);
            true
        }
        None => false,
    }
}

/// Run `cmd` against `app`.
pub fn execute_command(app: &mut App, cmd: Command) {
    match cmd {
        Command::Quit => app.quit(),
        Command::ToggleTheme => app.toggle_theme(),
        Command::SelectCategory(category) => app.select_category(category),
        Command::NextCategory => app.next_category(),
        Command::PrevCategory => app.prev_category(),
        Command::Refresh => app.refresh(),
        Command::LoadMore => app.load_more(),
        Command::MoveUp => app.move_up(),
        Command::MoveDown => app.move_down(),
        Command::MoveToTop => app.move_to_top(),
        Command::MoveToBottom => app.move_to_bottom(),
        Command::Activate => app.activate_selected(),
        Command::ToggleComments => app.toggle_comments(),
        Command::ViewUser => app.view_user(),
        Command::OpenLink => app.open_selected(),
        Command::ClosePanel => app.close_panel(),
    }
}
