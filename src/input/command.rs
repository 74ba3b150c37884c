//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

use crate::models::Category;

/// Every action a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Toggle light/dark theme (t)
    ToggleTheme,

    // =========================================================================
    // Feed
    // =========================================================================
    /// Jump to a category (1-6)
    SelectCategory(Category),
    /// Next category (Tab)
    NextCategory,
    /// Previous category (Shift+Tab)
    PrevCategory,
    /// Re-fetch the current list (r)
    Refresh,
    /// Load the next batch (m)
    LoadMore,

    // =========================================================================
    // Selection
    // =========================================================================
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,
    /// Enter: load more on the trailing row, else toggle comments
    Activate,
    /// Toggle comments of the selected story (c)
    ToggleComments,
    /// Show the selected story's author (u)
    ViewUser,
    /// Open the selected story in the browser (o)
    OpenLink,
    /// Close the user panel or the comments (Esc)
    ClosePanel,
}
