//! Color palettes for the reader.
//!
//! Two palettes, picked by the [`Theme`] setting. The accent is the Hacker
//! News orange in both.

use ratatui::style::{Color, Modifier, Style};

use crate::settings::Theme;

/// Hacker News orange (#FF6600)
pub const COLOR_ACCENT: Color = Color::Rgb(255, 102, 0);

/// Error notices
pub const COLOR_ERROR: Color = Color::Rgb(204, 0, 0);

/// Colors used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Secondary text: metadata lines, hints
    pub dim: Color,
    pub accent: Color,
    /// Text drawn on the accent color
    pub on_accent: Color,
    pub border: Color,
    pub selection: Color,
    pub error: Color,
}

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 246, 239),
    text: Color::Rgb(0, 0, 0),
    dim: Color::Rgb(130, 130, 130),
    accent: COLOR_ACCENT,
    on_accent: Color::Rgb(0, 0, 0),
    border: Color::Rgb(190, 190, 180),
    selection: Color::Rgb(255, 224, 200),
    error: COLOR_ERROR,
};

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(24, 24, 24),
    text: Color::Rgb(221, 221, 221),
    dim: Color::Rgb(128, 128, 128),
    accent: COLOR_ACCENT,
    on_accent: Color::Rgb(0, 0, 0),
    border: Color::Rgb(70, 70, 70),
    selection: Color::Rgb(70, 40, 20),
    error: Color::Rgb(255, 85, 85),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn selection_style(&self) -> Style {
        Style::default().bg(self.selection)
    }
}
