//! UI rendering for the reader.
//!
//! ```text
//! ┌ header: name, category tabs, status, theme ──────────────┐
//! │ story list              │ comments / user profile        │
//! └ footer: notice or key hints ─────────────────────────────┘
//! ```
//!
//! The side panel only appears when comments are expanded (or loading) or a
//! user profile is open. Rendering reads [`App`] and never mutates it.

mod footer;
mod header;
pub mod helpers;
mod panels;
mod story_list;
pub mod theme;

pub use panels::{side_panel, SidePanel};
pub use story_list::LOAD_MORE_LABEL;
pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Layout},
    widgets::Block,
    Frame,
};

use crate::app::App;

use footer::render_footer;
use header::render_header;
use panels::render_side_panel;
use story_list::render_story_list;

/// Narrower than this, the side panel replaces the list instead of sharing
/// the width.
const SPLIT_MIN_WIDTH: u16 = 90;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &palette);
    render_footer(frame, footer_area, app, &palette);

    match side_panel(app) {
        None => render_story_list(frame, body_area, app, &palette),
        Some(panel) if body_area.width < SPLIT_MIN_WIDTH => {
            render_side_panel(frame, body_area, app, panel, &palette)
        }
        Some(panel) => {
            let [list_area, panel_area] =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(body_area);
            render_story_list(frame, list_area, app, &palette);
            render_side_panel(frame, panel_area, app, panel, &palette);
        }
    }
}
