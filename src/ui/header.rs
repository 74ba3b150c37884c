//! Header line: app name, category tabs, load status, theme.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::Category;

use super::theme::Palette;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    frame.render_widget(Paragraph::new(header_line(app, palette)), area);
}

/// Build the header line.
pub fn header_line(app: &App, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            " hnr ",
            Style::default()
                .fg(palette.on_accent)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let active = app.feed.category();
    for (n, category) in (1..).zip(Category::ALL) {
        let label = format!(" {} {} ", n, category.label());
        let style = if category == active {
            palette.accent_style().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(label, style));
    }

    if let Some(status) = app.load_state.label() {
        let text = match app.pending_category {
            Some(category) if category != active => format!("  {} {}", category.label(), status),
            _ => format!("  {}", status),
        };
        spans.push(Span::styled(text, palette.dim_style()));
    }

    spans.push(Span::styled(
        format!("  [{}]", app.theme),
        palette.dim_style(),
    ));

    Line::from(spans)
}
