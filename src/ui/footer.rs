//! Bottom line: the current notice, or key hints when there is none.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::theme::Palette;

const KEY_HINTS: &str =
    "1-6 category  r refresh  m more  c comments  u user  o open  t theme  q quit";

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    frame.render_widget(Paragraph::new(footer_line(app, palette)), area);
}

pub fn footer_line(app: &App, palette: &Palette) -> Line<'static> {
    match &app.notice {
        Some(notice) if notice.is_error() => Line::from(Span::styled(
            format!(" {}", notice.message),
            palette.error_style(),
        )),
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice.message),
            Style::default().fg(palette.text),
        )),
        None => Line::from(Span::styled(format!(" {}", KEY_HINTS), palette.dim_style())),
    }
}
