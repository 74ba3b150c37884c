//! The ranked story list.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::models::Story;

use super::helpers::{domain_of, format_age, plural, truncate_to_width};
use super::theme::Palette;

/// Label of the trailing row shown while the list has unfetched ids.
pub const LOAD_MORE_LABEL: &str = "Load more";

pub fn render_story_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Line::from(Span::styled(
            format!(" {} ", app.feed.category().label()),
            palette.accent_style(),
        )));

    let inner_width = area.width.saturating_sub(2) as usize;
    let now = Utc::now();
    let stories = app.feed.stories();

    let mut items: Vec<ListItem> = stories
        .iter()
        .enumerate()
        .map(|(i, story)| story_item(i + 1, story, app, palette, inner_width, now))
        .collect();

    if app.feed.has_more() {
        items.push(ListItem::new(Line::from(vec![
            Span::raw("     "),
            Span::styled(LOAD_MORE_LABEL, palette.accent_style()),
            Span::styled(
                format!(" ({} of {})", app.feed.cursor(), app.feed.ids().len()),
                palette.dim_style(),
            ),
        ])));
    }

    if items.is_empty() {
        let text = if app.is_busy() {
            "Loading…"
        } else {
            "No stories"
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("     {}", text),
            palette.dim_style(),
        ))));
    }

    let list = List::new(items)
        .block(block)
        .style(palette.base())
        .highlight_style(palette.selection_style());

    let mut state = ListState::default();
    if app.row_count() > 0 {
        state.select(Some(app.selected_index.min(app.row_count() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn story_item(
    rank: usize,
    story: &Story,
    app: &App,
    palette: &Palette,
    width: usize,
    now: DateTime<Utc>,
) -> ListItem<'static> {
    let marker = if app.expanded_story == Some(story.id) {
        "▾"
    } else if app.pending_comments == Some(story.id) {
        "…"
    } else {
        " "
    };
    let prefix = format!("{:>3}.{}", rank, marker);

    let domain = story.url.as_deref().and_then(domain_of);
    let domain_text = domain.map(|d| format!(" ({})", d)).unwrap_or_default();
    let title_width = width
        .saturating_sub(prefix.chars().count() + 1)
        .saturating_sub(domain_text.chars().count());

    let title_line = Line::from(vec![
        Span::styled(prefix, palette.dim_style()),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&story.title, title_width),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(domain_text, palette.dim_style()),
    ]);

    let meta = format!(
        "      {} by {} {} | {}",
        plural(story.score.max(0) as u64, "point"),
        story.by,
        format_age(story.time, now),
        plural(u64::from(story.descendants), "comment"),
    );
    let meta_line = Line::from(Span::styled(meta, palette.dim_style()));

    ListItem::new(vec![title_line, meta_line])
}
