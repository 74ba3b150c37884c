//! Side panels: comments of the expanded story and the selected user's
//! profile.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{Comment, Story, UserProfile};
use crate::text::html_to_text;

use super::helpers::{format_age, plural};
use super::theme::Palette;

/// Which panel, if any, occupies the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanel {
    User,
    Comments,
    LoadingComments,
}

pub fn side_panel(app: &App) -> Option<SidePanel> {
    if app.selected_user.is_some() {
        Some(SidePanel::User)
    } else if app.expanded().is_some() {
        Some(SidePanel::Comments)
    } else if app.pending_comments.is_some() {
        Some(SidePanel::LoadingComments)
    } else {
        None
    }
}

fn panel_block(title: String, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Line::from(Span::styled(title, palette.accent_style())))
}

pub fn render_side_panel(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    panel: SidePanel,
    palette: &Palette,
) {
    let (title, lines) = match panel {
        SidePanel::User => match &app.selected_user {
            Some(user) => (format!(" {} ", user.id), profile_lines(user, palette)),
            None => return,
        },
        SidePanel::Comments => match app.expanded() {
            Some(story) => (
                " Comments ".to_string(),
                comment_lines(story, palette, Utc::now()),
            ),
            None => return,
        },
        SidePanel::LoadingComments => (
            " Comments ".to_string(),
            vec![Line::from(Span::styled(
                "Loading comments…",
                palette.dim_style(),
            ))],
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(panel_block(title, palette))
        .style(palette.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Story text (if any) followed by each loaded comment.
pub fn comment_lines(story: &Story, palette: &Palette, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            story.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(text) = story.text.as_deref() {
        push_text(&mut lines, text);
        lines.push(Line::default());
    }

    let comments = story.comments.as_deref().unwrap_or_default();
    if comments.is_empty() {
        lines.push(Line::from(Span::styled("No comments", palette.dim_style())));
        return lines;
    }

    for comment in comments {
        lines.push(comment_header(comment, palette, now));
        if comment.is_visible() {
            push_text(&mut lines, comment.text.as_deref().unwrap_or_default());
        } else {
            lines.push(Line::from(Span::styled("[deleted]", palette.dim_style())));
        }
        lines.push(Line::default());
    }

    let shown = comments.len() as u64;
    if u64::from(story.descendants) > shown {
        lines.push(Line::from(Span::styled(
            format!("{} in total on the site", plural(u64::from(story.descendants), "comment")),
            palette.dim_style(),
        )));
    }

    lines
}

fn comment_header(comment: &Comment, palette: &Palette, now: DateTime<Utc>) -> Line<'static> {
    let author = if comment.by.is_empty() {
        "[unknown]".to_string()
    } else {
        comment.by.clone()
    };
    let mut spans = vec![
        Span::styled(author, palette.accent_style()),
        Span::styled(format!(" {}", format_age(comment.time, now)), palette.dim_style()),
    ];
    let replies = match comment.reply_count() {
        0 => None,
        1 => Some("1 reply".to_string()),
        n => Some(format!("{} replies", n)),
    };
    if let Some(replies) = replies {
        spans.push(Span::styled(format!(" | {}", replies), palette.dim_style()));
    }
    Line::from(spans)
}

/// Handle, karma, age and about text.
pub fn profile_lines(user: &UserProfile, palette: &Palette) -> Vec<Line<'static>> {
    let created = DateTime::from_timestamp(user.created, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), palette.dim_style()),
            Span::styled(value, Style::default().fg(palette.text)),
        ])
    };

    let mut lines = vec![
        field("user", user.id.clone()),
        field("karma", user.karma.to_string()),
        field("created", created),
        field("submissions", user.submission_count().to_string()),
    ];

    if let Some(about) = user.about.as_deref() {
        lines.push(Line::default());
        push_text(&mut lines, about);
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Esc to close", palette.dim_style())));
    lines
}

fn push_text(lines: &mut Vec<Line<'static>>, html: &str) {
    for line in html_to_text(html).lines() {
        lines.push(Line::from(line.to_string()));
    }
}
