//! Thread list body: `{id} {comment preview}` per row.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::ThreadListView;
use crate::markup::preview;
use crate::models::Thread;

use super::helpers::fit_width;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ID};

/// Single-line summary of a thread, at most `preview_width` chars of text.
///
/// Falls back to the subject when the opening post has no text.
pub fn thread_summary(thread: &Thread, preview_width: usize) -> String {
    let text = preview(&thread.comment_excerpt, preview_width);
    if text.is_empty() {
        preview(&thread.subject, preview_width)
    } else {
        text
    }
}

pub fn lines(
    view: &ThreadListView,
    width: usize,
    rows: usize,
    preview_width: usize,
    focused: bool,
) -> Vec<Line<'static>> {
    if view.threads().is_empty() {
        return vec![Line::from(Span::styled(
            "no threads",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    let cursor = view.cursor();
    let content_width = width.saturating_sub(2);

    view.threads()
        .iter()
        .enumerate()
        .skip(cursor.offset())
        .take(rows)
        .map(|(i, thread)| {
            let is_selected = i == cursor.selected();
            let prefix = if is_selected { "> " } else { "  " };

            let id = fit_width(&thread.id, content_width);
            let rest_width = content_width.saturating_sub(id.width() + 1);
            let summary = fit_width(&thread_summary(thread, preview_width), rest_width);

            let text_style = if is_selected && focused {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(COLOR_ACCENT)),
                Span::styled(id, Style::default().fg(COLOR_ID).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(summary, text_style),
            ])
        })
        .collect()
}
