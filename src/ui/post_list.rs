//! Post list body.
//!
//! The text of all posts forms one column of lines; the body shows `rows`
//! of them starting at the cursor's line:
//! ```text
//! 12345 01/01/24 Пнд 12:00:00
//!   cat.png /b/src/12345/1.png 1.png
//!   comment text, wrapped
//!
//! ```

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use unicode_width::UnicodeWidthStr;

use crate::app::PostListView;
use crate::markup::format_html;
use crate::models::{Image, Post};

use super::helpers::{fit_width, wrap_text};
use super::theme::{COLOR_DATE, COLOR_DIM, COLOR_ID, COLOR_IMAGE};

const INDENT: &str = "  ";

fn image_line(image: &Image, width: usize) -> Line<'static> {
    let rest = format!(" {} {}", image.path, image.name);
    let name = fit_width(&image.full_name, width);
    let rest = fit_width(&rest, width.saturating_sub(name.width()));
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(name, Style::default().fg(COLOR_IMAGE).add_modifier(Modifier::BOLD)),
        Span::styled(rest, Style::default().fg(COLOR_DIM)),
    ])
}

/// All lines of one post, including the trailing blank separator.
pub fn post_lines(post: &Post, width: usize) -> Vec<Line<'static>> {
    let content_width = width.saturating_sub(INDENT.len());
    let mut lines = vec![Line::from(vec![
        Span::styled(
            post.id.to_string(),
            Style::default().fg(COLOR_ID).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(post.date.clone(), Style::default().fg(COLOR_DATE)),
    ])];

    lines.extend(post.images.iter().map(|image| image_line(image, content_width)));

    let comment = format_html(&post.comment, false);
    lines.extend(
        wrap_text(comment.trim_end(), content_width)
            .into_iter()
            .map(|text| Line::from(vec![Span::raw(INDENT), Span::raw(text)])),
    );
    lines.push(Line::default());
    lines
}

pub fn lines(view: &PostListView, width: usize, rows: usize) -> Vec<Line<'static>> {
    if view.posts().is_empty() {
        return vec![Line::from(Span::styled(
            "no posts",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    view.posts()
        .iter()
        .flat_map(|post| post_lines(post, width))
        .skip(view.cursor().offset())
        .take(rows)
        .collect()
}
