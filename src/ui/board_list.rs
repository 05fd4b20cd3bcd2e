//! Board list body.
//!
//! One row per board:
//! ```text
//! > b                       Разное Бред
//!   pr                    Тематика Программирование
//! ```

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::BoardListView;
use crate::models::Board;

use super::helpers::fit_width;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ID};

/// Row text without selection prefix, as printed by `chanview .` too.
pub fn board_row(board: &Board) -> String {
    format!("{:<10} {:>20} {}", board.id, board.category, board.name)
}

pub fn lines(view: &BoardListView, width: usize, rows: usize, focused: bool) -> Vec<Line<'static>> {
    if view.boards().is_empty() {
        return vec![Line::from(Span::styled(
            "no boards",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    let cursor = view.cursor();
    let content_width = width.saturating_sub(2);

    view.boards()
        .iter()
        .enumerate()
        .skip(cursor.offset())
        .take(rows)
        .map(|(i, board)| {
            let is_selected = i == cursor.selected();
            let prefix = if is_selected { "> " } else { "  " };
            let row = fit_width(&board_row(board), content_width);

            let style = match (is_selected, focused) {
                (true, true) => Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(COLOR_ID),
                _ => Style::default(),
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(COLOR_ACCENT)),
                Span::styled(row, style),
            ])
        })
        .collect()
}
