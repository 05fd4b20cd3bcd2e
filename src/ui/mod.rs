//! UI rendering for the interactive browser
//!
//! Screen layout, top to bottom:
//! - Header: location and item count
//! - Body: bordered list of boards, threads or posts
//! - Controls: focusable `[Back]` / `[Quit]` buttons
//! - Status: loading indicator or last error
//! - Hints: key bindings of the active screen
//!
//! [`layout`] is pure and returns the text of every region; [`render`] draws
//! it into a ratatui frame.

mod board_list;
mod helpers;
mod post_list;
mod theme;
mod thread_list;

pub use board_list::board_row;
pub use helpers::{fit_width, wrap_text};
pub use post_list::post_lines;
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DATE, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_ID,
    COLOR_IMAGE, COLOR_LOADING,
};
pub use thread_list::thread_summary;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus, NavEvent, StatusKind, View};
use crate::input::KeybindingConfig;

/// Part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Header,
    Body,
    Controls,
    Status,
    Hints,
}

/// A drawable region: where it goes and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub area: Rect,
    /// Border title; only the body is bordered.
    pub title: Option<String>,
    pub lines: Vec<Line<'static>>,
}

impl Region {
    fn new(kind: RegionKind, area: Rect, lines: Vec<Line<'static>>) -> Self {
        Self {
            kind,
            area,
            title: None,
            lines,
        }
    }

    /// Plain text of every line, for tests and debugging.
    pub fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }
}

/// Header, body, controls, status and hints areas.
fn split(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Body area minus its border.
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Resize event for a terminal of size `area`: the size of the list body.
pub fn resize_event(area: Rect) -> NavEvent {
    let [_, body, _, _, _] = split(area);
    let body = inner(body);
    NavEvent::Resize {
        width: body.width.max(1),
        rows: body.height.max(1),
    }
}

/// Compute every region of the screen for `app`.
pub fn layout(app: &App, area: Rect) -> Vec<Region> {
    let [header, body, controls, status, hints] = split(area);
    let body_inner = inner(body);
    let width = usize::from(body_inner.width);
    let rows = usize::from(body_inner.height);
    let list_focused = app.focus() == Focus::List;

    let body_lines = match app.view() {
        View::BoardList(v) => board_list::lines(v, width, rows, list_focused),
        View::ThreadList(v) => {
            thread_list::lines(v, width, rows, app.config().preview_width, list_focused)
        }
        View::PostList(v) => post_list::lines(v, width, rows),
    };
    let mut body_region = Region::new(RegionKind::Body, body, body_lines);
    body_region.title = Some(format!(" {} ", app.kind().title()));

    vec![
        Region::new(RegionKind::Header, header, vec![header_line(app, header.width)]),
        body_region,
        Region::new(RegionKind::Controls, controls, vec![controls_line(app)]),
        Region::new(RegionKind::Status, status, vec![status_line(app, status.width)]),
        Region::new(RegionKind::Hints, hints, vec![hints_line(app, hints.width)]),
    ]
}

/// Draw the current state.
pub fn render(frame: &mut Frame, app: &App) {
    for region in layout(app, frame.area()) {
        let paragraph = Paragraph::new(region.lines);
        match region.title {
            Some(title) => {
                let block = Block::bordered()
                    .border_style(Style::default().fg(COLOR_BORDER))
                    .title(title);
                frame.render_widget(paragraph.block(block), region.area);
            }
            None => frame.render_widget(paragraph, region.area),
        }
    }
}

fn header_line(app: &App, width: u16) -> Line<'static> {
    let location = match app.view() {
        View::BoardList(v) => format!("boards ({})", v.boards().len()),
        View::ThreadList(v) => format!("/{}/ · {} threads", v.board(), v.threads().len()),
        View::PostList(v) => format!("/{}/{} · {} posts", v.board(), v.thread(), v.posts().len()),
    };
    let location = fit_width(&location, usize::from(width).saturating_sub(11));
    Line::from(vec![
        Span::styled(
            "chanview",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(COLOR_DIM)),
        Span::raw(location),
    ])
}

fn controls_line(app: &App) -> Line<'static> {
    let focus = app.focus();
    let spans: Vec<Span<'static>> = app
        .kind()
        .focus_order()
        .iter()
        .filter(|control| **control != Focus::List)
        .map(|control| {
            let style = if *control == focus {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Span::styled(control.label(), style)
        })
        .collect();
    Line::from(spans)
}

fn status_line(app: &App, width: u16) -> Line<'static> {
    let Some(status) = app.status() else {
        return Line::default();
    };
    let color = match status.kind {
        StatusKind::Info => COLOR_DIM,
        StatusKind::Loading => COLOR_LOADING,
        StatusKind::Error => COLOR_ERROR,
    };
    Line::from(Span::styled(
        fit_width(&status.text, usize::from(width)),
        Style::default().fg(color),
    ))
}

fn hints_line(app: &App, width: u16) -> Line<'static> {
    let text = KeybindingConfig::hints(app.kind())
        .iter()
        .map(|(key, action)| format!("{key} {action}"))
        .collect::<Vec<_>>()
        .join(" · ");
    Line::from(Span::styled(
        fit_width(&text, usize::from(width)),
        Style::default().fg(COLOR_DIM),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FetchOutcome;
    use crate::models::{Board, Thread};

    fn area() -> Rect {
        Rect::new(0, 0, 60, 12)
    }

    fn region(regions: &[Region], kind: RegionKind) -> &Region {
        regions
            .iter()
            .find(|r| r.kind == kind)
            .expect("region present")
    }

    fn app_with_boards() -> App {
        let mut app = App::default();
        app.handle(resize_event(area()));
        app.start();
        app.complete(FetchOutcome::Boards(Ok(vec![
            Board::new("b", "Разное", "Бред"),
            Board::new("pr", "Тематика", "Программирование"),
        ])));
        app
    }

    #[test]
    fn test_resize_event_is_body_size() {
        // 60x12: header, controls, status, hints take 4 rows, border takes 2.
        assert_eq!(resize_event(area()), NavEvent::Resize { width: 58, rows: 6 });
        assert_eq!(
            resize_event(Rect::new(0, 0, 10, 2)),
            NavEvent::Resize { width: 8, rows: 1 }
        );
    }

    #[test]
    fn test_layout_regions() {
        let regions = layout(&app_with_boards(), area());
        let kinds: Vec<RegionKind> = regions.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RegionKind::Header,
                RegionKind::Body,
                RegionKind::Controls,
                RegionKind::Status,
                RegionKind::Hints
            ]
        );
        let body = region(&regions, RegionKind::Body);
        assert_eq!(body.title.as_deref(), Some(" Boards "));
        assert_eq!(body.text().len(), 2);
        assert_eq!(region(&regions, RegionKind::Header).text(), vec!["chanview │ boards (2)"]);
        assert_eq!(region(&regions, RegionKind::Controls).text(), vec!["[Quit]"]);
    }

    #[test]
    fn test_loading_status() {
        let mut app = app_with_boards();
        app.handle(NavEvent::Activate);
        let regions = layout(&app, area());
        assert_eq!(region(&regions, RegionKind::Status).text(), vec!["loading…"]);
    }

    #[test]
    fn test_thread_list_body() {
        let mut app = app_with_boards();
        app.handle(NavEvent::Activate);
        app.complete(FetchOutcome::Threads {
            board: "b".to_string(),
            result: Ok(vec![Thread::new("12345", "", "hi &amp; bye")]),
        });
        let regions = layout(&app, area());
        assert_eq!(region(&regions, RegionKind::Body).text(), vec!["> 12345 hi & bye"]);
        assert_eq!(region(&regions, RegionKind::Controls).text(), vec!["[Back]"]);
        assert!(region(&regions, RegionKind::Status).text()[0].is_empty());
    }
}
