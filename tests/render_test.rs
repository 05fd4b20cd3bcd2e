// Rendering of full screens into a TestBackend buffer

mod common;

use std::collections::BTreeSet;

use chanview::app::{App, FetchOutcome, NavConfig, NavEvent};
use chanview::models::{Board, Post, Thread};
use chanview::runner::dispatch;
use chanview::ui;
use common::{fixture_api, started_app};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn screen(app: &App) -> Vec<String> {
    screen_sized(app, WIDTH, HEIGHT)
}

fn screen_sized(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

async fn sized_app() -> (App, chanview::api::ChanApi<chanview::adapters::MockHttpClient>) {
    let (api, _client) = fixture_api();
    let mut app = started_app(&api, NavConfig::default()).await;
    app.handle(ui::resize_event(Rect::new(0, 0, WIDTH, HEIGHT)));
    (app, api)
}

#[tokio::test]
async fn test_board_screen() {
    let (app, _api) = sized_app().await;
    let rows = screen(&app);

    assert!(rows[0].starts_with("chanview │ boards (2)"));
    assert!(contains(&rows, "Boards"));
    assert!(contains(&rows, "> b "));
    assert!(contains(&rows, "Бред"));
    assert!(contains(&rows, "Программирование"));
    assert!(contains(&rows, "[Quit]"));
    assert!(!contains(&rows, "[Back]"));
    assert!(rows[HEIGHT as usize - 1].contains("Enter open"));
}

#[tokio::test]
async fn test_thread_screen_shows_preview() {
    let (mut app, api) = sized_app().await;
    dispatch(&mut app, &api, NavEvent::Activate).await;
    let rows = screen(&app);

    assert!(rows[0].contains("/b/ · 2 threads"));
    assert!(contains(&rows, "Threads"));
    assert!(contains(&rows, "> 12345 hello world"));
    assert!(contains(&rows, "67890 bye"));
    assert!(contains(&rows, "[Back]"));
}

#[tokio::test]
async fn test_post_screen_shows_images_and_decoded_text() {
    let (mut app, api) = sized_app().await;
    dispatch(&mut app, &api, NavEvent::Activate).await;
    dispatch(&mut app, &api, NavEvent::Activate).await;
    let rows = screen(&app);

    assert!(rows[0].contains("/b/12345 · 3 posts"));
    assert!(contains(&rows, "12345 01/01/24 Пнд 12:00:00"));
    assert!(contains(&rows, "cat.png /b/src/12345/1.png 1.png"));
    assert!(contains(&rows, ">>12345"));
    assert!(contains(&rows, "reply"));
    assert!(!contains(&rows, "&gt;"));
    assert!(!contains(&rows, "<br>"));
}

#[tokio::test]
async fn test_error_status_is_drawn() {
    let (api, client) = fixture_api();
    client.set_status(&api.boards_url(), 500);
    let app = started_app(&api, NavConfig::default()).await;
    let rows = screen(&app);

    assert!(contains(&rows, "no boards"));
    assert!(contains(&rows, "HTTP 500"));
}

/// Numbers of the "line N" rows drawn on screen.
fn line_numbers(rows: &[String]) -> BTreeSet<u32> {
    rows.iter()
        .filter_map(|row| {
            let mut words = row.split_whitespace().skip_while(|word| *word != "line");
            words.next()?;
            words.next()?.parse().ok()
        })
        .collect()
}

#[test]
fn test_long_post_is_fully_reachable_by_scrolling() {
    // 60x12 leaves a 6-row body for a post of 20 comment lines.
    let area = Rect::new(0, 0, 60, 12);
    let body = (1..=20)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("<br>");

    let mut app = App::default();
    app.handle(ui::resize_event(area));
    app.start();
    app.complete(FetchOutcome::Boards(Ok(vec![Board::new("b", "Разное", "Бред")])));
    app.handle(NavEvent::Activate);
    app.complete(FetchOutcome::Threads {
        board: "b".to_string(),
        result: Ok(vec![Thread::new("1", "s", "c")]),
    });
    app.handle(NavEvent::Activate);
    app.complete(FetchOutcome::Posts {
        board: "b".to_string(),
        thread: 1,
        result: Ok(vec![Post::new(1, body, "01/01/24")]),
    });

    let first = line_numbers(&screen_sized(&app, 60, 12));
    assert_eq!(first, (1..=5).collect());

    let mut seen = first;
    for event in [
        NavEvent::MoveDown,
        NavEvent::PageDown,
        NavEvent::PageDown,
        NavEvent::PageDown,
        NavEvent::Last,
    ] {
        app.handle(event);
        seen.extend(line_numbers(&screen_sized(&app, 60, 12)));
    }
    assert_eq!(seen, (1..=20).collect());

    let last = screen_sized(&app, 60, 12);
    assert!(line_numbers(&last).contains(&20));
    assert!(!line_numbers(&last).contains(&14));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = App::default();
    let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}
