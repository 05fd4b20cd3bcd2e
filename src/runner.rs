//! Interactive event loop.
//!
//! One turn: draw, wait for one terminal event, resolve it to a
//! [`NavEvent`], let [`App::handle`] pick a command, and run any fetch the
//! command asks for before reading the next event. Fetches are awaited
//! inline, so input is never processed while one is outstanding.

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

use crate::adapters::ReqwestHttpClient;
use crate::api::ChanApi;
use crate::app::{App, FetchOutcome, NavCommand, NavEvent};
use crate::config::Config;
use crate::input::KeyRegistry;
use crate::terminal::TerminalManager;
use crate::traits::BoardFetcher;
use crate::ui;

/// Perform the fetch `command` asks for; `None` for non-fetch commands.
pub async fn fetch_for<F>(fetcher: &F, command: &NavCommand) -> Option<FetchOutcome>
where
    F: BoardFetcher + ?Sized,
{
    let outcome = match command {
        NavCommand::FetchBoards => FetchOutcome::Boards(fetcher.fetch_boards().await),
        NavCommand::FetchThreads { board } => FetchOutcome::Threads {
            board: board.clone(),
            result: fetcher.fetch_threads(board).await,
        },
        NavCommand::FetchPosts { board, thread } => FetchOutcome::Posts {
            board: board.clone(),
            thread: *thread,
            result: fetcher.fetch_posts(board, *thread).await,
        },
        NavCommand::None | NavCommand::Quit => return None,
    };
    Some(outcome)
}

/// Run the fetch for `command`, if any, and feed the result back to `app`.
pub async fn execute<F>(app: &mut App, fetcher: &F, command: &NavCommand)
where
    F: BoardFetcher + ?Sized,
{
    if let Some(outcome) = fetch_for(fetcher, command).await {
        app.complete(outcome);
    }
}

/// Apply one event including the fetch it triggers.
pub async fn dispatch<F>(app: &mut App, fetcher: &F, event: NavEvent) -> NavCommand
where
    F: BoardFetcher + ?Sized,
{
    let command = app.handle(event);
    execute(app, fetcher, &command).await;
    command
}

/// Map a terminal event to a navigation event for the active view.
pub fn resolve_event(app: &App, registry: &KeyRegistry, event: &Event) -> Option<NavEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => registry.dispatch(*key, app.kind()),
        Event::Resize(width, height) => Some(ui::resize_event(Rect::new(0, 0, *width, *height))),
        _ => None,
    }
}

fn draw<B>(terminal: &mut Terminal<B>, app: &App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| ui::render(frame, app))?;
    Ok(())
}

/// Drive `app` from `events` until quit or the stream ends.
///
/// Issues the startup board fetch first.
pub async fn run_loop<B, S, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetcher: &F,
    registry: &KeyRegistry,
    events: &mut S,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
    F: BoardFetcher + ?Sized,
{
    let size = terminal.size()?;
    app.handle(ui::resize_event(Rect::new(0, 0, size.width, size.height)));

    let command = app.start();
    draw(terminal, app)?;
    execute(app, fetcher, &command).await;

    while !app.should_quit() {
        draw(terminal, app)?;

        let Some(event) = events.next().await else {
            tracing::info!("input stream closed");
            break;
        };
        let Some(nav) = resolve_event(app, registry, &event?) else {
            continue;
        };

        let command = app.handle(nav);
        if command.is_fetch() {
            // Show "loading…" while the request is in flight.
            draw(terminal, app)?;
        }
        execute(app, fetcher, &command).await;
    }

    Ok(())
}

/// Start the interactive browser on the real terminal.
pub fn run_tui(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let client = ReqwestHttpClient::with_timeout(config.timeout)?;
        let api = ChanApi::with_base_url(client, &config.base_url);
        let registry = KeyRegistry::new();
        let mut app = App::new(config.nav());

        tracing::info!("starting interactive session against {}", api.base_url());
        let mut manager = TerminalManager::new()?;
        let mut events = EventStream::new();
        let result = run_loop(manager.terminal(), &mut app, &api, &registry, &mut events).await;
        manager.restore();
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::app::ViewKind;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn api() -> ChanApi<MockHttpClient> {
        let client = MockHttpClient::new();
        let api = ChanApi::with_base_url(client.clone(), "http://test");
        client.set_json(
            &api.boards_url(),
            json!({"Разное": [{"id": "b", "category": "Разное", "name": "Бред"}]}),
        );
        client.set_json(
            &api.threads_url("b"),
            json!({"threads": [{"num": 12345, "subject": "s", "comment": "hello"}]}),
        );
        api
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[tokio::test]
    async fn test_fetch_for_non_fetch_commands() {
        let api = api();
        assert!(fetch_for(&api, &NavCommand::None).await.is_none());
        assert!(fetch_for(&api, &NavCommand::Quit).await.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_runs_fetch() {
        let api = api();
        let mut app = App::default();
        let command = app.start();
        execute(&mut app, &api, &command).await;

        let command = dispatch(&mut app, &api, NavEvent::Activate).await;
        assert_eq!(
            command,
            NavCommand::FetchThreads {
                board: "b".to_string()
            }
        );
        assert_eq!(app.kind(), ViewKind::ThreadList);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_resolve_event() {
        let app = App::default();
        let registry = KeyRegistry::new();
        assert_eq!(
            resolve_event(&app, &registry, &Event::Resize(80, 24)),
            Some(NavEvent::Resize { width: 78, rows: 18 })
        );
        assert_eq!(
            resolve_event(&app, &registry, &Event::FocusGained),
            None
        );
    }

    #[tokio::test]
    async fn test_run_loop_until_quit() {
        let api = api();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut app = App::default();
        let registry = KeyRegistry::new();
        let mut events = futures::stream::iter(vec![
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Char('q')),
            key(KeyCode::Enter),
        ]);

        run_loop(&mut terminal, &mut app, &api, &registry, &mut events)
            .await
            .unwrap();

        assert!(app.should_quit());
        assert_eq!(app.kind(), ViewKind::ThreadList);
        assert_eq!(app.view().board(), Some("b"));
    }

    #[tokio::test]
    async fn test_run_loop_stops_when_stream_ends() {
        let api = api();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut app = App::default();
        let mut events = futures::stream::iter(Vec::<io::Result<Event>>::new());

        run_loop(&mut terminal, &mut app, &api, &KeyRegistry::new(), &mut events)
            .await
            .unwrap();

        assert!(!app.should_quit());
        assert_eq!(app.view().len(), 1);
    }
}
