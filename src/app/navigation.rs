//! Transition logic for the App.

use super::{
    App, BackPolicy, BoardListView, FetchOutcome, Focus, NavCommand, NavEvent,
    PendingFetch, PostListView, Purpose, StatusMessage, ThreadListView, View, ViewKind,
};
use crate::error::{FetchError, FetchResult, InputParseError};
use crate::models::{Board, Post, Thread};

/// Appended to the status of failures worth reloading.
const RETRY_HINT: &str = " Press r to retry.";

impl App {
    /// Apply one input event.
    ///
    /// Returns the command the runner must execute. While a fetch is pending
    /// every event except `Resize` is ignored.
    pub fn handle(&mut self, event: NavEvent) -> NavCommand {
        if let NavEvent::Resize { width, rows } = event {
            self.viewport_width = usize::from(width).max(1);
            self.viewport_rows = usize::from(rows).max(1);
            self.scroll_view();
            return NavCommand::None;
        }
        if self.pending.is_some() {
            tracing::debug!("ignoring {:?} while a fetch is pending", event);
            return NavCommand::None;
        }

        let page = self.config.page_step as isize;
        match event {
            NavEvent::MoveUp => self.move_cursor(-1),
            NavEvent::MoveDown => self.move_cursor(1),
            NavEvent::PageUp => self.move_cursor(-page),
            NavEvent::PageDown => self.move_cursor(page),
            NavEvent::First => {
                self.view.cursor_mut().select_first();
                NavCommand::None
            }
            NavEvent::Last => {
                let extent = self.scroll_extent();
                self.view.cursor_mut().select_last(extent);
                self.scroll_view();
                NavCommand::None
            }
            NavEvent::Activate => match self.focus() {
                Focus::List => self.open_selected(),
                Focus::Back => self.go_back(),
                Focus::Quit => self.quit(),
            },
            NavEvent::Back => self.go_back(),
            NavEvent::Home => self.go_home(),
            NavEvent::Reload => self.reload(),
            NavEvent::FocusNext => {
                let len = self.kind().focus_order().len();
                self.focus_index = (self.focus_index + 1) % len;
                NavCommand::None
            }
            NavEvent::FocusPrev => {
                let len = self.kind().focus_order().len();
                self.focus_index = (self.focus_index + len - 1) % len;
                NavCommand::None
            }
            NavEvent::Quit => self.quit(),
            NavEvent::Resize { .. } => NavCommand::None,
        }
    }

    /// Apply the result of the pending fetch.
    ///
    /// Successful results complete the transition that issued the fetch.
    /// Failures keep the current view and set an error status. An outcome
    /// that does not answer the pending request is dropped.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        let Some(pending) = self.pending.take() else {
            tracing::warn!("dropping {} outcome: no fetch pending", outcome_label(&outcome));
            return;
        };

        match (pending, outcome) {
            (PendingFetch::Boards { purpose }, FetchOutcome::Boards(result)) => {
                self.apply_boards(purpose, result)
            }
            (
                PendingFetch::Threads { board, purpose },
                FetchOutcome::Threads {
                    board: fetched,
                    result,
                },
            ) if board == fetched => self.apply_threads(board, purpose, result),
            (
                PendingFetch::Posts {
                    board,
                    thread,
                    purpose,
                },
                FetchOutcome::Posts {
                    board: fetched_board,
                    thread: fetched_thread,
                    result,
                },
            ) if board == fetched_board && thread == fetched_thread => {
                self.apply_posts(board, thread, purpose, result)
            }
            (pending, outcome) => {
                tracing::warn!(
                    "dropping {} outcome: waiting for {:?}",
                    outcome_label(&outcome),
                    pending.command()
                );
                self.pending = Some(pending);
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) -> NavCommand {
        let extent = self.scroll_extent();
        self.view.cursor_mut().move_by(delta, extent);
        self.scroll_view();
        NavCommand::None
    }

    fn quit(&mut self) -> NavCommand {
        tracing::info!("quit requested");
        self.should_quit = true;
        NavCommand::Quit
    }

    /// Forward transition from the selected row.
    fn open_selected(&mut self) -> NavCommand {
        let next: Result<Option<PendingFetch>, InputParseError> = match &self.view {
            View::BoardList(v) => Ok(v.selected().map(|board| PendingFetch::Threads {
                board: board.id.clone(),
                purpose: Purpose::Open,
            })),
            View::ThreadList(v) => match v.selected() {
                Some(thread) => match thread.number() {
                    Some(number) => Ok(Some(PendingFetch::Posts {
                        board: v.board().to_string(),
                        thread: number,
                        purpose: Purpose::Open,
                    })),
                    None => Err(InputParseError::InvalidThreadId(thread.id.clone())),
                },
                None => Ok(None),
            },
            View::PostList(_) => Ok(None),
        };

        match next {
            Ok(Some(pending)) => {
                tracing::info!("opening {:?}", pending.command());
                self.begin_fetch(pending)
            }
            Ok(None) => NavCommand::None,
            Err(err) => {
                tracing::warn!("[{}] {}", err.error_code(), err);
                self.status = Some(StatusMessage::error(err.user_message()));
                NavCommand::None
            }
        }
    }

    fn go_back(&mut self) -> NavCommand {
        match self.kind() {
            ViewKind::BoardList => NavCommand::None,
            ViewKind::ThreadList => match self.history.pop() {
                Some(previous) => {
                    tracing::info!("back to {:?}", previous.kind());
                    self.set_view(previous);
                    NavCommand::None
                }
                None => self.begin_fetch(PendingFetch::Boards {
                    purpose: Purpose::Restore,
                }),
            },
            ViewKind::PostList => {
                let board = self.view.board().unwrap_or_default().to_string();
                let cached = matches!(self.history.peek(), Some(View::ThreadList(_)));
                if cached && self.config.back_policy == BackPolicy::Cached {
                    if let Some(previous) = self.history.pop() {
                        tracing::info!("back to /{}/ (cached)", board);
                        self.set_view(previous);
                    }
                    NavCommand::None
                } else {
                    self.begin_fetch(PendingFetch::Threads {
                        board,
                        purpose: Purpose::Restore,
                    })
                }
            }
        }
    }

    fn go_home(&mut self) -> NavCommand {
        if self.kind() == ViewKind::BoardList {
            self.history.clear();
            return NavCommand::None;
        }
        match self.history.take_root() {
            Some(root @ View::BoardList(_)) => {
                tracing::info!("home");
                self.set_view(root);
                NavCommand::None
            }
            _ => self.begin_fetch(PendingFetch::Boards {
                purpose: Purpose::Restore,
            }),
        }
    }

    fn reload(&mut self) -> NavCommand {
        let pending = match &self.view {
            View::BoardList(_) => PendingFetch::Boards {
                purpose: Purpose::Reload,
            },
            View::ThreadList(v) => PendingFetch::Threads {
                board: v.board().to_string(),
                purpose: Purpose::Reload,
            },
            View::PostList(v) => PendingFetch::Posts {
                board: v.board().to_string(),
                thread: v.thread(),
                purpose: Purpose::Reload,
            },
        };
        tracing::info!("reloading {:?}", pending.command());
        self.begin_fetch(pending)
    }

    fn apply_boards(&mut self, purpose: Purpose, result: FetchResult<Vec<Board>>) {
        let boards = match result {
            Ok(boards) => boards,
            Err(err) => return self.fail(err),
        };
        tracing::info!("loaded {} boards", boards.len());

        let view = View::BoardList(BoardListView::new(boards));
        if purpose == Purpose::Reload && self.kind() == ViewKind::BoardList {
            let cursor = *self.view.cursor();
            self.set_view(view.with_cursor(cursor));
        } else {
            self.history.clear();
            self.set_view(view);
        }
    }

    fn apply_threads(&mut self, board: String, purpose: Purpose, result: FetchResult<Vec<Thread>>) {
        match (purpose, result) {
            (Purpose::Open, Ok(threads)) => {
                tracing::info!("opened /{}/ with {} threads", board, threads.len());
                let previous = std::mem::take(&mut self.view);
                self.history.push(previous);
                self.set_view(View::ThreadList(ThreadListView::new(board, threads)));
            }
            (Purpose::Reload, Ok(threads)) => {
                let cursor = *self.view.cursor();
                let view = View::ThreadList(ThreadListView::new(board, threads));
                self.set_view(view.with_cursor(cursor));
            }
            (Purpose::Restore, Ok(threads)) => {
                let cursor = self
                    .pop_cached_threads(&board)
                    .map(|cached| *cached.cursor())
                    .unwrap_or_default();
                tracing::info!("back to /{}/ (refetched)", board);
                let view = View::ThreadList(ThreadListView::new(board, threads));
                self.set_view(view.with_cursor(cursor));
            }
            (Purpose::Restore, Err(err)) => {
                if let Some(cached) = self.pop_cached_threads(&board) {
                    self.set_view(cached);
                }
                self.fail(err);
            }
            (_, Err(err)) => self.fail(err),
        }
    }

    fn apply_posts(
        &mut self,
        board: String,
        thread: u64,
        purpose: Purpose,
        result: FetchResult<Vec<Post>>,
    ) {
        let posts = match result {
            Ok(posts) => posts,
            Err(err) => return self.fail(err),
        };

        let view = View::PostList(PostListView::new(board, thread, posts));
        if purpose == Purpose::Reload && self.kind() == ViewKind::PostList {
            let cursor = *self.view.cursor();
            self.set_view(view.with_cursor(cursor));
        } else {
            tracing::info!("opened thread {} with {} posts", thread, view.len());
            let previous = std::mem::take(&mut self.view);
            self.history.push(previous);
            self.set_view(view);
        }
    }

    /// Pop the history top if it is the thread list of `board`.
    fn pop_cached_threads(&mut self, board: &str) -> Option<View> {
        match self.history.peek() {
            Some(View::ThreadList(v)) if v.board() == board => self.history.pop(),
            _ => None,
        }
    }

    fn fail(&mut self, err: FetchError) {
        tracing::warn!("[{}] {}", err.error_code(), err);
        let mut text = err.user_message();
        if err.is_retryable() {
            text.push_str(RETRY_HINT);
        }
        self.status = Some(StatusMessage::error(text));
    }
}

fn outcome_label(outcome: &FetchOutcome) -> &'static str {
    match outcome {
        FetchOutcome::Boards(_) => "boards",
        FetchOutcome::Threads { .. } => "threads",
        FetchOutcome::Posts { .. } => "posts",
    }
}
