//! Navigation state machine.
//!
//! [`App`] holds the active [`View`], the [`History`] of views navigated away
//! from, the pending fetch (at most one) and the status line. Input arrives
//! as [`NavEvent`] through [`App::handle`], which returns a [`NavCommand`] for
//! the runner; fetch results come back through [`App::complete`].
//!
//! Neither method performs I/O, so every transition is testable without a
//! terminal or a network.

mod cursor;
mod history;
mod navigation;
mod types;
mod view;

pub use cursor::ListCursor;
pub use history::History;
pub use types::{
    BackPolicy, FetchOutcome, Focus, NavCommand, NavEvent, StatusKind, StatusMessage, ViewKind,
};
pub use view::{BoardListView, PostListView, ThreadListView, View};

/// Rows moved by PageUp/PageDown.
pub const DEFAULT_PAGE_STEP: usize = 4;

/// Body width assumed until the first resize.
const DEFAULT_VIEWPORT_WIDTH: usize = 80;

/// Characters of comment shown in a thread row.
pub const DEFAULT_PREVIEW_WIDTH: usize = 180;

/// Behavior knobs of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    pub back_policy: BackPolicy,
    pub page_step: usize,
    pub preview_width: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            back_policy: BackPolicy::default(),
            page_step: DEFAULT_PAGE_STEP,
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

/// Why a fetch was issued; decides how its result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Purpose {
    /// Forward transition to a new view.
    Open,
    /// Replace the active view's items.
    Reload,
    /// Return to a previous view, re-fetching its items.
    Restore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingFetch {
    Boards { purpose: Purpose },
    Threads { board: String, purpose: Purpose },
    Posts {
        board: String,
        thread: u64,
        purpose: Purpose,
    },
}

impl PendingFetch {
    fn command(&self) -> NavCommand {
        match self {
            PendingFetch::Boards { .. } => NavCommand::FetchBoards,
            PendingFetch::Threads { board, .. } => NavCommand::FetchThreads {
                board: board.clone(),
            },
            PendingFetch::Posts { board, thread, .. } => NavCommand::FetchPosts {
                board: board.clone(),
                thread: *thread,
            },
        }
    }
}

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct App {
    view: View,
    history: History,
    pending: Option<PendingFetch>,
    status: Option<StatusMessage>,
    focus_index: usize,
    config: NavConfig,
    /// Size of the list body in cells.
    viewport_width: usize,
    viewport_rows: usize,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl App {
    /// Empty board list; call [`App::start`] to request the boards.
    pub fn new(config: NavConfig) -> Self {
        Self {
            view: View::default(),
            history: History::new(),
            pending: None,
            status: None,
            focus_index: 0,
            config,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_rows: 1,
            should_quit: false,
        }
    }

    /// Issue the startup board fetch.
    pub fn start(&mut self) -> NavCommand {
        self.begin_fetch(PendingFetch::Boards {
            purpose: Purpose::Open,
        })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The command of the outstanding fetch, if any.
    pub fn pending_command(&self) -> Option<NavCommand> {
        self.pending.as_ref().map(PendingFetch::command)
    }

    pub fn focus(&self) -> Focus {
        let order = self.kind().focus_order();
        order[self.focus_index % order.len()]
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn begin_fetch(&mut self, pending: PendingFetch) -> NavCommand {
        let command = pending.command();
        self.pending = Some(pending);
        self.status = Some(StatusMessage::loading());
        command
    }

    fn scroll_view(&mut self) {
        self.view.scroll(self.viewport_width, self.viewport_rows);
    }

    /// Number of cursor positions in the active view.
    fn scroll_extent(&self) -> usize {
        self.view.scroll_extent(self.viewport_width, self.viewport_rows)
    }

    /// Replace the active view, resetting focus and clearing the status.
    fn set_view(&mut self, view: View) {
        self.view = view;
        self.scroll_view();
        self.focus_index = 0;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_is_empty_board_list() {
        let app = App::default();
        assert_eq!(app.kind(), ViewKind::BoardList);
        assert!(app.view().is_empty());
        assert!(app.history().is_empty());
        assert!(!app.is_loading());
        assert!(!app.should_quit());
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn test_start_requests_boards() {
        let mut app = App::default();
        assert_eq!(app.start(), NavCommand::FetchBoards);
        assert!(app.is_loading());
        assert_eq!(app.pending_command(), Some(NavCommand::FetchBoards));
        assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Loading));
    }

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.page_step, 4);
        assert_eq!(config.preview_width, 180);
        assert_eq!(config.back_policy, BackPolicy::Cached);
    }
}
