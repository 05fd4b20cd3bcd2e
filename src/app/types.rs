//! Type definitions for the navigation state machine.
//!
//! - [`ViewKind`] - which screen is active
//! - [`Focus`] - which control receives `Activate`
//! - [`NavEvent`] - resolved user input
//! - [`NavCommand`] - side effect requested from the runner
//! - [`FetchOutcome`] - fetch result fed back into the machine

use crate::error::FetchResult;
use crate::models::{Board, Post, Thread};

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    #[default]
    BoardList,
    ThreadList,
    PostList,
}

impl ViewKind {
    /// Controls reachable with Tab, in cycling order.
    pub fn focus_order(self) -> &'static [Focus] {
        match self {
            ViewKind::BoardList => &[Focus::List, Focus::Quit],
            ViewKind::ThreadList | ViewKind::PostList => &[Focus::List, Focus::Back],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::BoardList => "Boards",
            ViewKind::ThreadList => "Threads",
            ViewKind::PostList => "Posts",
        }
    }
}

/// Focusable control of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Back,
    Quit,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::List => "List",
            Focus::Back => "[Back]",
            Focus::Quit => "[Quit]",
        }
    }
}

/// Input after key resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    First,
    Last,
    /// Activate the focused control.
    Activate,
    Back,
    Home,
    Reload,
    FocusNext,
    FocusPrev,
    Quit,
    /// Terminal resized; the new size of the list body in cells.
    Resize { width: u16, rows: u16 },
}

/// Side effect for the runner to perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavCommand {
    #[default]
    None,
    FetchBoards,
    FetchThreads { board: String },
    FetchPosts { board: String, thread: u64 },
    Quit,
}

impl NavCommand {
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            NavCommand::FetchBoards | NavCommand::FetchThreads { .. } | NavCommand::FetchPosts { .. }
        )
    }
}

/// Result of executing a fetch command.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Boards(FetchResult<Vec<Board>>),
    Threads {
        board: String,
        result: FetchResult<Vec<Thread>>,
    },
    Posts {
        board: String,
        thread: u64,
        result: FetchResult<Vec<Post>>,
    },
}

/// What "back" from a post list does when the thread list is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackPolicy {
    /// Restore the cached thread list; no request.
    #[default]
    Cached,
    /// Re-fetch the thread list, falling back to the cached one on failure.
    Refetch,
}

impl std::str::FromStr for BackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cached" => Ok(BackPolicy::Cached),
            "refetch" => Ok(BackPolicy::Refetch),
            other => Err(format!("unknown back policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Loading,
    Error,
}

/// One-line message shown under the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn loading() -> Self {
        Self {
            text: "loading…".to_string(),
            kind: StatusKind::Loading,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
