//! Per-screen data snapshots.
//!
//! A view owns the items it was built from and its cursor. Items are never
//! mutated after construction; a reload builds a new snapshot.

use super::cursor::ListCursor;
use super::types::ViewKind;
use crate::models::{Board, Post, Thread};
use crate::ui::post_lines;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardListView {
    boards: Vec<Board>,
    cursor: ListCursor,
}

impl BoardListView {
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            boards,
            cursor: ListCursor::new(),
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    pub fn selected(&self) -> Option<&Board> {
        self.boards.get(self.cursor.selected())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadListView {
    board: String,
    threads: Vec<Thread>,
    cursor: ListCursor,
}

impl ThreadListView {
    pub fn new(board: impl Into<String>, threads: Vec<Thread>) -> Self {
        Self {
            board: board.into(),
            threads,
            cursor: ListCursor::new(),
        }
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    pub fn selected(&self) -> Option<&Thread> {
        self.threads.get(self.cursor.selected())
    }
}

/// Posts of one thread, scrolled by line.
///
/// The cursor selects the first drawn line of the flattened post text, so
/// its position depends on the body width the posts are wrapped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListView {
    board: String,
    thread: u64,
    posts: Vec<Post>,
    cursor: ListCursor,
}

impl PostListView {
    pub fn new(board: impl Into<String>, thread: u64, posts: Vec<Post>) -> Self {
        Self {
            board: board.into(),
            thread,
            posts,
            cursor: ListCursor::new(),
        }
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn thread(&self) -> u64 {
        self.thread
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    /// Lines of all posts wrapped to `width`.
    pub fn line_count(&self, width: usize) -> usize {
        self.posts.iter().map(|post| post_lines(post, width).len()).sum()
    }
}

/// The active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    BoardList(BoardListView),
    ThreadList(ThreadListView),
    PostList(PostListView),
}

impl Default for View {
    fn default() -> Self {
        View::BoardList(BoardListView::default())
    }
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::BoardList(_) => ViewKind::BoardList,
            View::ThreadList(_) => ViewKind::ThreadList,
            View::PostList(_) => ViewKind::PostList,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            View::BoardList(v) => v.boards.len(),
            View::ThreadList(v) => v.threads.len(),
            View::PostList(v) => v.posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cursor(&self) -> &ListCursor {
        match self {
            View::BoardList(v) => &v.cursor,
            View::ThreadList(v) => &v.cursor,
            View::PostList(v) => &v.cursor,
        }
    }

    pub fn cursor_mut(&mut self) -> &mut ListCursor {
        match self {
            View::BoardList(v) => &mut v.cursor,
            View::ThreadList(v) => &mut v.cursor,
            View::PostList(v) => &mut v.cursor,
        }
    }

    /// Same view with the cursor placed at `cursor`'s selection.
    ///
    /// Lists clamp the selection to their items now; a post list keeps the
    /// line position until the next [`View::scroll`] clamps it.
    pub fn with_cursor(mut self, cursor: ListCursor) -> Self {
        let len = self.len();
        match &mut self {
            View::PostList(v) => v.cursor = cursor,
            View::BoardList(v) => v.cursor = ListCursor::at(cursor.selected(), len),
            View::ThreadList(v) => v.cursor = ListCursor::at(cursor.selected(), len),
        }
        self
    }

    /// Number of positions the cursor can take in a `width` x `rows` body.
    ///
    /// One per item for the lists. For posts, every line that can be the
    /// top of a full viewport: `line_count - rows + 1`, at least one.
    pub fn scroll_extent(&self, width: usize, rows: usize) -> usize {
        match self {
            View::PostList(v) if v.posts.is_empty() => 0,
            View::PostList(v) => v.line_count(width).saturating_sub(rows) + 1,
            _ => self.len(),
        }
    }

    /// Bring the selection into a `width` x `rows` body.
    ///
    /// Lists draw one row per item and scroll just enough to show the
    /// selection. Post lists clamp their top line so the last line of the
    /// last post ends at the bottom of the body.
    pub fn scroll(&mut self, width: usize, rows: usize) {
        let extent = self.scroll_extent(width, rows);
        match self {
            View::PostList(v) => {
                v.cursor.clamp(extent);
                v.cursor.scroll_to_selected();
            }
            View::BoardList(v) => v.cursor.scroll_into_view(rows),
            View::ThreadList(v) => v.cursor.scroll_into_view(rows),
        }
    }

    /// Board id of the data shown, if any.
    pub fn board(&self) -> Option<&str> {
        match self {
            View::BoardList(_) => None,
            View::ThreadList(v) => Some(&v.board),
            View::PostList(v) => Some(&v.board),
        }
    }
}
