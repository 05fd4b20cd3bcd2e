//! Stack of views navigated away from.

use super::view::View;

/// Prior views, oldest first. The active view is never stored here.
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<View>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, view: View) {
        self.stack.push(view);
    }

    pub fn pop(&mut self) -> Option<View> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&View> {
        self.stack.last()
    }

    /// Remove every entry and return the oldest one.
    pub fn take_root(&mut self) -> Option<View> {
        let mut drained = self.stack.drain(..);
        drained.next()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
