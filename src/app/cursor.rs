//! Bounded selection cursor shared by all list views.

/// Selected index plus the first visible index.
///
/// For a non-empty list `selected < len`; for an empty list both fields are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    selected: usize,
    offset: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at `selected`, clamped to `len`.
    pub fn at(selected: usize, len: usize) -> Self {
        let mut cursor = Self {
            selected,
            offset: 0,
        };
        cursor.clamp(len);
        cursor
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move by `delta` rows, stopping at either end.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Re-establish bounds after the item list changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.offset = self.offset.min(self.selected);
    }

    /// Adjust `offset` so `selected` lies within `visible` rows.
    pub fn scroll_into_view(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    /// Pin the selected item to the top of the viewport.
    pub fn scroll_to_selected(&mut self) {
        self.offset = self.selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_stops_at_bounds() {
        let mut cursor = ListCursor::new();
        cursor.move_by(-1, 3);
        assert_eq!(cursor.selected(), 0);
        cursor.move_by(10, 3);
        assert_eq!(cursor.selected(), 2);
        cursor.move_by(1, 3);
        assert_eq!(cursor.selected(), 2);
    }

    #[test]
    fn test_empty_list_stays_zero() {
        let mut cursor = ListCursor::at(5, 0);
        assert_eq!(cursor.selected(), 0);
        cursor.move_by(1, 0);
        cursor.select_last(0);
        assert_eq!(cursor, ListCursor::default());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = ListCursor::at(8, 10);
        cursor.scroll_into_view(3);
        assert_eq!(cursor.offset(), 6);
        cursor.clamp(4);
        assert_eq!(cursor.selected(), 3);
        assert!(cursor.offset() <= cursor.selected());
    }

    #[test]
    fn test_scroll_into_view() {
        let mut cursor = ListCursor::new();
        cursor.move_by(5, 20);
        cursor.scroll_into_view(4);
        assert_eq!(cursor.offset(), 2);
        cursor.move_by(-4, 20);
        cursor.scroll_into_view(4);
        assert_eq!(cursor.offset(), 1);
        cursor.select_first();
        assert_eq!((cursor.selected(), cursor.offset()), (0, 0));
    }

    #[test]
    fn test_scroll_to_selected() {
        let mut cursor = ListCursor::at(7, 10);
        cursor.scroll_to_selected();
        assert_eq!(cursor.offset(), 7);
    }
}
