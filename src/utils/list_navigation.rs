//! List navigation helpers shared by list screens.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension trait for `ListState` with bounded movement.
pub trait ListStateExt {
    /// Move selection up, stopping at the first item.
    fn move_up_by(&mut self, count: usize, total_items: usize);

    /// Move selection down, stopping at the last item.
    fn move_down_by(&mut self, count: usize, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items`, selecting the first item
    /// when nothing is selected and clearing it when the list is empty.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = (current + count).min(total_items.saturating_sub(1));
        self.select(Some(new_index));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.min(total_items - 1)));
    }
}

/// Map a terminal row inside `area` to a list index.
///
/// `offset` is the index of the first visible item and `item_height` the
/// number of terminal rows each item occupies.
pub fn index_at_row(area: Rect, row: u16, offset: usize, item_height: u16, total_items: usize) -> Option<usize> {
    if item_height == 0 || row < area.y || row >= area.y + area.height {
        return None;
    }
    let index = offset + usize::from((row - area.y) / item_height);
    (index < total_items).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_up_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_up_by(3, 10);
        assert_eq!(state.selected(), Some(2));

        // Saturates at 0
        state.move_up_by(10, 10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_move_down_by() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_down_by(3, 10);
        assert_eq!(state.selected(), Some(8));

        state.move_down_by(10, 10);
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_empty_list() {
        let mut state = ListState::default();
        state.move_down_by(1, 0);
        assert_eq!(state.selected(), None);
        state.select_last_item(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_to() {
        let mut state = ListState::default();
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(0));

        state.select(Some(7));
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp_to(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_index_at_row() {
        let area = Rect::new(2, 10, 40, 8);
        assert_eq!(index_at_row(area, 10, 0, 2, 5), Some(0));
        assert_eq!(index_at_row(area, 13, 0, 2, 5), Some(1));
        assert_eq!(index_at_row(area, 13, 3, 2, 5), Some(4));
        // Past the last item
        assert_eq!(index_at_row(area, 17, 0, 2, 3), None);
        // Outside the area
        assert_eq!(index_at_row(area, 9, 0, 2, 5), None);
        assert_eq!(index_at_row(area, 18, 0, 2, 5), None);
    }
}
