//! Presentational row for one GRC content item.

use crate::api::GrcItem;
use crate::styles::{theme, ROW_TRAILING_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::ListItem;

/// A title/subtitle row with a trailing `›`.
///
/// Stateless: `pressed` is supplied by the owning screen while the mouse
/// button is held over the row.
#[derive(Debug, Clone, Copy)]
pub struct GrcRow<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub url: &'a str,
    pub pressed: bool,
}

impl<'a> GrcRow<'a> {
    pub fn new(item: &'a GrcItem) -> Self {
        Self {
            title: &item.title,
            subtitle: &item.subtitle,
            url: &item.url,
            pressed: false,
        }
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Build the two-line list item, padding the title so the trailing
    /// symbol lines up at `width`.
    pub fn to_list_item(&self, width: u16) -> ListItem<'a> {
        let t = theme();
        let title_width = usize::from(width).saturating_sub(ROW_TRAILING_SYMBOL.chars().count() + 1);
        let title = truncate(self.title, title_width);
        let gap = title_width.saturating_sub(title.chars().count()) + 1;

        let title_line = Line::from(vec![
            Span::styled(title, t.text_style().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(ROW_TRAILING_SYMBOL, t.muted_style()),
        ]);
        let subtitle_line = Line::from(Span::styled(
            truncate(self.subtitle, usize::from(width)),
            t.muted_style(),
        ));

        let mut item = ListItem::new(vec![title_line, subtitle_line]);
        if self.pressed {
            item = item.style(t.pressed_style());
        }
        item
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
