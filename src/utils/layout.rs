use ratatui::prelude::*;

/// Split an area into header, content and footer chunks.
///
/// Returns `(header, content, footer)`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Compute a centered popup area as a percentage of the parent, clamped to a maximum size.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16, max_width: u16, max_height: u16) -> Rect {
    let width = ((u32::from(area.width) * u32::from(percent_x) / 100) as u16).min(max_width).min(area.width);
    let height = ((u32::from(area.height) * u32::from(percent_y) / 100) as u16).min(max_height).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
