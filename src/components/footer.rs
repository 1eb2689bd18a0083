use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer with key hints
pub struct Footer;

impl Footer {
    /// Render key hints formatted as `"keys: label | keys: label"`
    ///
    /// # Returns
    /// The height used (1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_focused_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Line::from(hint_spans(text))).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }
}

/// Split footer text into styled spans: keys emphasized, labels muted
fn hint_spans(text: &str) -> Vec<Span<'_>> {
    let t = theme();
    let mut spans = Vec::new();

    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", t.muted_style()));
        }
        match part.split_once(": ") {
            Some((keys, label)) => {
                spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(format!(": {}", label), t.text_style()));
            }
            None => spans.push(Span::styled(part, t.text_style())),
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans_split_keys_and_labels() {
        let spans = hint_spans("Enter: Open | Esc: Back");
        let content: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(content, vec!["Enter", ": Open", " | ", "Esc", ": Back"]);
    }

    #[test]
    fn test_hint_spans_plain_text() {
        let spans = hint_spans("Loading");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Loading");
    }
}
