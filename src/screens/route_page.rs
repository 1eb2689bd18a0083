//! Placeholder page for internal routes outside the content browser.

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

/// Shows the path of an internal route that has no dedicated screen
pub struct RoutePageScreen {
    path: String,
}

impl RoutePageScreen {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Screen for RoutePageScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) =
            create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);

        Header::render(frame, header_chunk, "GRC - Page", &self.path)?;

        let body = Paragraph::new(vec![
            Line::from(Span::styled(self.path.clone(), t.emphasis_style())),
            Line::from(""),
            Line::from(Span::styled(
                "This page is not available in the terminal browser.",
                t.muted_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style())
                .padding(Padding::new(2, 2, 1, 1)),
        );
        frame.render_widget(body, content_chunk);

        let back = ctx.config.keymap.get_key_display_for_action(Action::Cancel);
        let quit = ctx.config.keymap.get_key_display_for_action(Action::Quit);
        Footer::render(frame, footer_chunk, &format!("{}: Back | {}: Quit", back, quit))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        Ok(match ctx.config.keymap.get_action(key.code, key.modifiers) {
            Some(Action::Cancel) => ScreenAction::Back,
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Help) => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }

    fn name(&self) -> String {
        format!("page({})", self.path)
    }
}
