//! GRC content list screen controller.
//!
//! Fetches the content items for the signed-in user and the route title,
//! then renders a spinner, the error message, or the list. Activating a row
//! either pushes an internal route or opens a PDF with the platform opener.

use crate::api::{ContentClient, ContentError, FetchRequest, GrcItem};
use crate::components::footer::Footer;
use crate::components::grc_row::GrcRow;
use crate::components::header::Header;
use crate::keymap::Action;
use crate::navigation::{DocumentOpener, PressTarget};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::Session;
use crate::state::{ContentState, FetchTicket, RenderBranch};
use crate::styles::{theme, FOOTER_HEIGHT, HEADER_HEIGHT, LIST_HIGHLIGHT_SYMBOL, ROW_HEIGHT};
use crate::utils::list_navigation::{index_at_row, ListStateExt, DEFAULT_PAGE_SIZE};
use crate::utils::text::{spinner_char, to_camel_case};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, HighlightSpacing, List, ListState, Padding, Paragraph, Scrollbar,
    ScrollbarOrientation, ScrollbarState, Wrap,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

type FetchOutcome = (FetchTicket, Result<Vec<GrcItem>, ContentError>);

/// Inputs the fetch depends on. A change triggers a new fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Dependencies {
    user_id: Option<String>,
    title: String,
}

pub struct GrcContentScreen {
    title: String,
    client: ContentClient,
    opener: Arc<dyn DocumentOpener>,
    runtime: Handle,
    state: ContentState,
    list_state: ListState,
    scrollbar_state: ScrollbarState,
    /// Row under a held mouse button
    pressed: Option<usize>,
    /// Inner list area from the last render, for mouse hit-testing
    list_area: Rect,
    dependencies: Option<Dependencies>,
    outcome_tx: UnboundedSender<FetchOutcome>,
    outcome_rx: UnboundedReceiver<FetchOutcome>,
}

impl GrcContentScreen {
    pub fn new(
        title: impl Into<String>,
        client: ContentClient,
        opener: Arc<dyn DocumentOpener>,
        runtime: Handle,
    ) -> Self {
        let (outcome_tx, outcome_rx) = unbounded_channel();
        Self {
            title: title.into(),
            client,
            opener,
            runtime,
            state: ContentState::new(),
            list_state: ListState::default(),
            scrollbar_state: ScrollbarState::default(),
            pressed: None,
            list_area: Rect::default(),
            dependencies: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Camel-cased title shown in the header
    pub fn heading(&self) -> String {
        to_camel_case(&self.title)
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Change the route title and refetch if the dependencies changed
    pub fn set_title(&mut self, title: impl Into<String>, session: &Session) -> bool {
        self.title = title.into();
        self.sync_dependencies(session)
    }

    /// Fetch when the user id or title differs from the last run.
    ///
    /// Returns `true` if a request was issued. When the new inputs cannot be
    /// fetched, a request still in flight for the old ones is dropped.
    pub fn sync_dependencies(&mut self, session: &Session) -> bool {
        let dependencies = Dependencies {
            user_id: session.user_id().map(str::to_string),
            title: self.title.clone(),
        };
        if self.dependencies.as_ref() == Some(&dependencies) {
            return false;
        }
        self.dependencies = Some(dependencies);
        if self.fetch(session) {
            return true;
        }
        self.state.invalidate();
        false
    }

    /// Start a fetch unconditionally.
    ///
    /// Without a user id or a title nothing is requested and the state is
    /// left as it was; returns `false` in that case.
    pub fn fetch(&mut self, session: &Session) -> bool {
        let Some(request) = FetchRequest::new(session.user_id(), Some(&self.title)) else {
            debug!(
                "Skipping GRC content fetch (user id present: {}, title: {:?})",
                session.user_id().is_some(),
                self.title
            );
            return false;
        };

        let ticket = self.state.begin_fetch();
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        debug!("Starting GRC content fetch generation {}", ticket.generation());

        self.runtime.spawn(async move {
            let result = client.fetch_items(&request).await;
            // A closed channel means the screen was popped; nothing to update
            let _ = tx.send((ticket, result));
        });
        true
    }

    /// Apply every fetch that has finished. Returns how many changed the state.
    pub fn poll_fetches(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((ticket, result)) = self.outcome_rx.try_recv() {
            if self.apply_outcome(ticket, result) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns `false` when the result was stale and got discarded.
    pub async fn settle(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some((ticket, result)) => self.apply_outcome(ticket, result),
            None => false,
        }
    }

    fn apply_outcome(&mut self, ticket: FetchTicket, result: Result<Vec<GrcItem>, ContentError>) -> bool {
        if !self.state.apply(ticket, result) {
            return false;
        }
        self.pressed = None;
        self.list_state.clamp_to(self.state.items.len());
        self.scrollbar_state = ScrollbarState::new(self.state.items.len().saturating_sub(1));
        true
    }

    /// Decide what activating `url` does and perform document opens.
    ///
    /// Opener failures are logged and never reach the error state.
    pub fn press(&mut self, url: &str) -> ScreenAction {
        match PressTarget::classify(url) {
            PressTarget::Internal(path) => {
                info!("Navigating to {}", path);
                ScreenAction::Navigate(path)
            }
            PressTarget::Document(url) => {
                info!("Opening document {}", url);
                if let Err(e) = self.opener.open(&url) {
                    warn!("Failed to open document {}: {:#}", url, e);
                }
                ScreenAction::None
            }
            PressTarget::Ignored => {
                debug!("Ignoring press on unsupported target {:?}", url);
                ScreenAction::None
            }
        }
    }

    /// Activate the selected row with its own URL
    pub fn press_selected(&mut self) -> ScreenAction {
        if self.state.branch() != RenderBranch::List {
            return ScreenAction::None;
        }
        let url = self
            .list_state
            .selected()
            .and_then(|i| self.state.items.get(i))
            .map(|item| item.url.clone());
        match url {
            Some(url) => self.press(&url),
            None => ScreenAction::None,
        }
    }

    /// Row count that can be navigated right now
    fn visible_items(&self) -> usize {
        if self.state.branch() == RenderBranch::List {
            self.state.items.len()
        } else {
            0
        }
    }

    fn handle_action(&mut self, action: Action, ctx: &ScreenContext) -> ScreenAction {
        let total = self.visible_items();
        match action {
            Action::Cancel => return ScreenAction::Back,
            Action::Quit => return ScreenAction::Quit,
            Action::Help => return ScreenAction::ShowHelp,
            Action::Confirm => return self.press_selected(),
            Action::Refresh => {
                self.fetch(ctx.session);
            }
            Action::MoveUp => self.list_state.move_up_by(1, total),
            Action::MoveDown => self.list_state.move_down_by(1, total),
            Action::PageUp => self.list_state.move_up_by(DEFAULT_PAGE_SIZE, total),
            Action::PageDown => self.list_state.move_down_by(DEFAULT_PAGE_SIZE, total),
            Action::GoToTop => self.list_state.select_first_item(total),
            Action::GoToEnd => self.list_state.select_last_item(total),
        }
        ScreenAction::None
    }

    /// Index of the row under the mouse, if any
    fn row_at(&self, mouse: &MouseEvent) -> Option<usize> {
        let area = self.list_area;
        if mouse.column < area.x || mouse.column >= area.x + area.width {
            return None;
        }
        index_at_row(area, mouse.row, self.list_state.offset(), ROW_HEIGHT, self.visible_items())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        let total = self.visible_items();
        let hit = self.row_at(&mouse);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = hit;
                if self.pressed.is_some() {
                    self.list_state.select(self.pressed);
                }
                ScreenAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.pressed.take() {
                    Some(index) if hit == Some(index) => self.press_selected(),
                    _ => ScreenAction::None,
                }
            }
            MouseEventKind::ScrollUp => {
                self.list_state.move_up_by(1, total);
                ScreenAction::None
            }
            MouseEventKind::ScrollDown => {
                self.list_state.move_down_by(1, total);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    fn description(&self, session: &Session) -> String {
        match session.country() {
            Some(country) => format!("Governance, risk and compliance content · {}", country),
            None => "Governance, risk and compliance content".to_string(),
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, tick: u64) {
        let t = theme();
        let spinner = Paragraph::new(format!("{} Loading content...", spinner_char(tick)))
            .style(t.emphasis_style())
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::new(0, 0, area.height / 2, 0)));
        frame.render_widget(spinner, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let t = theme();
        let error = Paragraph::new(message.to_string())
            .style(t.error_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .title(" Error ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::new(2, 2, 1, 1)),
            );
        frame.render_widget(error, area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" Content ({}) ", self.state.items.len()))
            .title_alignment(Alignment::Center)
            .padding(Padding::new(1, 1, 0, 0));

        if self.state.items.is_empty() {
            self.list_area = Rect::default();
            let empty = Paragraph::new("No content is available for this topic yet.")
                .style(t.muted_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        self.list_area = inner;

        // Room for the highlight symbol and the scrollbar
        let row_width = inner
            .width
            .saturating_sub(LIST_HIGHLIGHT_SYMBOL.chars().count() as u16 + 1);
        let rows: Vec<_> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                GrcRow::new(item)
                    .pressed(self.pressed == Some(i))
                    .to_list_item(row_width)
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);
        frame.render_stateful_widget(list, area, &mut self.list_state);

        if let Some(selected) = self.list_state.selected() {
            self.scrollbar_state = self.scrollbar_state.position(selected);
        }
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        frame.render_stateful_widget(scrollbar, area, &mut self.scrollbar_state);
    }
}

impl Screen for GrcContentScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Clear, area);

        let (header_chunk, content_chunk, footer_chunk) =
            create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);

        Header::render(
            frame,
            header_chunk,
            &format!("GRC - {}", self.heading()),
            &self.description(ctx.session),
        )?;

        match self.state.branch() {
            RenderBranch::Loading => self.render_loading(frame, content_chunk, ctx.tick),
            RenderBranch::Error => {
                let message = self.state.error.clone().unwrap_or_default();
                self.render_error(frame, content_chunk, &message);
            }
            RenderBranch::List => self.render_list(frame, content_chunk),
        }

        Footer::render(frame, footer_chunk, &ctx.config.keymap.footer_navigation())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.config.keymap.get_action(key.code, key.modifiers) {
                    Some(action) => Ok(self.handle_action(action, ctx)),
                    None => Ok(ScreenAction::None),
                }
            }
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.sync_dependencies(ctx.session);
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.pressed = None;
        Ok(())
    }

    fn poll_background(&mut self) {
        self.poll_fetches();
    }

    fn name(&self) -> String {
        format!("grc_content({})", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RawResponse, Transport};
    use crate::config::Config;
    use crate::session::User;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StaticTransport {
        status: u16,
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, ContentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawResponse {
                status: self.status,
                status_text: "OK".to_string(),
                body: self.body.to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl DocumentOpener for RecordingOpener {
        fn open(&self, url: &str) -> anyhow::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    const TWO_ITEMS: &str = r#"[
        {"title":"Policy","subtitle":"PDF","url":"https://cdn.example.com/policy.PDF"},
        {"title":"Report","subtitle":"Internal","url":"/reports/x"}
    ]"#;

    fn screen_with(
        body: &'static str,
        opener: Arc<RecordingOpener>,
    ) -> (GrcContentScreen, Arc<StaticTransport>) {
        let transport = Arc::new(StaticTransport {
            status: 200,
            body,
            calls: AtomicUsize::new(0),
        });
        let client = ContentClient::new("https://grc.example.com", transport.clone());
        let screen = GrcContentScreen::new("ESG", client, opener, Handle::current());
        (screen, transport)
    }

    fn session() -> Session {
        Session::new(Some(User::new("42", "Germany")))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_enter_fetches_once_per_dependency_set() {
        let (mut screen, transport) = screen_with(TWO_ITEMS, Arc::default());
        let config = Config::default();
        let session = session();
        let ctx = ScreenContext::new(&config, &session);

        screen.on_enter(&ctx).unwrap();
        assert!(screen.settle().await);
        screen.on_enter(&ctx).unwrap();

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(screen.state().items.len(), 2);
        assert_eq!(screen.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_title_change_refetches() {
        let (mut screen, transport) = screen_with(TWO_ITEMS, Arc::default());
        let session = session();

        assert!(screen.sync_dependencies(&session));
        screen.settle().await;
        assert!(screen.set_title("Data Protection", &session));
        screen.settle().await;

        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
        assert_eq!(screen.heading(), "dataProtection");
    }

    #[tokio::test]
    async fn test_confirm_on_internal_row_navigates() {
        let (mut screen, _) = screen_with(TWO_ITEMS, Arc::default());
        let config = Config::default();
        let session = session();
        let ctx = ScreenContext::new(&config, &session);
        screen.on_enter(&ctx).unwrap();
        screen.settle().await;

        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Navigate("/reports/x".to_string()));
    }

    #[tokio::test]
    async fn test_confirm_on_pdf_row_opens_document() {
        let opener = Arc::new(RecordingOpener::default());
        let (mut screen, _) = screen_with(TWO_ITEMS, opener.clone());
        let config = Config::default();
        let session = session();
        let ctx = ScreenContext::new(&config, &session);
        screen.on_enter(&ctx).unwrap();
        screen.settle().await;

        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["https://cdn.example.com/policy.PDF".to_string()]
        );
    }

    #[tokio::test]
    async fn test_confirm_while_loading_does_nothing() {
        let opener = Arc::new(RecordingOpener::default());
        let (mut screen, _) = screen_with(TWO_ITEMS, opener.clone());
        let config = Config::default();
        let session = session();
        let ctx = ScreenContext::new(&config, &session);

        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_escape_goes_back() {
        let (mut screen, _) = screen_with(TWO_ITEMS, Arc::default());
        let config = Config::default();
        let session = session();
        let ctx = ScreenContext::new(&config, &session);
        let action = screen.handle_event(key(KeyCode::Esc), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Back);
    }

    #[tokio::test]
    async fn test_mouse_press_and_release_activates_row() {
        let (mut screen, _) = screen_with(TWO_ITEMS, Arc::default());
        let session = session();
        screen.sync_dependencies(&session);
        screen.settle().await;
        screen.list_area = Rect::new(0, 5, 40, 10);

        let mouse = |kind, row| MouseEvent {
            kind,
            column: 3,
            row,
            modifiers: KeyModifiers::NONE,
        };

        // Second row spans terminal rows 7 and 8
        let down = screen.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 7));
        assert_eq!(down, ScreenAction::None);
        assert_eq!(screen.pressed, Some(1));

        let up = screen.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 8));
        assert_eq!(up, ScreenAction::Navigate("/reports/x".to_string()));
        assert_eq!(screen.pressed, None);
    }

    #[tokio::test]
    async fn test_mouse_release_elsewhere_cancels_press() {
        let (mut screen, _) = screen_with(TWO_ITEMS, Arc::default());
        let session = session();
        screen.sync_dependencies(&session);
        screen.settle().await;
        screen.list_area = Rect::new(0, 5, 40, 10);

        let mouse = |kind, row| MouseEvent {
            kind,
            column: 3,
            row,
            modifiers: KeyModifiers::NONE,
        };
        screen.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5));
        let up = screen.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 7));
        assert_eq!(up, ScreenAction::None);
        assert_eq!(screen.pressed, None);
    }
}
