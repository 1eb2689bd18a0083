use crate::api::ContentClient;
use crate::cli::Settings;
use crate::components::help_overlay::HelpOverlay;
use crate::config::Config;
use crate::navigation::{DocumentOpener, Route, Router, SystemOpener};
use crate::screens::{
    GrcContentScreen, RenderContext, RoutePageScreen, Screen, ScreenAction, ScreenContext,
};
use crate::session::Session;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    session: Session,
    client: ContentClient,
    opener: Arc<dyn DocumentOpener>,
    runtime: Runtime,
    router: Router<Box<dyn Screen>>,
    show_help: bool,
    should_quit: bool,
    /// Advanced once per loop iteration; drives the loading spinner
    tick: u64,
}

impl App {
    pub fn new(settings: Settings, title: Option<String>) -> Result<Self> {
        let client = ContentClient::from_config(&settings.config)?;
        Self::with_parts(settings, title, client, Arc::new(SystemOpener))
    }

    /// Build an app around an explicit client and opener
    pub fn with_parts(
        settings: Settings,
        title: Option<String>,
        client: ContentClient,
        opener: Arc<dyn DocumentOpener>,
    ) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let root = GrcContentScreen::new(
            title.unwrap_or_default(),
            client.clone(),
            Arc::clone(&opener),
            runtime.handle().clone(),
        );

        let mut app = Self {
            config: settings.config,
            config_path: settings.config_path,
            session: settings.session,
            client,
            opener,
            runtime,
            router: Router::new(Box::new(root)),
            show_help: false,
            should_quit: false,
            tick: 0,
        };
        app.enter_current()?;
        Ok(app)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let result = self.event_loop(&mut tui);
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.poll_background();
            self.draw(tui)?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
            self.tick = self.tick.wrapping_add(1);
        }
        Ok(())
    }

    /// Let the visible screen apply finished background work
    pub fn poll_background(&mut self) {
        if let Some(screen) = self.router.current_mut() {
            screen.poll_background();
        }
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let Self {
            config,
            config_path,
            session,
            router,
            show_help,
            tick,
            ..
        } = self;

        let mut render_result = Ok(());
        tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            if let Some(screen) = router.current_mut() {
                let ctx = RenderContext::new(config, session, *tick);
                render_result = screen.render(frame, area, &ctx);
            }
            if *show_help && render_result.is_ok() {
                render_result = HelpOverlay::render(
                    frame,
                    area,
                    &config.keymap,
                    &config_path.display().to_string(),
                );
            }
        })?;
        render_result
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    self.show_help = false;
                }
            }
            return Ok(());
        }

        let action = match self.router.current_mut() {
            Some(screen) => {
                let ctx = ScreenContext::new(&self.config, &self.session);
                screen.handle_event(event, &ctx)?
            }
            None => ScreenAction::Quit,
        };
        self.apply_action(action)
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Back => self.back()?,
            ScreenAction::Navigate(path) => self.navigate(&path)?,
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Pop the visible screen. Leaving the root screen quits.
    fn back(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.session);
        if let Some(mut screen) = self.router.back() {
            debug!("Leaving screen {}", screen.name());
            screen.on_exit(&ctx)?;
        }
        if self.router.is_empty() {
            self.should_quit = true;
            return Ok(());
        }
        self.enter_current()
    }

    /// Push the screen for an internal path
    fn navigate(&mut self, path: &str) -> Result<()> {
        let screen: Box<dyn Screen> = match Route::from_path(path) {
            Route::GrcContent { title } => Box::new(GrcContentScreen::new(
                title,
                self.client.clone(),
                Arc::clone(&self.opener),
                self.runtime.handle().clone(),
            )),
            Route::Page { path } => Box::new(RoutePageScreen::new(path)),
        };
        info!("Navigating to {} ({})", path, screen.name());

        if let Some(current) = self.router.current_mut() {
            let ctx = ScreenContext::new(&self.config, &self.session);
            current.on_exit(&ctx)?;
        }
        self.router.push(screen);
        self.enter_current()
    }

    fn enter_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.session);
        if let Some(screen) = self.router.current_mut() {
            if let Err(e) = screen.on_enter(&ctx) {
                error!("Failed to enter screen {}: {:#}", screen.name(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.router.depth()
    }

    pub fn current_screen_name(&self) -> Option<String> {
        self.router.current().map(|s| s.name())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}
