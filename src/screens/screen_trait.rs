//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and answer events with a
//! [`ScreenAction`] instead of mutating the app directly. Contexts give them
//! read-only access to the shared config and session.

use crate::config::Config;
use crate::session::Session;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub session: &'a Session,
    /// UI tick counter, advanced once per event-loop iteration (drives spinners).
    pub tick: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, session: &'a Session, tick: u64) -> Self {
        Self {
            config,
            session,
            tick,
        }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub session: &'a Session,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, session: &'a Session) -> Self {
        Self { config, session }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Pop the current screen.
    Back,
    /// Push the internal path (always starts with `/`).
    Navigate(String),
    /// Open the help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::Back)
///     }
/// }
/// ```
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Called when the screen becomes visible (pushed, or revealed by a pop).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen stops being visible.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Apply results of background work. Called once per event-loop tick.
    fn poll_background(&mut self) {}

    /// Short name used in logs.
    fn name(&self) -> String;
}
