//! Screen controllers for the application.
//!
//! Each screen owns its state and handles both rendering and events. The
//! app keeps visible screens on a [`Router`](crate::navigation::Router)
//! stack and forwards events to the top one.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │  Router<Box<dyn Screen>>                    │
//! │   ├─ GrcContentScreen("esg")                │
//! │   └─ RoutePageScreen("/reports/x")  ◄ top   │
//! │                                             │
//! │  Screen trait                               │
//! │   - render(frame, area, ctx)                │
//! │   - handle_event(event, ctx) -> Action      │
//! │   - on_enter / on_exit / poll_background    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod grc_content;
pub mod route_page;
pub mod screen_trait;

pub use grc_content::GrcContentScreen;
pub use route_page::RoutePageScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
