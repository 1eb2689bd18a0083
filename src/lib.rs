//! grcview - browse governance, risk and compliance content in the terminal
//!
//! The library holds the content client, the screen controllers and the
//! application shell; `main.rs` only wires the CLI and logging.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod session;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use api::{ContentClient, ContentError, GrcItem};
pub use config::Config;
pub use session::{Session, User};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
