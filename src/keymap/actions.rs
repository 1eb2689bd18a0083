//! Semantic actions triggered by key bindings.

use serde::{Deserialize, Serialize};

/// User actions available in the content browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,

    /// Activate the selected row (Enter)
    Confirm,
    /// Go back to the previous route (Esc)
    Cancel,

    /// Re-run the content fetch
    Refresh,
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open selected item",
            Action::Cancel => "Go back",
            Action::Refresh => "Reload content",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Refresh => "Actions",

            Action::Quit | Action::Help => "Global",
        }
    }
}
