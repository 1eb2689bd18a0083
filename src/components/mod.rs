// Reusable widgets shared by the screens

pub mod footer;
pub mod grc_row;
pub mod header;
pub mod help_overlay;

pub use grc_row::GrcRow;
// Footer and Header are used directly via their module paths
