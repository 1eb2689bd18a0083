pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod text;

// Export utilities that are used
pub use layout::{center_popup, create_standard_layout};
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text::to_camel_case;
