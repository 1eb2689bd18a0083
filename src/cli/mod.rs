//! Command-line interface for grcview.
//!
//! Without a subcommand the TUI opens on the content list for `TITLE`
//! (or `default_title` from the config).

pub mod completions;
pub mod fetch;

use crate::config::Config;
use crate::session::{Session, User};
use crate::styles::ThemeType;
use crate::utils::get_config_path;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Browse governance, risk and compliance content from the terminal
#[derive(Parser, Debug)]
#[command(name = "grcview", version, about = "Browse governance, risk and compliance content from the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Content title to open (e.g. "ESG", "data protection")
    pub title: Option<String>,

    /// User id sent with content requests (overrides the config)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Country shown in the header (overrides the config)
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Base URL of the content API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Color theme: dark, light or nocolor
    #[arg(long, global = true)]
    pub theme: Option<ThemeType>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Use a different config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the items for a title and print them as JSON
    Fetch {
        /// Content title
        title: String,
    },
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

/// Config and session after command-line overrides are applied
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub config_path: PathBuf,
    pub session: Session,
}

impl Cli {
    /// Load the config file and fold the flags into it
    pub fn load_settings(&self) -> Result<Settings> {
        let config_path = self.config.clone().unwrap_or_else(get_config_path);
        let config = Config::load_or_create(&config_path)?;
        Ok(self.apply_overrides(config, config_path))
    }

    /// Apply flags on top of a loaded config. Flags win over file values.
    pub fn apply_overrides(&self, mut config: Config, config_path: PathBuf) -> Settings {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.no_colors || std::env::var_os("NO_COLOR").is_some() {
            config.theme = ThemeType::NoColor;
        }

        let mut user = config.user.clone();
        if let Some(id) = &self.user_id {
            let country = user
                .as_ref()
                .map(|u| u.profile.country.clone())
                .unwrap_or_default();
            user = Some(User::new(id.clone(), country));
        }
        if let (Some(country), Some(user)) = (&self.country, user.as_mut()) {
            user.profile.country = country.clone();
        }

        Settings {
            session: Session::new(user),
            config,
            config_path,
        }
    }

    /// Title for the root screen: the positional arg, then `default_title`
    pub fn initial_title(&self, config: &Config) -> Option<String> {
        self.title
            .clone()
            .or_else(|| config.default_title.clone())
            .filter(|t| !t.trim().is_empty())
    }
}
