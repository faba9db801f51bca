//! Application configuration.

use super::args::CliArgs;
use crate::domain::TabRoute;
use crate::domain::errors::RouteError;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(super) const APP_NAME: &str = "foodshell";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "foodshell";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Custom keybindings, e.g. `"Ctrl+q" = "Quit"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tab shown first after signing in.
    #[serde(default = "default_initial_tab")]
    pub initial_tab: String,

    /// Height of the bottom tab bar in rows, padding included.
    #[serde(default = "default_tab_bar_height")]
    pub tab_bar_height: u16,

    /// Empty rows below the tab labels.
    #[serde(default = "default_tab_bar_padding")]
    pub tab_bar_padding: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_tab: default_initial_tab(),
            tab_bar_height: default_tab_bar_height(),
            tab_bar_padding: default_tab_bar_padding(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code), used for active tabs and primary buttons.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Color of inactive tabs.
    #[serde(default = "default_inactive_color")]
    pub inactive_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            inactive_color: default_inactive_color(),
        }
    }
}

fn default_initial_tab() -> String {
    TabRoute::default().name().to_string()
}

const fn default_tab_bar_height() -> u16 {
    3
}

const fn default_tab_bar_padding() -> u16 {
    1
}

fn default_accent_color() -> String {
    "Orange".to_string()
}

fn default_inactive_color() -> String {
    "Gray".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(initial_tab) = args.initial_tab {
            self.ui.initial_tab = initial_tab;
        }
    }

    /// Resolves the configured initial tab.
    ///
    /// # Errors
    /// Returns `RouteError` if the name matches no tab.
    pub fn initial_tab(&self) -> Result<TabRoute, RouteError> {
        self.ui.initial_tab.parse()
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("foodshell.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            initial_tab = "Account"

            [theme]
            accent_color = "#FFA500"

            [keybindings]
            "Ctrl+q" = "Quit"
            "Alt+Right" = "NextTab"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.initial_tab(), Ok(TabRoute::Account));
        assert_eq!(config.ui.tab_bar_height, 3);
        assert_eq!(config.theme.accent_color, "#FFA500");
        assert_eq!(config.theme.inactive_color, "Gray");
        assert_eq!(config.keybindings.len(), 2);
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
        assert_eq!(config.keybindings.get("Alt+Right"), Some(&Action::NextTab));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.keybindings.is_empty());
        assert_eq!(config.initial_tab(), Ok(TabRoute::Explorer));
        assert_eq!(config.ui.tab_bar_height, 3);
        assert_eq!(config.ui.tab_bar_padding, 1);
        assert_eq!(config.theme.accent_color, "Orange");
    }

    #[test]
    fn test_unknown_initial_tab_is_an_error() {
        let mut config = AppConfig::default();
        config.ui.initial_tab = "Orders".to_string();
        assert!(config.initial_tab().is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        config.merge_with_args(CliArgs {
            log_level: Some(LogLevel::Trace),
            accent_color: Some("Red".to_string()),
            initial_tab: Some("account".to_string()),
            ..CliArgs::default()
        });

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.theme.accent_color, "Red");
        assert_eq!(config.initial_tab(), Ok(TabRoute::Account));
        assert!(config.log_path.is_none());
    }
}
