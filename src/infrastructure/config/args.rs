use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "foodshell",
    version,
    about = "A terminal food-ordering app shell",
    long_about = None
)]
/// Command-line flags; each one overrides the config file.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "FOODSHELL_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "FOODSHELL_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Tab shown first after signing in (Explorer or Account).
    #[arg(long, value_name = "NAME")]
    pub initial_tab: Option<String>,
}
