use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use foodshell::domain::{Catalog, UserProfile};
use foodshell::infrastructure::{
    AppConfig, CliArgs, ConfigSource, InMemorySession, StorageManager,
};
use foodshell::presentation::commands::CommandRegistry;
use foodshell::presentation::theme::Theme;
use foodshell::presentation::widgets::TabBarStyle;
use foodshell::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to the TUI, so logs only ever go to a file.
    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigSource)> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let (mut config, source) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, source))
}

fn create_app() -> Result<App> {
    let (config, source) = load_config()?;
    init_logging(&config)?;
    source.log();

    info!(version = foodshell::VERSION, "Starting Foodshell");

    let initial_tab = config.initial_tab()?;
    let catalog = Catalog::fixtures();
    catalog.validate()?;
    let commands = CommandRegistry::with_overrides(&config.keybindings)?;

    let theme = Theme::new(&config.theme.accent_color, &config.theme.inactive_color);
    let tab_bar = TabBarStyle::from_theme(
        &theme,
        config.ui.tab_bar_height,
        config.ui.tab_bar_padding,
    );

    let session = Arc::new(InMemorySession::new());
    let options = AppOptions {
        theme,
        initial_tab,
        tab_bar,
        commands,
    };

    Ok(App::new(
        session,
        Arc::new(catalog),
        UserProfile::demo(),
        options,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
