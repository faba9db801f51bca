//! Infrastructure layer with adapters for configuration and session state.

/// Application configuration.
pub mod config;
/// In-memory session adapter.
pub mod session;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigSource, LogLevel, StorageManager};
pub use session::InMemorySession;
