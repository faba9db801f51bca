//! Foodshell - a terminal food-ordering app shell.
//!
//! Sign-in gate, explorer and account tabs, switched by a single
//! in-memory session flag.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases.
pub mod application;
/// Domain layer containing entities, routes, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and session adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "foodshell";
