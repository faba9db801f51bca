//! Presentation layer with UI components and event handling.

/// Keybinding registry.
pub mod commands;
/// Event handling.
pub mod events;
/// Colour theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use ui::{App, AppOptions};
