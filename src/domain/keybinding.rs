use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Commands a key can be bound to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Back,

    // Focus
    FocusNext,
    FocusPrevious,
    Activate,

    // Carousels
    ScrollLeft,
    ScrollRight,

    // Tabs
    NextTab,
    PreviousTab,
    ShowExplorer,
    ShowAccount,
}

/// A key, its action and the footer label.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    /// Creates a binding.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
