//! Signed-in flow: the active tab's screen above the tab bar.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tracing::debug;

use super::account_screen::{AccountAction, AccountScreen};
use super::explorer_screen::ExplorerScreen;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Catalog, TabRoute, UserProfile};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FocusContext, TabBar, TabBarStyle};

/// What the app should do after a tab screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    /// Nothing to do.
    None,
    /// Clear the session.
    SignOut,
}

/// Active tab's screen above the bottom tab bar.
pub struct TabScreen {
    active: TabRoute,
    explorer: ExplorerScreen,
    account: AccountScreen,
    bar_style: TabBarStyle,
}

impl TabScreen {
    /// Creates both tab screens with `initial` active.
    #[must_use]
    pub fn new(
        initial: TabRoute,
        catalog: Arc<Catalog>,
        profile: UserProfile,
        theme: Theme,
        bar_style: TabBarStyle,
    ) -> Self {
        Self {
            active: initial,
            explorer: ExplorerScreen::new(catalog, theme),
            account: AccountScreen::new(profile, theme),
            bar_style,
        }
    }

    /// Active tab.
    #[must_use]
    pub const fn active(&self) -> TabRoute {
        self.active
    }

    /// Tabs in display order.
    #[must_use]
    pub const fn tabs(&self) -> &'static [TabRoute] {
        &TabRoute::ALL
    }

    /// The explorer tab's screen.
    #[must_use]
    pub const fn explorer(&self) -> &ExplorerScreen {
        &self.explorer
    }

    /// Makes `route` the active tab.
    pub fn select(&mut self, route: TabRoute) {
        if self.active != route {
            debug!(from = self.active.name(), to = route.name(), "Tab selected");
            self.active = route;
        }
    }

    /// Whether printable keys go to a text field of the active tab.
    #[must_use]
    pub const fn captures_text(&self) -> bool {
        match self.active {
            TabRoute::Explorer => self.explorer.captures_text(),
            TabRoute::Account => false,
        }
    }

    /// Forwards an editing key to the active tab.
    pub fn input(&mut self, key: &KeyEvent) -> bool {
        match self.active {
            TabRoute::Explorer => self.explorer.input(key),
            TabRoute::Account => false,
        }
    }

    /// Switches tabs or delegates the action to the active tab.
    pub fn handle_action(&mut self, action: Action) -> TabAction {
        match action {
            Action::NextTab => self.select(self.active.next()),
            Action::PreviousTab => self.select(self.active.previous()),
            Action::ShowExplorer => self.select(TabRoute::Explorer),
            Action::ShowAccount => self.select(TabRoute::Account),
            _ => {
                return match self.active {
                    TabRoute::Explorer => {
                        self.explorer.handle_action(action);
                        TabAction::None
                    }
                    TabRoute::Account => match self.account.handle_action(action) {
                        AccountAction::SignOut => TabAction::SignOut,
                        AccountAction::None => TabAction::None,
                    },
                };
            }
        }
        TabAction::None
    }

    /// Footer context of the active tab.
    #[must_use]
    pub const fn focus_context(&self) -> FocusContext {
        match self.active {
            TabRoute::Explorer => FocusContext::Explorer,
            TabRoute::Account => FocusContext::Account,
        }
    }
}

impl Widget for &TabScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, bar] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(self.bar_style.height),
        ])
        .areas(area);

        match self.active {
            TabRoute::Explorer => self.explorer.render(body, buf),
            TabRoute::Account => self.account.render(body, buf),
        }

        TabBar::new(self.tabs(), self.active)
            .style(self.bar_style)
            .render(bar, buf);
    }
}

impl HasCommands for TabScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        match self.active {
            TabRoute::Explorer => self.explorer.get_commands(registry),
            TabRoute::Account => self.account.get_commands(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, buffer_text, render_widget};
    use crossterm::event::{KeyCode, KeyModifiers};
    use test_case::test_case;

    fn screen(initial: TabRoute) -> TabScreen {
        TabScreen::new(
            initial,
            Arc::new(Catalog::fixtures()),
            UserProfile::demo(),
            Theme::default(),
            TabBarStyle::default(),
        )
    }

    #[test]
    fn test_default_tab_is_explorer() {
        let screen = screen(TabRoute::default());
        assert_eq!(screen.active(), TabRoute::Explorer);
        assert_eq!(screen.tabs(), &[TabRoute::Explorer, TabRoute::Account]);
    }

    #[test_case(TabRoute::Explorer, Action::NextTab, TabRoute::Account ; "next")]
    #[test_case(TabRoute::Account, Action::NextTab, TabRoute::Explorer ; "next_wraps")]
    #[test_case(TabRoute::Explorer, Action::PreviousTab, TabRoute::Account ; "previous_wraps")]
    #[test_case(TabRoute::Explorer, Action::ShowAccount, TabRoute::Account ; "show_account")]
    #[test_case(TabRoute::Account, Action::ShowExplorer, TabRoute::Explorer ; "show_explorer")]
    #[test_case(TabRoute::Account, Action::ShowAccount, TabRoute::Account ; "reselect")]
    fn test_tab_switching(initial: TabRoute, action: Action, expected: TabRoute) {
        let mut screen = screen(initial);
        assert_eq!(screen.handle_action(action), TabAction::None);
        assert_eq!(screen.active(), expected);
    }

    #[test]
    fn test_account_activation_signs_out() {
        let mut screen = screen(TabRoute::Account);
        assert_eq!(screen.handle_action(Action::Activate), TabAction::SignOut);
    }

    #[test]
    fn test_explorer_activation_is_inert() {
        let mut screen = screen(TabRoute::Explorer);
        assert_eq!(screen.handle_action(Action::Activate), TabAction::None);
        assert_eq!(screen.active(), TabRoute::Explorer);
    }

    #[test]
    fn test_text_capture_follows_active_tab() {
        let mut screen = screen(TabRoute::Explorer);
        assert!(screen.captures_text());
        assert!(screen.input(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(screen.explorer().search_query(), "a");

        screen.select(TabRoute::Account);
        assert!(!screen.captures_text());
        assert!(!screen.input(&KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_tab_bar_at_bottom() {
        let screen = screen(TabRoute::Account);
        let buf = render_widget(&screen, 80, 30);
        let lines = buffer_lines(&buf);

        // Top border, labels, then one row of padding.
        let label_row = &lines[28];
        let explorer = label_row.find("Explorer").unwrap();
        let account = label_row.find("Account").unwrap();
        assert!(explorer < account);
        assert!(lines[29].trim().is_empty());
        assert!(buffer_text(&buf).contains("Name: John Doe"));
    }
}
