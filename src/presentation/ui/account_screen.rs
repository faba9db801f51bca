//! Account tab.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::UserProfile;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Button, ButtonKind};

/// What the app should do after an account screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    /// Nothing to do.
    None,
    /// Clear the session.
    SignOut,
}

/// Profile summary with a single sign-out button.
pub struct AccountScreen {
    profile: UserProfile,
    theme: Theme,
}

impl AccountScreen {
    /// Creates the screen for `profile`.
    #[must_use]
    pub const fn new(profile: UserProfile, theme: Theme) -> Self {
        Self { profile, theme }
    }

    /// The sign-out button is always focused, so activation signs out.
    #[must_use]
    pub const fn handle_action(&self, action: Action) -> AccountAction {
        match action {
            Action::Activate => AccountAction::SignOut,
            _ => AccountAction::None,
        }
    }
}

impl Widget for &AccountScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(false))
            .title(Span::styled(
                " Account ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let [details, _, button_row, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let label = Style::default().fg(self.theme.inactive);
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" Name: ", label),
                Span::raw(self.profile.name()),
            ]),
            Line::from(vec![
                Span::styled(" Email: ", label),
                Span::raw(self.profile.email()),
            ]),
        ];
        Paragraph::new(lines).render(details, buf);

        let [_, button, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(button_row);
        Button::new("Sign Out", ButtonKind::Filled(self.theme.danger))
            .focused(true, self.theme.danger)
            .render(button, buf);
    }
}

impl HasCommands for AccountScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            registry.keybind(Action::Activate, "Sign Out"),
            registry.keybind(Action::PreviousTab, "Prev Tab"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_text, render_widget};

    #[test]
    fn test_renders_profile() {
        let screen = AccountScreen::new(UserProfile::demo(), Theme::default());
        let text = buffer_text(&render_widget(&screen, 50, 12));

        assert!(text.contains("Account"));
        assert!(text.contains("Name: John Doe"));
        assert!(text.contains("Email: johndoe@example.com"));
        assert!(text.contains("Sign Out"));
    }

    #[test]
    fn test_sign_out_button_is_red() {
        let screen = AccountScreen::new(UserProfile::demo(), Theme::default());
        let buf = render_widget(&screen, 50, 12);
        // Button occupies rows 5..8 starting at column 2 inside the border.
        assert_eq!(buf[(5, 6)].bg, ratatui::style::Color::Red);
    }

    #[test]
    fn test_activation_signs_out() {
        let screen = AccountScreen::new(UserProfile::demo(), Theme::default());
        assert_eq!(screen.handle_action(Action::Activate), AccountAction::SignOut);
        assert_eq!(screen.handle_action(Action::FocusNext), AccountAction::None);
        assert_eq!(screen.handle_action(Action::Back), AccountAction::None);
    }
}
