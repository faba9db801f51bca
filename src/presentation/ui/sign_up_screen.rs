//! Placeholder sign-up screen reached from the sign-in link.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Button, ButtonKind};

/// What the app should do after a sign-up screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpAction {
    /// Nothing to do.
    None,
    /// Return to the previous screen.
    Back,
}

/// Registration placeholder.
pub struct SignUpScreen {
    theme: Theme,
}

impl SignUpScreen {
    /// Creates the placeholder.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The only affordance is the back button, so Enter and Esc both pop.
    #[must_use]
    pub const fn handle_action(&self, action: Action) -> SignUpAction {
        match action {
            Action::Activate | Action::Back => SignUpAction::Back,
            _ => SignUpAction::None,
        }
    }
}

impl Widget for &SignUpScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(40),
            Constraint::Fill(1),
        ])
        .areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title, body, _, back] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        Paragraph::new("Sign Up")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(title, buf);
        Paragraph::new("Registration is not available yet.")
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style)
            .render(body, buf);
        Button::new("Back", ButtonKind::Outlined)
            .focused(true, self.theme.accent)
            .render(back, buf);
    }
}

impl HasCommands for SignUpScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            registry.keybind(Action::Back, "Back"),
            registry.keybind(Action::Quit, "Quit"),
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
    fn test_back_actions() {
        let screen = SignUpScreen::new(Theme::default());
        assert_eq!(screen.handle_action(Action::Back), SignUpAction::Back);
        assert_eq!(screen.handle_action(Action::Activate), SignUpAction::Back);
        assert_eq!(screen.handle_action(Action::FocusNext), SignUpAction::None);
    }

    #[test]
    fn test_renders_back_button() {
        let screen = SignUpScreen::new(Theme::default());
        let text = buffer_text(&render_widget(&screen, 50, 12));
        assert!(text.contains("Sign Up"));
        assert!(text.contains("Back"));
    }
}
