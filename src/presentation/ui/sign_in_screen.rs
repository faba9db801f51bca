//! Sign-in screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tracing::debug;

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{AuthRoute, Icon};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Button, ButtonKind, IconSpec, TextInput};

const GOOGLE_RED: Color = Color::Rgb(0xDB, 0x44, 0x37);
const FACEBOOK_BLUE: Color = Color::Rgb(0x18, 0x77, 0xF2);

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 22;

/// Focusable affordances in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum SignInFocus {
    #[default]
    Email,
    Password,
    ForgotPassword,
    SignIn,
    Google,
    Facebook,
    SignUp,
}

impl SignInFocus {
    const ORDER: [Self; 7] = [
        Self::Email,
        Self::Password,
        Self::ForgotPassword,
        Self::SignIn,
        Self::Google,
        Self::Facebook,
        Self::SignUp,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    const fn is_text_field(self) -> bool {
        matches!(self, Self::Email | Self::Password)
    }
}

/// What the app should do after a sign-in screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInAction {
    /// Nothing to do.
    None,
    /// The form was submitted.
    Submit,
    /// Open another auth screen.
    Navigate(AuthRoute),
}

/// Email/password form with social and sign-up links.
pub struct SignInScreen {
    email_input: TextInput,
    password_input: TextInput,
    focus: SignInFocus,
    theme: Theme,
}

impl SignInScreen {
    /// Creates the form with focus on the email field.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let email_input = TextInput::new("Email ID")
            .placeholder("Enter your email here!")
            .accent(theme.accent);
        let password_input = TextInput::new("Password")
            .password()
            .placeholder("Enter your password here!")
            .accent(theme.accent);

        let mut screen = Self {
            email_input,
            password_input,
            focus: SignInFocus::default(),
            theme,
        };
        screen.sync_input_focus();
        screen
    }

    /// Currently focused affordance.
    #[must_use]
    pub const fn focus(&self) -> SignInFocus {
        self.focus
    }

    /// Typed email, never read by sign-in.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email_input.value()
    }

    /// Typed password, never read by sign-in.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password_input.value()
    }

    /// Whether printable keys should go to a text field.
    #[must_use]
    pub const fn captures_text(&self) -> bool {
        self.focus.is_text_field()
    }

    /// Forwards an editing key to the focused field.
    pub fn input(&mut self, key: &KeyEvent) -> bool {
        match self.focus {
            SignInFocus::Email => self.email_input.handle_key(key),
            SignInFocus::Password => self.password_input.handle_key(key),
            _ => false,
        }
    }

    /// Applies a resolved action to the focused affordance.
    pub fn handle_action(&mut self, action: Action) -> SignInAction {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::Activate => return self.activate(),
            _ => {}
        }
        SignInAction::None
    }

    fn activate(&mut self) -> SignInAction {
        match self.focus {
            SignInFocus::Email => {
                self.set_focus(SignInFocus::Password);
                SignInAction::None
            }
            // Enter in the password field submits like the button.
            SignInFocus::Password | SignInFocus::SignIn => SignInAction::Submit,
            SignInFocus::SignUp => SignInAction::Navigate(AuthRoute::SignUp),
            SignInFocus::ForgotPassword | SignInFocus::Google | SignInFocus::Facebook => {
                debug!(affordance = ?self.focus, "Inert sign-in affordance activated");
                SignInAction::None
            }
        }
    }

    fn set_focus(&mut self, focus: SignInFocus) {
        self.focus = focus;
        self.sync_input_focus();
    }

    fn sync_input_focus(&mut self) {
        self.email_input.set_focused(self.focus == SignInFocus::Email);
        self.password_input
            .set_focused(self.focus == SignInFocus::Password);
    }

    fn is_focused(&self, focus: SignInFocus) -> bool {
        self.focus == focus
    }

    fn link_style(&self, focus: SignInFocus) -> Style {
        if self.is_focused(focus) {
            self.theme.focus_style()
        } else {
            Style::default().fg(self.theme.accent)
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(FORM_WIDTH),
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

        let [
            title,
            _,
            email,
            password,
            forgot,
            _,
            sign_in,
            _,
            social_caption,
            social,
            _,
            sign_up,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Sign In")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(title, buf);

        (&self.email_input).render(email, buf);
        (&self.password_input).render(password, buf);

        Paragraph::new(Span::styled(
            "Forgot password?",
            self.link_style(SignInFocus::ForgotPassword),
        ))
        .alignment(Alignment::Right)
        .render(forgot, buf);

        Button::new("Sign In", ButtonKind::Filled(self.theme.accent))
            .focused(self.is_focused(SignInFocus::SignIn), Color::White)
            .render(sign_in, buf);

        Paragraph::new("Or sign in with")
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style)
            .render(social_caption, buf);

        let [google, _, facebook] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(social);
        Button::new("Google", ButtonKind::Outlined)
            .icon(IconSpec::new(Icon::Google, GOOGLE_RED))
            .focused(self.is_focused(SignInFocus::Google), self.theme.accent)
            .render(google, buf);
        Button::new("Facebook", ButtonKind::Outlined)
            .icon(IconSpec::new(Icon::Facebook, FACEBOOK_BLUE))
            .focused(self.is_focused(SignInFocus::Facebook), self.theme.accent)
            .render(facebook, buf);

        Paragraph::new(Line::from(vec![
            Span::raw("Not yet a member? "),
            Span::styled("Sign Up", self.link_style(SignInFocus::SignUp)),
        ]))
        .alignment(Alignment::Center)
        .render(sign_up, buf);
    }
}

impl Widget for &SignInScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

impl HasCommands for SignInScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let activate_label = match self.focus {
            SignInFocus::Email => "Next",
            SignInFocus::Password | SignInFocus::SignIn => "Sign In",
            SignInFocus::SignUp => "Sign Up",
            _ => "Select",
        };
        [
            registry.keybind(Action::FocusNext, "Next Field"),
            registry.keybind(Action::Activate, activate_label),
            registry.keybind(Action::Quit, "Quit"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
