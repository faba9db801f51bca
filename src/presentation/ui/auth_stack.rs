//! Linear navigation stack of the signed-out flow.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::debug;

use super::sign_in_screen::{SignInAction, SignInScreen};
use super::sign_up_screen::{SignUpAction, SignUpScreen};
use crate::domain::AuthRoute;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::FocusContext;

enum AuthScreen {
    SignIn(SignInScreen),
    SignUp(SignUpScreen),
}

impl AuthScreen {
    fn new(route: AuthRoute, theme: Theme) -> Self {
        match route {
            AuthRoute::SignIn => Self::SignIn(SignInScreen::new(theme)),
            AuthRoute::SignUp => Self::SignUp(SignUpScreen::new(theme)),
        }
    }

    const fn route(&self) -> AuthRoute {
        match self {
            Self::SignIn(_) => AuthRoute::SignIn,
            Self::SignUp(_) => AuthRoute::SignUp,
        }
    }
}

/// What the app should do after an auth stack action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Nothing to do.
    None,
    /// The sign-in form was submitted.
    SignIn,
    /// Back was pressed on the root screen.
    Exit,
}

/// Push/pop stack of the signed-out screens.
pub struct AuthStack {
    screens: Vec<AuthScreen>,
    theme: Theme,
}

impl AuthStack {
    /// A stack holding only the sign-in screen.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            screens: vec![AuthScreen::new(AuthRoute::SignIn, theme)],
            theme,
        }
    }

    /// Route of the top screen.
    #[must_use]
    pub fn current(&self) -> AuthRoute {
        self.screens
            .last()
            .map_or(AuthRoute::SignIn, AuthScreen::route)
    }

    /// Routes from bottom to top.
    #[must_use]
    pub fn routes(&self) -> Vec<AuthRoute> {
        self.screens.iter().map(AuthScreen::route).collect()
    }

    /// Pushes `route`, or pops back to it when already on the stack.
    pub fn navigate(&mut self, route: AuthRoute) {
        if let Some(index) = self.screens.iter().position(|s| s.route() == route) {
            self.screens.truncate(index + 1);
        } else {
            self.screens.push(AuthScreen::new(route, self.theme));
        }
        debug!(route = route.name(), depth = self.screens.len(), "Auth stack navigated");
    }

    /// Pops the top screen; the root is never popped.
    pub fn pop(&mut self) -> bool {
        if self.screens.len() > 1 {
            self.screens.pop();
            debug!(route = self.current().name(), "Auth stack popped");
            true
        } else {
            false
        }
    }

    /// Whether the top screen has a focused text field.
    #[must_use]
    pub fn captures_text(&self) -> bool {
        matches!(self.screens.last(), Some(AuthScreen::SignIn(s)) if s.captures_text())
    }

    /// Forwards an editing key to the top screen.
    pub fn input(&mut self, key: &KeyEvent) -> bool {
        match self.screens.last_mut() {
            Some(AuthScreen::SignIn(screen)) => screen.input(key),
            _ => false,
        }
    }

    /// Applies an action to the top screen and handles its navigation.
    pub fn handle_action(&mut self, action: Action) -> AuthAction {
        if action == Action::Back {
            return if self.pop() {
                AuthAction::None
            } else {
                AuthAction::Exit
            };
        }

        match self.screens.last_mut() {
            Some(AuthScreen::SignIn(screen)) => match screen.handle_action(action) {
                SignInAction::Submit => AuthAction::SignIn,
                SignInAction::Navigate(route) => {
                    self.navigate(route);
                    AuthAction::None
                }
                SignInAction::None => AuthAction::None,
            },
            Some(AuthScreen::SignUp(screen)) => match screen.handle_action(action) {
                SignUpAction::Back => {
                    self.pop();
                    AuthAction::None
                }
                SignUpAction::None => AuthAction::None,
            },
            None => AuthAction::None,
        }
    }

    /// Footer context of the top screen.
    #[must_use]
    pub fn focus_context(&self) -> FocusContext {
        match self.current() {
            AuthRoute::SignIn => FocusContext::SignIn,
            AuthRoute::SignUp => FocusContext::SignUp,
        }
    }
}

impl Widget for &AuthStack {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screens.last() {
            Some(AuthScreen::SignIn(screen)) => screen.render(area, buf),
            Some(AuthScreen::SignUp(screen)) => screen.render(area, buf),
            None => {}
        }
    }
}

impl HasCommands for AuthStack {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        match self.screens.last() {
            Some(AuthScreen::SignIn(screen)) => screen.get_commands(registry),
            Some(AuthScreen::SignUp(screen)) => screen.get_commands(registry),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_text, render_widget};

    #[test]
    fn test_starts_at_sign_in() {
        let stack = AuthStack::new(Theme::default());
        assert_eq!(stack.routes(), vec![AuthRoute::SignIn]);
        assert!(stack.captures_text());
    }

    #[test]
    fn test_navigate_and_pop() {
        let mut stack = AuthStack::new(Theme::default());
        stack.navigate(AuthRoute::SignUp);
        assert_eq!(stack.current(), AuthRoute::SignUp);
        assert!(!stack.captures_text());

        assert_eq!(stack.handle_action(Action::Back), AuthAction::None);
        assert_eq!(stack.routes(), vec![AuthRoute::SignIn]);
    }

    #[test]
    fn test_navigate_to_existing_route_pops_to_it() {
        let mut stack = AuthStack::new(Theme::default());
        stack.navigate(AuthRoute::SignUp);
        stack.navigate(AuthRoute::SignIn);
        assert_eq!(stack.routes(), vec![AuthRoute::SignIn]);
    }

    #[test]
    fn test_back_at_root_exits() {
        let mut stack = AuthStack::new(Theme::default());
        assert!(!stack.pop());
        assert_eq!(stack.handle_action(Action::Back), AuthAction::Exit);
    }

    #[test]
    fn test_sign_up_link_then_back_button() {
        let mut stack = AuthStack::new(Theme::default());
        // Focus wraps from the email field to the sign-up link.
        stack.handle_action(Action::FocusPrevious);
        assert_eq!(stack.handle_action(Action::Activate), AuthAction::None);
        assert_eq!(stack.current(), AuthRoute::SignUp);
        let text = buffer_text(&render_widget(&stack, 60, 20));
        assert!(text.contains("Back"));

        assert_eq!(stack.handle_action(Action::Activate), AuthAction::None);
        assert_eq!(stack.current(), AuthRoute::SignIn);
    }

    #[test]
    fn test_submit_maps_to_sign_in() {
        let mut stack = AuthStack::new(Theme::default());
        stack.handle_action(Action::FocusNext);
        assert_eq!(stack.handle_action(Action::Activate), AuthAction::SignIn);
    }
}
