//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tracing::{debug, info};

use super::auth_stack::{AuthAction, AuthStack};
use super::tab_screen::{TabAction, TabScreen};
use crate::application::use_cases::{SignInUseCase, SignOutUseCase};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::SessionPort;
use crate::domain::{AuthRoute, Catalog, SessionState, TabRoute, UserProfile};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TabBarStyle, TextInput,
};
use crate::{NAME, VERSION};

/// Presentation settings resolved from configuration.
pub struct AppOptions {
    /// Colours shared by every screen.
    pub theme: Theme,
    /// Tab shown each time the signed-in flow is mounted.
    pub initial_tab: TabRoute,
    /// Tint and dimensions of the bottom tab bar.
    pub tab_bar: TabBarStyle,
    /// Key bindings, defaults merged with configured overrides.
    pub commands: CommandRegistry,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            initial_tab: TabRoute::default(),
            tab_bar: TabBarStyle::default(),
            commands: CommandRegistry::default(),
        }
    }
}

/// The mounted top-level flow, chosen by the session flag alone.
enum RootFlow {
    SignedOut(Box<AuthStack>),
    SignedIn(Box<TabScreen>),
}

/// Root of the UI: owns the mounted flow and the session port.
pub struct App {
    flow: RootFlow,
    session: Arc<dyn SessionPort>,
    sign_in_use_case: SignInUseCase,
    sign_out_use_case: SignOutUseCase,
    catalog: Arc<Catalog>,
    profile: UserProfile,
    commands: CommandRegistry,
    theme: Theme,
    initial_tab: TabRoute,
    tab_bar: TabBarStyle,
    running: bool,
}

impl App {
    /// Creates the app and mounts the flow matching the session flag.
    #[must_use]
    pub fn new(
        session: Arc<dyn SessionPort>,
        catalog: Arc<Catalog>,
        profile: UserProfile,
        options: AppOptions,
    ) -> Self {
        let AppOptions {
            theme,
            initial_tab,
            tab_bar,
            commands,
        } = options;

        let mut app = Self {
            flow: RootFlow::SignedOut(Box::new(AuthStack::new(theme))),
            sign_in_use_case: SignInUseCase::new(session.clone()),
            sign_out_use_case: SignOutUseCase::new(session.clone()),
            session,
            catalog,
            profile,
            commands,
            theme,
            initial_tab,
            tab_bar,
            running: true,
        };
        app.sync_flow();
        app
    }

    /// Whether the signed-in flow is mounted.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self.flow, RootFlow::SignedIn(_))
    }

    /// Active tab, or `None` while signed out.
    #[must_use]
    pub fn active_tab(&self) -> Option<TabRoute> {
        match &self.flow {
            RootFlow::SignedIn(tabs) => Some(tabs.active()),
            RootFlow::SignedOut(_) => None,
        }
    }

    /// Top of the auth stack, or `None` while signed in.
    #[must_use]
    pub fn auth_route(&self) -> Option<AuthRoute> {
        match &self.flow {
            RootFlow::SignedOut(stack) => Some(stack.current()),
            RootFlow::SignedIn(_) => None,
        }
    }

    /// Runs the event loop until a quit action.
    ///
    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        info!(signed_in = self.is_signed_in(), "Event loop started");

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let Some(event) = terminal_events.next().await else {
                debug!("Terminal event stream closed");
                break;
            };
            if self.handle_terminal_event(event?) == EventResult::Exit {
                self.running = false;
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    /// Routes one key press, then remounts the flow if the session flag
    /// changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit(&key) {
            info!("Quit requested");
            return EventResult::Exit;
        }

        let result = if self.captures_text() && TextInput::is_editing_key(&key) {
            self.input(&key);
            EventResult::Consumed
        } else if let Some(action) = self.commands.find_action(key) {
            self.dispatch(action)
        } else {
            EventResult::Continue
        };

        self.sync_flow();
        result
    }

    fn captures_text(&self) -> bool {
        match &self.flow {
            RootFlow::SignedOut(stack) => stack.captures_text(),
            RootFlow::SignedIn(tabs) => tabs.captures_text(),
        }
    }

    fn input(&mut self, key: &KeyEvent) -> bool {
        match &mut self.flow {
            RootFlow::SignedOut(stack) => stack.input(key),
            RootFlow::SignedIn(tabs) => tabs.input(key),
        }
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        if action == Action::Quit {
            info!("Quit requested");
            return EventResult::Exit;
        }

        match &mut self.flow {
            RootFlow::SignedOut(stack) => match stack.handle_action(action) {
                AuthAction::SignIn => self.sign_in_use_case.execute(),
                AuthAction::Exit => return EventResult::Exit,
                AuthAction::None => {}
            },
            RootFlow::SignedIn(tabs) => {
                if tabs.handle_action(action) == TabAction::SignOut {
                    self.sign_out_use_case.execute();
                }
            }
        }
        EventResult::Consumed
    }

    /// Mounts a fresh flow whenever the session flag disagrees with the
    /// mounted one.
    fn sync_flow(&mut self) {
        let signed_in = self.session.is_logged_in();
        if signed_in == self.is_signed_in() {
            return;
        }

        self.flow = if signed_in {
            info!(tab = self.initial_tab.name(), "Mounting signed-in flow");
            RootFlow::SignedIn(Box::new(TabScreen::new(
                self.initial_tab,
                self.catalog.clone(),
                self.profile.clone(),
                self.theme,
                self.tab_bar,
            )))
        } else {
            info!("Mounting signed-out flow");
            RootFlow::SignedOut(Box::new(AuthStack::new(self.theme)))
        };
    }

    fn title(&self) -> &'static str {
        match &self.flow {
            RootFlow::SignedOut(stack) => match stack.current() {
                AuthRoute::SignIn => "Sign In",
                AuthRoute::SignUp => "Sign Up",
            },
            RootFlow::SignedIn(tabs) => tabs.active().name(),
        }
    }

    fn focus_context(&self) -> FocusContext {
        match &self.flow {
            RootFlow::SignedOut(stack) => stack.focus_context(),
            RootFlow::SignedIn(tabs) => tabs.focus_context(),
        }
    }

    fn footer_commands(&self) -> Vec<Keybind> {
        let mut commands = match &self.flow {
            RootFlow::SignedOut(stack) => stack.get_commands(&self.commands),
            RootFlow::SignedIn(tabs) => tabs.get_commands(&self.commands),
        };
        if self.is_signed_in()
            && let Some(quit) = self.commands.keybind(Action::Quit, "Quit")
        {
            commands.push(quit);
        }
        commands
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(NAME, VERSION)
            .title(self.title())
            .session(SessionState::from(self.session.is_logged_in()))
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header, buf);

        match &self.flow {
            RootFlow::SignedOut(stack) => stack.as_ref().render(body, buf),
            RootFlow::SignedIn(tabs) => tabs.as_ref().render(body, buf),
        }

        let commands = self.footer_commands();
        FooterBar::new(&commands)
            .focus_context(self.focus_context())
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemorySession;
    use crate::presentation::test_utils::{buffer_lines, buffer_text, render_widget};
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App, Arc<InMemorySession>) {
        let session = Arc::new(InMemorySession::new());
        let app = App::new(
            session.clone(),
            Arc::new(Catalog::fixtures()),
            UserProfile::demo(),
            AppOptions::default(),
        );
        (app, session)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code));
        }
    }

    fn screen_text(app: &App) -> String {
        buffer_text(&render_widget(app, 80, 36))
    }

    /// Tab to the "Sign In" button and press Enter.
    fn submit_sign_in(app: &mut App) {
        press(app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
    }

    #[test]
    fn test_launch_is_signed_out() {
        let (app, session) = app();
        assert!(!session.is_logged_in());
        assert!(!app.is_signed_in());
        assert_eq!(app.auth_route(), Some(AuthRoute::SignIn));

        let text = screen_text(&app);
        assert!(text.contains("Sign In"));
        assert!(!text.contains("Explorer"));
    }

    #[test]
    fn test_end_to_end_sign_in_and_out() {
        let (mut app, session) = app();

        submit_sign_in(&mut app);
        assert!(session.is_logged_in());
        assert!(app.is_signed_in());
        assert_eq!(app.active_tab(), Some(TabRoute::Explorer));
        assert!(screen_text(&app).contains("Top Categories"));

        // The search field has focus, so ']' is typed instead of switching.
        assert_eq!(
            app.handle_key(key(KeyCode::Char(']'))),
            EventResult::Consumed
        );
        assert_eq!(app.active_tab(), Some(TabRoute::Explorer));

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('2')]);
        assert_eq!(app.active_tab(), Some(TabRoute::Account));
        let text = screen_text(&app);
        assert!(text.contains("John Doe"));
        assert!(text.contains("johndoe@example.com"));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Consumed);
        assert!(!session.is_logged_in());
        assert!(!app.is_signed_in());
        assert!(screen_text(&app).contains("Sign In"));
    }

    #[test]
    fn test_typed_credentials_are_ignored() {
        let (mut app, session) = app();
        press(
            &mut app,
            &[KeyCode::Char('a'), KeyCode::Tab, KeyCode::Char('b'), KeyCode::Enter],
        );
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_sign_in_is_idempotent() {
        let (mut app, session) = app();
        session.set_logged_in(true);
        app.sync_flow();
        assert!(app.is_signed_in());

        app.sign_in_use_case.execute();
        app.sync_flow();
        assert!(app.is_signed_in());
        assert_eq!(app.active_tab(), Some(TabRoute::Explorer));
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let (mut app, session) = app();
        app.sign_out_use_case.execute();
        app.sync_flow();
        assert!(!session.is_logged_in());
        assert_eq!(app.auth_route(), Some(AuthRoute::SignIn));
    }

    #[test]
    fn test_remount_resets_flows() {
        let (mut app, _session) = app();
        submit_sign_in(&mut app);
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('2'), KeyCode::Enter]);
        assert_eq!(app.auth_route(), Some(AuthRoute::SignIn));

        submit_sign_in(&mut app);
        assert_eq!(app.active_tab(), Some(TabRoute::Explorer));
    }

    #[test]
    fn test_inert_affordances_leave_session_untouched() {
        let (mut app, session) = app();
        // Forgot password, then Google and Facebook.
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert!(!session.is_logged_in());
        assert_eq!(app.auth_route(), Some(AuthRoute::SignIn));
    }

    #[test]
    fn test_sign_up_and_back() {
        let (mut app, session) = app();
        press(&mut app, &[KeyCode::BackTab, KeyCode::Enter]);
        assert_eq!(app.auth_route(), Some(AuthRoute::SignUp));
        assert!(screen_text(&app).contains("Back"));

        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Consumed);
        assert_eq!(app.auth_route(), Some(AuthRoute::SignIn));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_tabs_render_in_fixed_order() {
        let (mut app, _session) = app();
        submit_sign_in(&mut app);

        let lines = buffer_lines(&render_widget(&app, 80, 36));
        let tab_row = lines
            .iter()
            .find(|line| line.contains('◈'))
            .expect("tab bar row");
        let explorer = tab_row.find("Explorer").expect("explorer tab");
        let account = tab_row.find("Account").expect("account tab");
        assert!(explorer < account);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _session) = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);

        // Esc on the sign-in root leaves the app.
        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Exit);

        // 'q' is typed while a field has focus.
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Consumed);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
    }

    #[test]
    fn test_key_release_ignored() {
        let (mut app, session) = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(app.handle_key(release), EventResult::Continue);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_header_reflects_session() {
        let (mut app, _session) = app();
        assert!(screen_text(&app).contains("SIGNED OUT"));
        submit_sign_in(&mut app);
        assert!(screen_text(&app).contains("SIGNED IN"));
    }
}
