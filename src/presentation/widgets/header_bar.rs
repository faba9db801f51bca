use crate::domain::SessionState;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Styles of the header bar segments.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub signed_in: Style,
    pub signed_out: Style,
}

impl HeaderBarStyle {
    /// Styles derived from the theme accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            signed_in: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            signed_out: Style::default()
                .bg(theme.inactive)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            signed_in: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            signed_out: Style::default().fg(Color::Gray),
        }
    }
}

/// Top bar: app name and version on the left, current screen in the
/// middle, session indicator on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: Option<&'a str>,
    session: SessionState,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Header with app name and version, no title, signed out.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: None,
            session: SessionState::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets the screen title shown in the middle.
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the session shown on the right.
    #[must_use]
    pub const fn session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    /// Overrides the default style.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn session_style(&self) -> Style {
        if self.session.is_logged_in() {
            self.style.signed_in
        } else {
            self.style.signed_out
        }
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let app_label = format!(" {} ", self.app_name.to_uppercase());
        let version_label = format!(" v{} ", self.version);
        let left_width = (app_label.chars().count() + 1 + version_label.chars().count()) as u16;
        let left_line = Line::from(vec![
            Span::styled(app_label, self.style.app_name),
            Span::raw(" "),
            Span::styled(version_label, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let status = format!(
            " {} {} ",
            self.session.indicator(),
            self.session.display_text()
        );
        let status_width = status.chars().count() as u16;

        if let Some(title) = self.title {
            let title_width = title.chars().count() as u16;
            let title_x = area.x + area.width.saturating_sub(title_width) / 2;
            if title_x >= area.x + left_width
                && title_x + title_width + status_width <= area.right()
            {
                let title_area = Rect::new(title_x, area.y, title_width, 1);
                Paragraph::new(Span::styled(title, self.style.title)).render(title_area, buf);
            }
        }

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Span::styled(status, self.session_style())).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, render_widget};

    #[test]
    fn test_header_bar_creation() {
        let header = HeaderBar::new("foodshell", "0.1.0").title("Explorer");

        assert_eq!(header.app_name, "foodshell");
        assert_eq!(header.version, "0.1.0");
        assert_eq!(header.title, Some("Explorer"));
    }

    #[test]
    fn test_renders_session_indicator() {
        let mut session = SessionState::signed_out();
        let line = &buffer_lines(&render_widget(
            HeaderBar::new("foodshell", "0.1.0").session(session),
            60,
            1,
        ))[0];
        assert!(line.starts_with(" FOODSHELL "));
        assert!(line.trim_end().ends_with("○ SIGNED OUT"));

        session.set_logged_in(true);
        let line = &buffer_lines(&render_widget(
            HeaderBar::new("foodshell", "0.1.0")
                .title("Account")
                .session(session),
            60,
            1,
        ))[0];
        assert!(line.contains("Account"));
        assert!(line.trim_end().ends_with("● SIGNED IN"));
    }
}
