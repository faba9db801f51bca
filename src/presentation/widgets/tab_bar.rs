//! Bottom tab bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::IconSpec;
use crate::domain::TabRoute;
use crate::presentation::theme::Theme;

/// Fixed tint and dimensions of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarStyle {
    /// Tint of the active tab.
    pub active: Color,
    /// Tint of the other tabs.
    pub inactive: Color,
    /// Total height in rows, top border and padding included.
    pub height: u16,
    /// Empty rows below the labels.
    pub padding_bottom: u16,
}

impl TabBarStyle {
    /// Style using the theme's accent and inactive colours.
    #[must_use]
    pub const fn from_theme(theme: &Theme, height: u16, padding_bottom: u16) -> Self {
        Self {
            active: theme.accent,
            inactive: theme.inactive,
            height,
            padding_bottom,
        }
    }

    /// Tint for a tab in the given state.
    #[must_use]
    pub const fn tint(&self, active: bool) -> Color {
        if active { self.active } else { self.inactive }
    }
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default(), 3, 1)
    }
}

/// Row of tab icons and labels.
pub struct TabBar<'a> {
    tabs: &'a [TabRoute],
    active: TabRoute,
    style: TabBarStyle,
}

impl<'a> TabBar<'a> {
    /// Bar over `tabs` with `active` highlighted.
    #[must_use]
    pub fn new(tabs: &'a [TabRoute], active: TabRoute) -> Self {
        Self {
            tabs,
            active,
            style: TabBarStyle::default(),
        }
    }

    /// Overrides the default style.
    #[must_use]
    pub const fn style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.tabs.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let label_rows = inner.height.saturating_sub(self.style.padding_bottom).max(1);
        let [labels, _padding] =
            Layout::vertical([Constraint::Length(label_rows), Constraint::Fill(1)]).areas(inner);

        let columns =
            Layout::horizontal(self.tabs.iter().map(|_| Constraint::Fill(1))).split(labels);

        for (tab, column) in self.tabs.iter().zip(columns.iter()) {
            let is_active = *tab == self.active;
            let tint = self.style.tint(is_active);
            let mut label_style = Style::default().fg(tint);
            if is_active {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }

            let line = Line::from(vec![
                IconSpec::new(tab.icon(), tint).span(),
                Span::raw(" "),
                Span::styled(tab.name(), label_style),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, render_widget};

    #[test]
    fn test_renders_both_tabs_in_order() {
        let bar = TabBar::new(&TabRoute::ALL, TabRoute::Explorer);
        let lines = buffer_lines(&render_widget(bar, 40, 3));
        let row = &lines[1];
        let explorer = row.find("Explorer").unwrap();
        let account = row.find("Account").unwrap();
        assert!(explorer < account);
        assert!(row.contains('◈'));
        assert!(row.contains('☺'));
        assert!(lines[2].trim().is_empty());
    }

    #[test]
    fn test_active_tab_uses_active_tint() {
        let style = TabBarStyle::default();
        let bar = TabBar::new(&TabRoute::ALL, TabRoute::Account).style(style);
        let buf = render_widget(bar, 40, 3);
        let row = &buffer_lines(&buf)[1];

        let account_x = u16::try_from(row.chars().position(|c| c == '☺').unwrap()).unwrap();
        let explorer_x = u16::try_from(row.chars().position(|c| c == '◈').unwrap()).unwrap();
        assert_eq!(buf[(account_x, 1)].fg, style.active);
        assert_eq!(buf[(explorer_x, 1)].fg, style.inactive);
    }
}
