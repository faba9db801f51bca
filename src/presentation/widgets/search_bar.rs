//! Decorative search bar of the explorer screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{IconSpec, TextInput};
use crate::domain::Icon;
use crate::presentation::theme::Theme;

/// Rows taken by the search bar, borders included.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Location marker, free-text field, search and filter icons.
pub struct SearchBar<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Bar around the explorer's search `input`.
    #[must_use]
    pub const fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(self.input.is_focused()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [marker, field, search, filter] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .areas(inner);

        let icon = |icon: Icon, color: Color| {
            Paragraph::new(Line::from(IconSpec::new(icon, color).span()))
        };
        icon(Icon::MapMarker, Color::Reset).render(marker, buf);
        self.input.render(field, buf);
        icon(Icon::Search, Color::Reset).render(search, buf);
        icon(Icon::Sliders, self.theme.accent).render(filter, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, render_widget};

    #[test]
    fn test_layout() {
        let theme = Theme::default();
        let input = TextInput::new("Search")
            .placeholder("Search for meals or area")
            .borderless();
        let lines = buffer_lines(&render_widget(SearchBar::new(&input, &theme), 40, 3));
        let row = &lines[1];
        assert!(row.contains("⌖"));
        assert!(row.contains("Search for meals or area"));
        let search = row.find('⌕').unwrap();
        let filter = row.find('≡').unwrap();
        assert!(search < filter);
    }
}
