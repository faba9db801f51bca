//! Push button widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::IconSpec;

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Solid background in the given colour.
    Filled(Color),
    /// Bordered, transparent background.
    Outlined,
}

/// Bordered push button with an optional leading icon.
pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    icon: Option<IconSpec>,
    focused: bool,
    focus_color: Color,
}

impl<'a> Button<'a> {
    /// Unfocused button.
    #[must_use]
    pub const fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            icon: None,
            focused: false,
            focus_color: Color::White,
        }
    }

    /// Adds an icon before the label.
    #[must_use]
    pub const fn icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Marks the button focused, drawing the border in `color`.
    #[must_use]
    pub const fn focused(mut self, focused: bool, color: Color) -> Self {
        self.focused = focused;
        self.focus_color = color;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (fill, text_style) = match self.kind {
            ButtonKind::Filled(color) => (
                Style::default().bg(color),
                Style::default()
                    .bg(color)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonKind::Outlined => (Style::default(), Style::default()),
        };

        let border_style = if self.focused {
            Style::default()
                .fg(self.focus_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(fill);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::with_capacity(2);
        if let Some(icon) = self.icon {
            spans.push(icon.span());
            spans.push(Span::styled(" ", text_style));
        }
        let label_style = if self.focused {
            text_style.add_modifier(Modifier::UNDERLINED)
        } else {
            text_style
        };
        spans.push(Span::styled(self.label, label_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(fill)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Icon;
    use crate::presentation::test_utils::{buffer_lines, render_widget};

    #[test]
    fn test_label_centered() {
        let button = Button::new("Sign In", ButtonKind::Filled(Color::Indexed(208)));
        let lines = buffer_lines(&render_widget(button, 21, 3));
        assert_eq!(lines[1].trim_matches(['│', '╭', '╮', ' ']), "Sign In");
    }

    #[test]
    fn test_icon_before_label() {
        let button = Button::new("Google", ButtonKind::Outlined)
            .icon(IconSpec::new(Icon::Google, Color::Red));
        let lines = buffer_lines(&render_widget(button, 20, 3));
        assert!(lines[1].contains("G Google"));
    }
}
