//! Icon rendering.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::domain::Icon;

/// An icon to draw: symbolic name, size in cells and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Symbolic icon.
    pub icon: Icon,
    /// Width in cells.
    pub size: u16,
    /// Foreground colour.
    pub color: Color,
}

impl IconSpec {
    /// One-cell icon in `color`.
    #[must_use]
    pub const fn new(icon: Icon, color: Color) -> Self {
        Self {
            icon,
            size: 1,
            color,
        }
    }

    /// Sets the width in cells.
    #[must_use]
    pub const fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    /// Glyph padded to `size` cells.
    #[must_use]
    pub fn span(self) -> Span<'static> {
        let pad = usize::from(self.size.saturating_sub(1));
        let text = format!("{}{}", self.icon.glyph(), " ".repeat(pad));
        Span::styled(text, Style::default().fg(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_pads_to_size() {
        let span = IconSpec::new(Icon::Compass, Color::Gray).size(3).span();
        assert_eq!(span.content, "◈  ");
        assert_eq!(span.style.fg, Some(Color::Gray));
    }
}
