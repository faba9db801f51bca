//! Remote image slot.
//!
//! Terminal cells cannot show the remote picture, so the slot always shows
//! the collaborator's placeholder state: a framed picture glyph captioned
//! with the image host.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{Icon, RemoteImage};

/// Framed placeholder standing in for a remote image.
pub struct ImagePlaceholder<'a> {
    image: &'a RemoteImage,
    border_style: Style,
}

impl<'a> ImagePlaceholder<'a> {
    /// Placeholder for `image`.
    #[must_use]
    pub fn new(image: &'a RemoteImage) -> Self {
        Self {
            image,
            border_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Sets the frame style.
    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for ImagePlaceholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let host_width = usize::from(inner.width).saturating_sub(2);
        let caption = Line::from(vec![
            Span::raw(format!("{} ", Icon::Picture.glyph())),
            Span::styled(
                fit_to_width(self.image.host(), host_width),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Shortens `text` to `width` columns, ending in an ellipsis when cut.
/// Nothing is shown when even one character and the ellipsis do not fit.
fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width < 2 {
        return String::new();
    }

    let mut used = 0;
    let mut fitted: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used < width
        })
        .collect();
    fitted.push('…');
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, render_widget};

    #[test]
    fn test_placeholder_shows_host() {
        let image = RemoteImage::new("https://th.bing.com/th/id/abc");
        let lines = buffer_lines(&render_widget(ImagePlaceholder::new(&image), 20, 3));
        assert!(lines[1].contains("▣"));
        assert!(lines[1].contains("th.bing.com"));
    }

    #[test]
    fn test_long_host_is_truncated_with_ellipsis() {
        let image = RemoteImage::new("https://th.bing.com/th/id/abc");
        // Category cards are 14 columns wide: 12 inside the border.
        let lines = buffer_lines(&render_widget(ImagePlaceholder::new(&image), 14, 3));
        let caption = lines[1].trim_matches(['│', ' ']);
        assert_eq!(caption, "▣ th.bing.c…");
    }

    #[test]
    fn test_host_dropped_when_nothing_fits() {
        let image = RemoteImage::new("https://th.bing.com/");
        let lines = buffer_lines(&render_widget(ImagePlaceholder::new(&image), 5, 3));
        assert_eq!(lines[1].trim_matches(['│', ' ']), "▣");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("cdn.local", 9), "cdn.local");
        assert_eq!(fit_to_width("cdn.local", 4), "cdn…");
        assert_eq!(fit_to_width("cdn.local", 1), "");
    }
}
