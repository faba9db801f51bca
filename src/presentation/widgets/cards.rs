//! Carousel cells for catalog entries.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::ImagePlaceholder;
use crate::domain::{Category, PopularItem, PopularLabel};
use crate::presentation::theme::Theme;

/// Category card width in cells.
pub const CATEGORY_CARD_WIDTH: u16 = 14;
/// Category card height: image plus name.
pub const CATEGORY_CARD_HEIGHT: u16 = 4;
/// Popular item card width in cells.
pub const POPULAR_CARD_WIDTH: u16 = 22;
/// Popular item card height: image plus up to three detail lines.
pub const POPULAR_CARD_HEIGHT: u16 = 6;

const IMAGE_HEIGHT: u16 = 3;

/// Image with the category name underneath.
pub struct CategoryCard<'a> {
    category: &'a Category,
    theme: &'a Theme,
    highlighted: bool,
}

impl<'a> CategoryCard<'a> {
    /// Card for `category`.
    #[must_use]
    pub const fn new(category: &'a Category, theme: &'a Theme) -> Self {
        Self {
            category,
            theme,
            highlighted: false,
        }
    }

    /// Draws the image border in the focus colour.
    #[must_use]
    pub const fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl Widget for CategoryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [image_area, name_area] =
            Layout::vertical([Constraint::Length(IMAGE_HEIGHT), Constraint::Length(1)])
                .areas(area);

        ImagePlaceholder::new(self.category.image())
            .border_style(self.theme.border_style(self.highlighted))
            .render(image_area, buf);

        Paragraph::new(self.category.name())
            .alignment(Alignment::Center)
            .render(name_area, buf);
    }
}

/// Image, optional label, name and price of a promoted item.
pub struct PopularCard<'a> {
    item: &'a PopularItem,
    label: PopularLabel,
    theme: &'a Theme,
    highlighted: bool,
}

impl<'a> PopularCard<'a> {
    /// Card for `item` showing the label picked by the section.
    #[must_use]
    pub const fn new(item: &'a PopularItem, label: PopularLabel, theme: &'a Theme) -> Self {
        Self {
            item,
            label,
            theme,
            highlighted: false,
        }
    }

    /// Draws the image border in the focus colour.
    #[must_use]
    pub const fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    fn detail_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(3);
        match self.label {
            PopularLabel::Category => {
                lines.push(Line::styled(
                    self.item.category().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            PopularLabel::Discount => {
                if let Some(badge) = self.item.discount_badge() {
                    lines.push(Line::styled(
                        badge,
                        Style::default()
                            .fg(self.theme.danger)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
            }
        }
        lines.push(Line::styled(
            self.item.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(self.item.price().to_string()));
        lines
    }
}

impl Widget for PopularCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [image_area, details_area] =
            Layout::vertical([Constraint::Length(IMAGE_HEIGHT), Constraint::Fill(1)]).areas(area);

        ImagePlaceholder::new(self.item.image())
            .border_style(self.theme.border_style(self.highlighted))
            .render(image_area, buf);

        Paragraph::new(self.detail_lines()).render(details_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::test_utils::{buffer_lines, buffer_text, render_widget};

    fn item() -> PopularItem {
        PopularItem::new("1", "Food 1", 15_u32, "https://th.bing.com/a")
    }

    #[test]
    fn test_category_card() {
        let theme = Theme::default();
        let category = Category::new("1", "Pizza", "https://th.bing.com/a");
        let buf = render_widget(CategoryCard::new(&category, &theme), 14, 4);
        assert_eq!(buffer_lines(&buf)[3].trim(), "Pizza");
    }

    #[test]
    fn test_category_label_and_price() {
        let theme = Theme::default();
        let item = item().with_category("By Viet Nam");
        let lines = buffer_lines(&render_widget(
            PopularCard::new(&item, PopularLabel::Category, &theme),
            22,
            6,
        ));
        assert_eq!(lines[3].trim(), "By Viet Nam");
        assert_eq!(lines[4].trim(), "Food 1");
        assert_eq!(lines[5].trim(), "$15");
    }

    #[test]
    fn test_discount_badge_only_when_present() {
        let theme = Theme::default();
        let with_badge = item().with_discount("10% OFF");
        let text = buffer_text(&render_widget(
            PopularCard::new(&with_badge, PopularLabel::Discount, &theme),
            22,
            6,
        ));
        assert!(text.contains("10% OFF"));

        let without = item();
        let lines = buffer_lines(&render_widget(
            PopularCard::new(&without, PopularLabel::Discount, &theme),
            22,
            6,
        ));
        assert_eq!(lines[3].trim(), "Food 1");
        assert_eq!(lines[4].trim(), "$15");
    }

    #[test]
    fn test_empty_discount_has_no_badge() {
        let theme = Theme::default();
        let item = item().with_discount("");
        let card = PopularCard::new(&item, PopularLabel::Discount, &theme);
        assert_eq!(card.detail_lines().len(), 2);
    }

    #[test]
    fn test_discount_section_ignores_category() {
        let theme = Theme::default();
        let item = item().with_category("For You");
        let text = buffer_text(&render_widget(
            PopularCard::new(&item, PopularLabel::Discount, &theme),
            22,
            6,
        ));
        assert!(!text.contains("For You"));
    }
}
