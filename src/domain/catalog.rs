//! In-memory menu catalog shown on the explorer screen.

use std::collections::HashSet;

use super::entities::{Category, PopularItem};
use super::errors::CatalogError;

const PIZZA_IMAGE: &str =
    "https://th.bing.com/th/id/OIP.4xmaKtpHHA91m_-z_PtnyAHaE8?w=292&h=194&c=7&r=0&o=5&dpr=1.3&pid=1.7";
const BURGERS_IMAGE: &str =
    "https://th.bing.com/th/id/OIP.bL0ONY_KiaonyqkIE8myZgHaER?w=300&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7";
const STEAK_IMAGE: &str =
    "https://th.bing.com/th/id/OIP.n6ENeaYs6Oz_wdo8iZsJOwHaHa?rs=1&pid=ImgDetMain";

/// Which optional field the cards of a popular section display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularLabel {
    /// Grey category caption above the name.
    Category,
    /// Red discount badge, only for items that carry one.
    Discount,
}

/// A titled, horizontally scrolling list of promoted items.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularSection {
    title: &'static str,
    label: PopularLabel,
    items: Vec<PopularItem>,
}

impl PopularSection {
    /// Creates a section.
    #[must_use]
    pub const fn new(title: &'static str, label: PopularLabel, items: Vec<PopularItem>) -> Self {
        Self {
            title,
            label,
            items,
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Which optional field the cards show.
    #[must_use]
    pub const fn label(&self) -> PopularLabel {
        self.label
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[PopularItem] {
        &self.items
    }
}

/// Static catalog: top categories and two popular item sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    by_origin: PopularSection,
    deals: PopularSection,
}

impl Catalog {
    /// Creates a catalog from explicit lists.
    #[must_use]
    pub const fn new(
        categories: Vec<Category>,
        by_origin: PopularSection,
        deals: PopularSection,
    ) -> Self {
        Self {
            categories,
            by_origin,
            deals,
        }
    }

    /// The built-in menu.
    #[must_use]
    pub fn fixtures() -> Self {
        let categories = vec![
            Category::new("1", "Pizza", PIZZA_IMAGE),
            Category::new("2", "Burgers", BURGERS_IMAGE),
            Category::new("3", "Steak", STEAK_IMAGE),
        ];

        let by_origin = PopularSection::new(
            "Popular Items",
            PopularLabel::Category,
            vec![
                PopularItem::new("1", "Food 1", 15_u32, STEAK_IMAGE).with_category("By Viet Nam"),
                PopularItem::new("2", "Food 2", 35_u32, STEAK_IMAGE).with_category("For You"),
            ],
        );

        let deals = PopularSection::new(
            "Popular Items",
            PopularLabel::Discount,
            vec![
                PopularItem::new("3", "Food 3", 20_u32, STEAK_IMAGE).with_discount("10% OFF"),
                PopularItem::new("4", "Food 4", 25_u32, STEAK_IMAGE),
            ],
        );

        Self::new(categories, by_origin, deals)
    }

    /// Top categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Popular sections in display order.
    #[must_use]
    pub const fn popular_sections(&self) -> [&PopularSection; 2] {
        [&self.by_origin, &self.deals]
    }

    /// Checks that ids are unique within each list.
    ///
    /// # Errors
    /// Returns the first duplicate found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("categories", self.categories.iter().map(|c| c.id().as_str()))?;
        let sections = [
            ("popular items (by origin)", &self.by_origin),
            ("popular items (deals)", &self.deals),
        ];
        for (list, section) in sections {
            ensure_unique(list, section.items().iter().map(|i| i.id().as_str()))?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fixtures()
    }
}

fn ensure_unique<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
