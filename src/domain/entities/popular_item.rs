//! Promoted menu item entity.

use super::RemoteImage;

/// Identifier of a popular item, unique within its own list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub String);

impl ItemId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Item price.
///
/// Displays as `$` followed by the plain number, without currency or locale
/// formatting: `15` renders as `$15`, `15.5` as `$15.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price in dollars.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Amount in dollars.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A promoted item shown in one of the "Popular Items" sections.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularItem {
    id: ItemId,
    name: String,
    price: Price,
    category: Option<String>,
    discount: Option<String>,
    image: RemoteImage,
}

impl PopularItem {
    /// Creates an item with neither category nor discount label.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: impl Into<Price>,
        image: impl Into<RemoteImage>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            category: None,
            discount: None,
            image: image.into(),
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the discount label.
    #[must_use]
    pub fn with_discount(mut self, discount: impl Into<String>) -> Self {
        self.discount = Some(discount.into());
        self
    }

    /// Unique within its section.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Category label, such as "By Viet Nam".
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Raw discount label, possibly empty.
    #[must_use]
    pub fn discount(&self) -> Option<&str> {
        self.discount.as_deref()
    }

    /// Returns the discount label when it is present and non-empty.
    #[must_use]
    pub fn discount_badge(&self) -> Option<&str> {
        self.discount().filter(|d| !d.is_empty())
    }

    /// Item picture.
    #[must_use]
    pub const fn image(&self) -> &RemoteImage {
        &self.image
    }
}
