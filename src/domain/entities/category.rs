//! Food category entity.

use super::RemoteImage;

/// Identifier of a category, unique within the categories list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A browsable food category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    image: RemoteImage,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        image: impl Into<RemoteImage>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }

    /// Unique within the category list.
    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category picture.
    #[must_use]
    pub const fn image(&self) -> &RemoteImage {
        &self.image
    }
}
