//! Catalog fixture errors.

use thiserror::Error;

/// Raised when the static catalog breaks a list invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("duplicate id {id:?} in {list}")]
    DuplicateId { list: &'static str, id: String },
}
