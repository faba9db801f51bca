//! Domain error types.

mod catalog_error;
mod keybinding_error;
mod route_error;

pub use catalog_error::CatalogError;
pub use keybinding_error::KeybindingError;
pub use route_error::RouteError;
