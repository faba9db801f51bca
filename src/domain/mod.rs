//! Domain layer with core entities, routes and port definitions.

/// Static menu catalog.
pub mod catalog;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Symbolic icon names.
pub mod icon;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Navigation routes.
pub mod route;
/// Session flag.
pub mod session;

pub use catalog::{Catalog, PopularLabel, PopularSection};
pub use entities::{Category, PopularItem, Price, RemoteImage, UserProfile};
pub use errors::{CatalogError, KeybindingError, RouteError};
pub use icon::Icon;
pub use ports::SessionPort;
pub use route::{AuthRoute, TabRoute};
pub use session::SessionState;
