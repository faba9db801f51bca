//! Domain entity definitions.

mod category;
mod image;
mod popular_item;
mod profile;

pub use category::{Category, CategoryId};
pub use image::RemoteImage;
pub use popular_item::{ItemId, PopularItem, Price};
pub use profile::UserProfile;
