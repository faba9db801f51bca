mod button;
mod cards;
mod carousel;
mod footer_bar;
mod header_bar;
mod icon;
mod image_placeholder;
mod input;
mod search_bar;
mod tab_bar;

pub use button::{Button, ButtonKind};
pub use cards::{
    CATEGORY_CARD_HEIGHT, CATEGORY_CARD_WIDTH, CategoryCard, POPULAR_CARD_HEIGHT,
    POPULAR_CARD_WIDTH, PopularCard,
};
pub use carousel::{Carousel, CarouselState};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use icon::IconSpec;
pub use image_placeholder::ImagePlaceholder;
pub use input::TextInput;
pub use search_bar::{SEARCH_BAR_HEIGHT, SearchBar};
pub use tab_bar::{TabBar, TabBarStyle};
