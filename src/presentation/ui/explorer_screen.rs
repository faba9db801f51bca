//! Explorer tab: search bar and three horizontally scrolling lists.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::domain::Catalog;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CATEGORY_CARD_HEIGHT, CATEGORY_CARD_WIDTH, Carousel, CarouselState, CategoryCard,
    POPULAR_CARD_HEIGHT, POPULAR_CARD_WIDTH, PopularCard, SEARCH_BAR_HEIGHT, SearchBar,
    TextInput,
};

const SECTION_SPACING: u16 = 1;
const SECTION_HEADER_HEIGHT: u16 = 1;
const VIEW_ALL: &str = "View all";

/// Focusable sections, top to bottom.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerFocus {
    #[default]
    Search,
    Categories,
    ByOrigin,
    Deals,
}

impl ExplorerFocus {
    const ORDER: [Self; 4] = [Self::Search, Self::Categories, Self::ByOrigin, Self::Deals];

    const fn index(self) -> usize {
        match self {
            Self::Search => 0,
            Self::Categories => 1,
            Self::ByOrigin => 2,
            Self::Deals => 3,
        }
    }

    const fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    const fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Index into the carousel states, `None` for the search field.
    const fn carousel(self) -> Option<usize> {
        match self {
            Self::Search => None,
            Self::Categories => Some(0),
            Self::ByOrigin => Some(1),
            Self::Deals => Some(2),
        }
    }

    const fn height(self) -> u16 {
        match self {
            Self::Search => SEARCH_BAR_HEIGHT,
            Self::Categories => SECTION_SPACING + SECTION_HEADER_HEIGHT + CATEGORY_CARD_HEIGHT,
            Self::ByOrigin | Self::Deals => {
                SECTION_SPACING + SECTION_HEADER_HEIGHT + POPULAR_CARD_HEIGHT
            }
        }
    }
}

/// Search bar above the category and popular item carousels.
pub struct ExplorerScreen {
    catalog: Arc<Catalog>,
    search_input: TextInput,
    focus: ExplorerFocus,
    carousels: [CarouselState; 3],
    theme: Theme,
}

impl ExplorerScreen {
    /// Creates the screen with the search field focused.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, theme: Theme) -> Self {
        let mut search_input = TextInput::new("Search")
            .placeholder("Search for meals or area")
            .borderless()
            .accent(theme.accent);
        search_input.set_focused(true);

        Self {
            catalog,
            search_input,
            focus: ExplorerFocus::default(),
            carousels: [CarouselState::default(); 3],
            theme,
        }
    }

    /// Currently focused section.
    #[must_use]
    pub const fn focus(&self) -> ExplorerFocus {
        self.focus
    }

    /// Text typed into the search field.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search_input.value()
    }

    /// Scroll offset of the carousel behind `focus`, if it is one.
    #[must_use]
    pub fn carousel_offset(&self, focus: ExplorerFocus) -> Option<usize> {
        focus.carousel().map(|i| self.carousels[i].offset())
    }

    /// Whether printable keys go to the search field.
    #[must_use]
    pub const fn captures_text(&self) -> bool {
        matches!(self.focus, ExplorerFocus::Search)
    }

    /// The query is kept in the field and never searched.
    pub fn input(&mut self, key: &KeyEvent) -> bool {
        self.captures_text() && self.search_input.handle_key(key)
    }

    /// Moves focus or scrolls the focused carousel; activation is inert.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::ScrollLeft => {
                if let Some(i) = self.focus.carousel() {
                    self.carousels[i].scroll_left();
                }
            }
            Action::ScrollRight => {
                if let Some(i) = self.focus.carousel() {
                    let len = self.list_len(self.focus);
                    self.carousels[i].scroll_right(len);
                }
            }
            Action::Activate => {
                // Cards and "View all" links have no destination.
                debug!(section = ?self.focus, "Inert explorer affordance activated");
            }
            _ => {}
        }
    }

    fn set_focus(&mut self, focus: ExplorerFocus) {
        self.focus = focus;
        self.search_input.set_focused(focus == ExplorerFocus::Search);
    }

    fn list_len(&self, focus: ExplorerFocus) -> usize {
        let [by_origin, deals] = self.catalog.popular_sections();
        match focus {
            ExplorerFocus::Search => 0,
            ExplorerFocus::Categories => self.catalog.categories().len(),
            ExplorerFocus::ByOrigin => by_origin.items().len(),
            ExplorerFocus::Deals => deals.items().len(),
        }
    }

    /// First section to draw so the focused one fits below it.
    fn first_visible(&self, height: u16) -> usize {
        let focus = self.focus.index();
        let mut start = 0;
        while start < focus {
            let needed: u16 = ExplorerFocus::ORDER[start..=focus]
                .iter()
                .map(|s| s.height())
                .sum();
            if needed <= height {
                break;
            }
            start += 1;
        }
        start
    }

    fn render_section_header(&self, title: &str, view_all: bool, area: Rect, buf: &mut Buffer) {
        let [title_area, link_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(if view_all { 8 } else { 0 }),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);
        if view_all {
            Paragraph::new(Span::styled(VIEW_ALL, Style::default().fg(self.theme.accent)))
                .render(link_area, buf);
        }
    }

    fn render_section(&self, section: ExplorerFocus, area: Rect, buf: &mut Buffer) {
        if section == ExplorerFocus::Search {
            SearchBar::new(&self.search_input, &self.theme).render(area, buf);
            return;
        }

        let [_, header, body] = Layout::vertical([
            Constraint::Length(SECTION_SPACING),
            Constraint::Length(SECTION_HEADER_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        let focused = self.focus == section;
        let state = section
            .carousel()
            .map(|i| self.carousels[i])
            .unwrap_or_default();
        let highlighted = |index: usize| focused && index == state.offset();

        if section == ExplorerFocus::Categories {
            self.render_section_header("Top Categories", false, header, buf);
            let cards = self
                .catalog
                .categories()
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    CategoryCard::new(category, &self.theme).highlighted(highlighted(i))
                })
                .collect();
            Carousel::new(cards, CATEGORY_CARD_WIDTH)
                .state(state)
                .render(body, buf);
            return;
        }

        let [by_origin, deals] = self.catalog.popular_sections();
        let popular = if section == ExplorerFocus::ByOrigin {
            by_origin
        } else {
            deals
        };
        self.render_section_header(popular.title(), true, header, buf);
        let cards = popular
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                PopularCard::new(item, popular.label(), &self.theme).highlighted(highlighted(i))
            })
            .collect();
        Carousel::new(cards, POPULAR_CARD_WIDTH)
            .state(state)
            .render(body, buf);
    }
}

impl Widget for &ExplorerScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let start = self.first_visible(area.height);
        let mut remaining = area;

        for section in &ExplorerFocus::ORDER[start..] {
            if remaining.height == 0 {
                break;
            }
            let height = section.height().min(remaining.height);
            let [section_area, rest] =
                Layout::vertical([Constraint::Length(height), Constraint::Fill(1)])
                    .areas(remaining);
            self.render_section(*section, section_area, buf);
            remaining = rest;
        }
    }
}

impl HasCommands for ExplorerScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = vec![registry.keybind(Action::FocusNext, "Next Section")];
        if self.focus.carousel().is_some() {
            commands.push(registry.keybind(Action::ScrollLeft, "Scroll"));
            commands.push(registry.keybind(Action::ScrollRight, "Scroll"));
        }
        commands.push(registry.keybind(Action::NextTab, "Next Tab"));
        commands.into_iter().flatten().collect()
    }
}
