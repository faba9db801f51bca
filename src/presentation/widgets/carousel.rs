//! Horizontal, non-wrapping list of fixed-width cells.
//!
//! No scroll indicator is drawn; the viewport simply starts at the current
//! offset.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

const CELL_GAP: u16 = 2;

/// Scroll position of a carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    offset: usize,
}

impl CarouselState {
    /// Index of the first visible cell.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Moves the viewport one cell right, stopping at the last cell.
    pub fn scroll_right(&mut self, len: usize) {
        if self.offset + 1 < len {
            self.offset += 1;
        }
    }

    /// Moves the viewport one cell left, stopping at the first cell.
    pub fn scroll_left(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

/// Cells laid out left to right from the state's offset.
pub struct Carousel<W> {
    cells: Vec<W>,
    offset: usize,
    cell_width: u16,
}

impl<W: Widget> Carousel<W> {
    /// Carousel of `cells`, each `cell_width` wide.
    #[must_use]
    pub fn new(cells: Vec<W>, cell_width: u16) -> Self {
        Self {
            cells,
            offset: 0,
            cell_width,
        }
    }

    /// Sets the scroll position.
    #[must_use]
    pub const fn state(mut self, state: CarouselState) -> Self {
        self.offset = state.offset;
        self
    }

    /// Number of cells from the offset that fit in `width`; at least one
    /// when any cell remains, so a narrow viewport still shows the current
    /// cell clipped.
    #[must_use]
    pub fn visible_count(&self, width: u16) -> usize {
        let remaining = self.cells.len().saturating_sub(self.offset);
        if remaining == 0 {
            return 0;
        }
        let stride = usize::from(self.cell_width) + usize::from(CELL_GAP);
        let fit = (usize::from(width) + usize::from(CELL_GAP)) / stride.max(1);
        fit.clamp(1, remaining)
    }
}

impl<W: Widget> Widget for Carousel<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let count = self.visible_count(area.width);
        let mut x = area.x;
        for cell in self.cells.into_iter().skip(self.offset).take(count) {
            let width = self.cell_width.min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            cell.render(Rect::new(x, area.y, width, area.height), buf);
            x = x.saturating_add(self.cell_width + CELL_GAP);
        }
    }
}
