//! Helpers for rendering widgets into an off-screen buffer in tests.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub fn render_widget<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn buffer_text(buf: &Buffer) -> String {
    buffer_lines(buf).join("\n")
}
