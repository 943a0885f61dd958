//! UiFrame: a thin wrapper around a ratatui `Buffer` that clamps drawing to a
//! visible area.
//!
//! Every draw path in the compositor goes through this type. Windows and their
//! hosted content compute rectangles that may drift past the right or bottom
//! edge of the terminal (a window dragged half off-screen, a manager wider than
//! the terminal); `UiFrame` clips those writes instead of letting the buffer
//! panic. It is also the surface a window hands to its content: the content
//! receives a sub-frame clipped to the window's inner rectangle, so it cannot
//! paint over the window frame or neighbouring windows.
//!
//! Surface capability
//! - `size()` reports the visible area.
//! - `content(x, y)` reads back the symbol and style at a cell.
//! - `set_content(x, y, symbol, style)` writes a single cell.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrapper around a ratatui buffer that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    ///
    /// The area is intersected with the buffer's own area.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        let area = area.intersection(buffer.area);
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    /// Borrow a sub-frame whose drawing is confined to `rect`.
    pub fn clipped(&mut self, rect: Rect) -> UiFrame<'_> {
        let area = rect.intersection(self.area);
        UiFrame {
            area,
            buffer: &mut *self.buffer,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && y >= self.area.y
            && x < self.area.x.saturating_add(self.area.width)
            && y < self.area.y.saturating_add(self.area.height)
    }

    pub fn content(&self, x: u16, y: u16) -> Option<(&str, Style)> {
        if !self.contains(x, y) {
            return None;
        }
        self.buffer
            .cell((x, y))
            .map(|cell| (cell.symbol(), cell.style()))
    }

    pub fn set_content(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if !self.contains(x, y) {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Write `text` starting at `(x, y)`, truncated at the right edge.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }

    /// Paint every cell of `rect` (clipped) with a blank symbol in `style`.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let rect = rect.intersection(self.area);
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

/// Longest prefix of `value` that occupies at most `width` terminal cells.
///
/// A wide character that would straddle the limit is dropped whole.
pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let mut used = 0;
    let mut out = String::new();
    for ch in value.chars() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > width {
            break;
        }
        used += cells;
        out.push(ch);
    }
    out
}

/// Terminal cells occupied by `value`.
pub(crate) fn display_width(value: &str) -> u16 {
    u16::try_from(value.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::{Color, Style};

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn truncate_to_width_counts_wide_characters_as_two_cells() {
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        // a wide char never straddles the limit
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("a日", 2), "a");
        assert_eq!(display_width("a日本"), 5);
    }

    #[test]
    fn safe_set_string_writes_within_bounds() {
        let bounds = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "h");

        // outside bounds should be ignored (no panic)
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
    }

    #[test]
    fn set_and_read_content_round_trip_inside_area() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let style = Style::default().fg(Color::Red);
        frame.set_content(2, 1, "x", style);
        let (symbol, read_style) = frame.content(2, 1).expect("cell inside area");
        assert_eq!(symbol, "x");
        assert_eq!(read_style.fg, Some(Color::Red));
        assert!(frame.content(9, 9).is_none());
    }

    #[test]
    fn clipped_subframe_refuses_writes_outside_its_rect() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        {
            let mut inner = frame.clipped(Rect::new(1, 1, 2, 2));
            assert_eq!(inner.size(), (2, 2));
            inner.set_content(0, 0, "#", Style::default());
            inner.set_content(1, 1, "#", Style::default());
            inner.set_string(1, 2, "abc", Style::default());
        }
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((1, 1)).unwrap().symbol(), "#");
        assert_eq!(buf.cell((1, 2)).unwrap().symbol(), "a");
        assert_eq!(buf.cell((2, 2)).unwrap().symbol(), "b");
        assert_eq!(buf.cell((3, 2)).unwrap().symbol(), " ");
    }

    #[test]
    fn from_parts_clamps_area_to_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        let frame = UiFrame::from_parts(Rect::new(1, 1, 10, 10), &mut buf);
        assert_eq!(frame.area(), Rect::new(1, 1, 2, 2));
    }

    #[test]
    fn render_widget_clips_to_frame_area() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);

        struct FillWidget;
        impl Widget for FillWidget {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.y.saturating_add(area.height) {
                    for x in area.x..area.x.saturating_add(area.width) {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("A");
                        }
                    }
                }
            }
        }

        // Request an area that partially lies outside the right edge.
        ui.render_widget(FillWidget, Rect::new(3, 1, 5, 2));

        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), "A");
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn fill_resets_cells_inside_rect_only() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        ui.set_content(0, 0, "q", Style::default());
        ui.set_content(3, 1, "q", Style::default());
        ui.fill(Rect::new(0, 0, 2, 1), Style::default().bg(Color::Blue));
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((0, 0)).unwrap().bg, Color::Blue);
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), "q");
    }
}
