//! Base drawable region shared by windows, the window manager, and content.
//!
//! `Region` is a plain value: a rectangle plus the presentation flags every
//! drawable carries (visibility, border, title, background) and the border
//! focus state. Types that need these behaviours hold a `Region` field and
//! forward to it explicitly.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::layout::rect_contains;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::decorator::WindowDecorator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    rect: Rect,
    visible: bool,
    border: bool,
    title: String,
    focused: bool,
    background: Color,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Region {
    pub fn new() -> Self {
        Self {
            rect: Rect::default(),
            visible: true,
            border: false,
            title: String::new(),
            focused: false,
            background: theme::window_background(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// The rectangle left for content once the border is accounted for.
    pub fn inner_rect(&self) -> Rect {
        if !self.border {
            return self.rect;
        }
        Rect {
            x: self.rect.x.saturating_add(1),
            y: self.rect.y.saturating_add(1),
            width: self.rect.width.saturating_sub(2),
            height: self.rect.height.saturating_sub(2),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.rect, column, row)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Clear the background and draw the frame (when bordered).
    pub fn render(&self, frame: &mut UiFrame<'_>, decorator: &dyn WindowDecorator) {
        if !self.visible || self.rect.width == 0 || self.rect.height == 0 {
            return;
        }
        frame.fill(self.rect, Style::default().bg(self.background));
        if self.border {
            decorator.render_frame(frame, self.rect, &self.title, self.focused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::decorator::LineDecorator;
    use ratatui::buffer::Buffer;

    #[test]
    fn inner_rect_shrinks_only_with_border() {
        let mut region = Region::new();
        region.set_rect(Rect::new(2, 3, 10, 5));
        assert_eq!(region.inner_rect(), Rect::new(2, 3, 10, 5));
        region.set_border(true);
        assert_eq!(region.inner_rect(), Rect::new(3, 4, 8, 3));
    }

    #[test]
    fn inner_rect_of_tiny_bordered_region_is_empty() {
        let mut region = Region::new();
        region.set_border(true);
        region.set_rect(Rect::new(0, 0, 1, 1));
        let inner = region.inner_rect();
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn hidden_region_draws_nothing() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let mut region = Region::new();
        region.set_border(true);
        region.set_rect(area);
        region.set_visible(false);
        region.render(&mut frame, &LineDecorator);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn bordered_region_draws_corners() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let mut region = Region::new();
        region.set_border(true);
        region.set_rect(area);
        region.render(&mut frame, &LineDecorator);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "┌");
        assert_eq!(buf.cell((5, 3)).unwrap().symbol(), "┘");
    }
}
