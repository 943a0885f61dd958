use ratatui::prelude::Rect;

use crate::theme;
use crate::ui::{UiFrame, display_width, truncate_to_width};

/// Draws the chrome around a bordered region.
pub trait WindowDecorator: std::fmt::Debug + Send + Sync {
    fn render_frame(&self, frame: &mut UiFrame<'_>, rect: Rect, title: &str, focused: bool);
}

/// Glyph set for one border weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

pub const SINGLE: BorderGlyphs = BorderGlyphs {
    horizontal: "─",
    vertical: "│",
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
};

pub const DOUBLE: BorderGlyphs = BorderGlyphs {
    horizontal: "═",
    vertical: "║",
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
};

/// Single-line frame; switches to double lines while focused. The title is
/// centered in the top edge.
#[derive(Debug, Default)]
pub struct LineDecorator;

impl WindowDecorator for LineDecorator {
    fn render_frame(&self, frame: &mut UiFrame<'_>, rect: Rect, title: &str, focused: bool) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let glyphs = if focused { DOUBLE } else { SINGLE };
        let border_style = theme::border_style(focused);

        let outer_left = rect.x;
        let outer_top = rect.y;
        let outer_right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let outer_bottom = rect.y.saturating_add(rect.height).saturating_sub(1);

        // Top and bottom
        for x in outer_left..=outer_right {
            let (top, bottom) = if x == outer_left {
                (glyphs.top_left, glyphs.bottom_left)
            } else if x == outer_right {
                (glyphs.top_right, glyphs.bottom_right)
            } else {
                (glyphs.horizontal, glyphs.horizontal)
            };
            frame.set_content(x, outer_top, top, border_style);
            if outer_bottom != outer_top {
                frame.set_content(x, outer_bottom, bottom, border_style);
            }
        }
        // Left and right
        for y in outer_top.saturating_add(1)..outer_bottom {
            frame.set_content(outer_left, y, glyphs.vertical, border_style);
            if outer_right != outer_left {
                frame.set_content(outer_right, y, glyphs.vertical, border_style);
            }
        }

        if title.is_empty() || rect.width < 3 {
            return;
        }
        let header_width = rect.width.saturating_sub(2) as usize;
        let title = truncate_to_width(title, header_width);
        let title_len = display_width(&title);
        let start_x = outer_left + 1 + (header_width as u16 - title_len) / 2;
        frame.set_string(start_x, outer_top, &title, theme::title_style(focused));
    }
}
