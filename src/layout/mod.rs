pub mod floating;

use ratatui::prelude::Rect;

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

/// Shrink `rect` by per-side insets, saturating at zero size.
pub fn inset(rect: Rect, top: u16, right: u16, bottom: u16, left: u16) -> Rect {
    Rect {
        x: rect.x.saturating_add(left),
        y: rect.y.saturating_add(top),
        width: rect.width.saturating_sub(left.saturating_add(right)),
        height: rect.height.saturating_sub(top.saturating_add(bottom)),
    }
}

/// Top-left position that centers a `width` x `height` box on a screen of
/// `screen_width` x `screen_height`, clamped to the screen origin.
pub fn centered_origin(
    screen_width: u16,
    screen_height: u16,
    width: u16,
    height: u16,
) -> (u16, u16) {
    (
        (screen_width / 2).saturating_sub(width / 2),
        (screen_height / 2).saturating_sub(height / 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::prelude::Rect;

    #[test]
    fn rect_contains_edge_cases() {
        let r = Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 5,
        };
        assert!(!rect_contains(r, 0, 0));
        let r2 = Rect {
            x: 1,
            y: 1,
            width: 3,
            height: 3,
        };
        assert!(rect_contains(r2, 1, 1));
        assert!(rect_contains(r2, 3, 3));
        assert!(!rect_contains(r2, 4, 1));
        assert!(!rect_contains(r2, 0, 2));
    }

    #[test]
    fn inset_saturates() {
        let r = Rect::new(2, 2, 10, 6);
        assert_eq!(inset(r, 1, 2, 1, 3), Rect::new(5, 3, 5, 4));
        assert_eq!(inset(r, 4, 20, 4, 0).width, 0);
        assert_eq!(inset(r, 4, 20, 4, 0).height, 0);
    }

    #[test]
    fn centered_origin_matches_half_differences() {
        assert_eq!(centered_origin(80, 24, 20, 10), (30, 7));
        assert_eq!(centered_origin(81, 25, 21, 11), (30, 7));
        // larger than the screen clamps to the origin
        assert_eq!(centered_origin(10, 5, 40, 20), (0, 0));
    }
}
