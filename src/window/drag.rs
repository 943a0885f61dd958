//! Per-window move/resize interaction state.
//!
//! A window is either idle, being moved by its top edge, or being resized
//! along one or both axes. The variants are exclusive, so a move and a
//! resize can never be in flight on the same window at once.

use ratatui::prelude::Rect;

use crate::layout::floating::{
    DragAnchor, ResizeEdge, ResizedRect, apply_resize_drag, move_axis,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Whole-window move; `grab_*` is the press point minus the window's
    /// outer origin.
    Moving { grab_x: u16, grab_y: u16 },
    Resizing {
        horizontal: Option<ResizeEdge>,
        vertical: Option<ResizeEdge>,
        anchor: DragAnchor,
    },
}

/// Manager-relative geometry a drag operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGeometry {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl DragState {
    /// Classify a left press at `(column, row)` against the window's outer
    /// rectangle.
    ///
    /// Left/right columns start a horizontal resize; the bottom row starts a
    /// vertical resize of the far edge. On the top row a corner resizes the
    /// near edge vertically, anywhere else grabs the window for a move. The
    /// axes are classified independently so a corner resizes both.
    pub fn classify_press(rect: Rect, column: u16, row: u16, geometry: DragGeometry) -> Self {
        if rect.width == 0 || rect.height == 0 {
            return DragState::Idle;
        }
        let right = rect.x.saturating_add(rect.width - 1);
        let bottom = rect.y.saturating_add(rect.height - 1);
        let in_columns = column >= rect.x && column <= right;
        let in_rows = row >= rect.y && row <= bottom;
        let left_edge = column == rect.x;
        let right_edge = column == right;
        let top_edge = row == rect.y;
        let bottom_edge = row == bottom;

        let mut horizontal = None;
        if in_rows {
            if left_edge {
                horizontal = Some(ResizeEdge::Near);
            } else if right_edge {
                horizontal = Some(ResizeEdge::Far);
            }
        }

        let mut vertical = None;
        if in_columns {
            if bottom_edge {
                vertical = Some(ResizeEdge::Far);
            } else if top_edge {
                if left_edge || right_edge {
                    vertical = Some(ResizeEdge::Near);
                } else {
                    return DragState::Moving {
                        grab_x: column - rect.x,
                        grab_y: row - rect.y,
                    };
                }
            }
        }

        if horizontal.is_none() && vertical.is_none() {
            return DragState::Idle;
        }
        DragState::Resizing {
            horizontal,
            vertical,
            anchor: DragAnchor {
                column,
                row,
                x: geometry.x,
                y: geometry.y,
                width: geometry.width,
                height: geometry.height,
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Active resize direction per axis, 0 when the axis is not resizing.
    ///
    /// Horizontal is -1 for the left edge and +1 for the right. Vertical is
    /// -1 for the bottom edge and +1 for a top corner.
    pub fn axis(&self) -> (i8, i8) {
        match self {
            DragState::Resizing {
                horizontal,
                vertical,
                ..
            } => (
                horizontal.map_or(0, ResizeEdge::direction),
                vertical.map_or(0, |edge| -edge.direction()),
            ),
            _ => (0, 0),
        }
    }

    /// Grab offset of an in-progress move.
    pub fn grab(&self) -> Option<(u16, u16)> {
        match self {
            DragState::Moving { grab_x, grab_y } => Some((*grab_x, *grab_y)),
            _ => None,
        }
    }

    /// Geometry after the pointer moved to `(column, row)`.
    ///
    /// `base_x`/`base_y` is the absolute cell that manager-relative position
    /// zero maps to. Returns `None` while idle.
    pub fn apply(
        &self,
        current: DragGeometry,
        column: u16,
        row: u16,
        base_x: u16,
        base_y: u16,
    ) -> Option<DragGeometry> {
        match *self {
            DragState::Idle => None,
            DragState::Moving { grab_x, grab_y } => Some(DragGeometry {
                x: move_axis(column, base_x, grab_x),
                y: move_axis(row, base_y, grab_y),
                ..current
            }),
            DragState::Resizing {
                horizontal,
                vertical,
                anchor,
            } => {
                let ResizedRect {
                    x,
                    y,
                    width,
                    height,
                } = apply_resize_drag(anchor, horizontal, vertical, column, row);
                Some(DragGeometry {
                    x,
                    y,
                    width,
                    height,
                })
            }
        }
    }
}
