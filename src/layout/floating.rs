//! Geometry math for interactive floating-window moves and resizes.
//!
//! Every drag is computed from an anchor captured at press time (pointer
//! position plus the window geometry at that instant) rather than
//! accumulated per event, so overshooting a limit and coming back lands the
//! edge under the pointer again.

use crate::constants::{WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

/// Which edge of an axis is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Left or top edge. The origin follows the pointer, the far edge stays put.
    Near,
    /// Right or bottom edge. The origin stays put.
    Far,
}

impl ResizeEdge {
    /// Signed axis direction: -1 for the near edge, +1 for the far edge.
    pub fn direction(self) -> i8 {
        match self {
            ResizeEdge::Near => -1,
            ResizeEdge::Far => 1,
        }
    }
}

/// Pointer and manager-relative window geometry captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub column: u16,
    pub row: u16,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Resized window geometry, manager-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizedRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Resize one axis. Returns the new `(position, length)`.
///
/// The length never drops below `min_len`; when the near edge hits that
/// limit the origin is pushed back so the far edge stays fixed. The
/// position never goes below zero.
pub fn resize_axis(
    start_pos: u16,
    start_len: u16,
    delta: i32,
    edge: ResizeEdge,
    min_len: u16,
) -> (u16, u16) {
    let min_len = min_len.max(1) as i32;
    let max_len = u16::MAX as i32;
    match edge {
        ResizeEdge::Near => {
            let far = start_pos as i32 + start_len as i32;
            let mut pos = start_pos as i32 + delta;
            let mut len = start_len as i32 - delta;
            if len < min_len {
                pos -= min_len - len;
                len = min_len;
            }
            if pos < 0 {
                pos = 0;
                len = far.max(min_len);
            }
            (pos.min(max_len) as u16, len.min(max_len) as u16)
        }
        ResizeEdge::Far => {
            let len = (start_len as i32 + delta).clamp(min_len, max_len);
            (start_pos, len as u16)
        }
    }
}

/// Apply a resize drag to the anchored geometry.
pub fn apply_resize_drag(
    anchor: DragAnchor,
    horizontal: Option<ResizeEdge>,
    vertical: Option<ResizeEdge>,
    column: u16,
    row: u16,
) -> ResizedRect {
    let dx = column as i32 - anchor.column as i32;
    let dy = row as i32 - anchor.row as i32;
    let (x, width) = match horizontal {
        Some(edge) => resize_axis(anchor.x, anchor.width, dx, edge, WINDOW_MIN_WIDTH),
        None => (anchor.x, anchor.width),
    };
    let (y, height) = match vertical {
        Some(edge) => resize_axis(anchor.y, anchor.height, dy, edge, WINDOW_MIN_HEIGHT),
        None => (anchor.y, anchor.height),
    };
    ResizedRect {
        x,
        y,
        width,
        height,
    }
}

/// New manager-relative origin for one axis of a whole-window move.
///
/// `base` is the absolute coordinate that relative position zero maps to
/// (viewport origin plus any margin); `grab` is the pointer's offset from
/// the window origin recorded at press time.
pub fn move_axis(pointer: u16, base: u16, grab: u16) -> u16 {
    let pos = pointer as i32 - base as i32 - grab as i32;
    pos.clamp(0, u16::MAX as i32) as u16
}
