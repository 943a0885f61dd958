//! Shared crate-wide constants.

/// Smallest width (in terminal columns) a window may be resized to.
///
/// Applies to explicit `set_size` calls as well as interactive edge drags.
pub const WINDOW_MIN_WIDTH: u16 = 4;

/// Smallest height (in terminal rows) a window may be resized to.
pub const WINDOW_MIN_HEIGHT: u16 = 3;

/// Width given to a freshly constructed window before any `set_size`.
pub const WINDOW_DEFAULT_WIDTH: u16 = 15;

/// Height given to a freshly constructed window before any `set_size`.
pub const WINDOW_DEFAULT_HEIGHT: u16 = 10;

/// Inset applied to the viewport when the manager derives it from the
/// screen in fullscreen mode: one column on the left, one row at the bottom.
pub const FULLSCREEN_INSET_COLUMNS: u16 = 1;
pub const FULLSCREEN_INSET_ROWS: u16 = 1;
