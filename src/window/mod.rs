pub mod decorator;
pub mod drag;
pub mod geometry;

mod window_manager;

use std::sync::{Arc, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Style};

use crate::components::{Component, SharedComponent};
use crate::constants::{
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH,
};
use crate::drivers::{MouseAction, MouseOutcome};
use crate::layout::centered_origin;
use crate::region::Region;
use crate::theme;
use crate::ui::{UiFrame, display_width, truncate_to_width};

use decorator::{LineDecorator, WindowDecorator};
use drag::{DragGeometry, DragState};
pub use geometry::{Margins, WindowGeometry};
pub use window_manager::WindowManager;

/// Optional single-line footer painted on a window's bottom edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub alignment: Alignment,
    pub color: Color,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: String::new(),
            alignment: Alignment::Right,
            color: theme::status_fg(),
        }
    }
}

#[derive(Debug)]
struct WindowState {
    region: Region,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    fullscreen: bool,
    centered: bool,
    margins: Margins,
    status: StatusLine,
    drag: DragState,
    decorator: Arc<dyn WindowDecorator>,
}

impl WindowState {
    fn geometry(&self) -> DragGeometry {
        DragGeometry {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// A draggable, resizable frame around a piece of content.
///
/// Windows are shared (`Arc<Window>`) between the caller and the
/// [`WindowManager`] they are added to; every method takes `&self` and
/// synchronizes internally. Geometry is manager-relative: the manager maps it
/// onto its viewport when laying out a frame.
pub struct Window {
    content: SharedComponent,
    state: RwLock<WindowState>,
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}

impl Window {
    pub fn new(content: SharedComponent) -> Arc<Self> {
        Arc::new(Self {
            content,
            state: RwLock::new(WindowState {
                region: Region::new(),
                x: 0,
                y: 0,
                width: WINDOW_DEFAULT_WIDTH,
                height: WINDOW_DEFAULT_HEIGHT,
                fullscreen: false,
                centered: false,
                margins: Margins::default(),
                status: StatusLine::default(),
                drag: DragState::Idle,
                decorator: Arc::new(LineDecorator),
            }),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, WindowState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, WindowState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_content(&self) -> MutexGuard<'_, dyn Component + Send + 'static> {
        self.content.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle to the hosted content.
    pub fn content(&self) -> SharedComponent {
        Arc::clone(&self.content)
    }

    /// Pin the window at a manager-relative position. Clears centering.
    pub fn set_position(&self, x: u16, y: u16) {
        let mut state = self.write();
        state.x = x;
        state.y = y;
        state.centered = false;
    }

    pub fn position(&self) -> (u16, u16) {
        let state = self.read();
        (state.x, state.y)
    }

    /// Set the window size, clamped to the global minimums.
    pub fn set_size(&self, width: u16, height: u16) {
        let mut state = self.write();
        state.width = width.max(WINDOW_MIN_WIDTH);
        state.height = height.max(WINDOW_MIN_HEIGHT);
    }

    pub fn size(&self) -> (u16, u16) {
        let state = self.read();
        (state.width, state.height)
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        self.write().fullscreen = fullscreen;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.read().fullscreen
    }

    /// Space reserved inside the window's own `width x height` box.
    ///
    /// Both layout passes inset all four sides, so the drawn frame is
    /// `width - left - right` columns wide and starts `left` columns in. A
    /// right margin alone shrinks the frame without moving it.
    pub fn set_margins(&self, top: u16, right: u16, bottom: u16, left: u16) {
        self.write().margins = Margins::new(top, right, bottom, left);
    }

    pub fn margins(&self) -> Margins {
        self.read().margins
    }

    /// Ask the manager to center the window on the screen at every draw,
    /// until the next `set_position`.
    pub fn set_position_center(&self) {
        self.write().centered = true;
    }

    pub fn is_centered(&self) -> bool {
        self.read().centered
    }

    pub fn show(&self) {
        self.write().region.set_visible(true);
    }

    pub fn hide(&self) {
        let mut state = self.write();
        state.region.set_visible(false);
        state.drag = DragState::Idle;
    }

    pub fn is_visible(&self) -> bool {
        self.read().region.is_visible()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.write().region.set_title(title);
    }

    pub fn title(&self) -> String {
        self.read().region.title().to_string()
    }

    pub fn set_background(&self, color: Color) {
        self.write().region.set_background(color);
    }

    pub fn set_border(&self, border: bool) {
        self.write().region.set_border(border);
    }

    pub fn has_border(&self) -> bool {
        self.read().region.has_border()
    }

    pub fn set_decorator(&self, decorator: Arc<dyn WindowDecorator>) {
        self.write().decorator = decorator;
    }

    pub fn set_status(&self, text: impl Into<String>) {
        self.write().status.text = text.into();
    }

    pub fn status(&self) -> String {
        self.read().status.text.clone()
    }

    pub fn set_status_alignment(&self, alignment: Alignment) {
        self.write().status.alignment = alignment;
    }

    pub fn status_alignment(&self) -> Alignment {
        self.read().status.alignment
    }

    pub fn set_status_color(&self, color: Color) {
        self.write().status.color = color;
    }

    pub fn status_color(&self) -> Color {
        self.read().status.color
    }

    /// Absolute outer rectangle from the most recent layout.
    pub fn rect(&self) -> Rect {
        self.read().region.rect()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.write().region.set_rect(rect);
    }

    pub fn inner_rect(&self) -> Rect {
        self.read().region.inner_rect()
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let state = self.read();
        state.region.is_visible() && state.region.contains(column, row)
    }

    pub fn focus(&self) {
        self.write().region.focus();
        self.lock_content().focus();
    }

    pub fn blur(&self) {
        self.write().region.blur();
        self.lock_content().blur();
    }

    /// Content focus when the content tracks it, otherwise the border focus.
    pub fn has_focus(&self) -> bool {
        let border_focus = self.read().region.has_focus();
        let content = self.lock_content();
        if content.focusable() {
            content.has_focus()
        } else {
            border_focus
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.read().drag
    }

    /// Active resize direction per axis: horizontal -1 left, +1 right;
    /// vertical -1 bottom, +1 top corner; 0 when not resizing.
    pub fn drag_axis(&self) -> (i8, i8) {
        self.read().drag.axis()
    }

    /// Grab offset of an in-progress move, `None` when not moving.
    pub fn drag_grab(&self) -> Option<(u16, u16)> {
        self.read().drag.grab()
    }

    pub fn is_dragging(&self) -> bool {
        !self.read().drag.is_idle()
    }

    /// Continue an active drag with the pointer at `(column, row)`.
    ///
    /// `viewport` is the manager viewport the window is laid out in. Returns
    /// whether a drag was active.
    pub(crate) fn drag_to(&self, column: u16, row: u16, viewport: Rect) -> bool {
        let mut state = self.write();
        let base_x = viewport.x.saturating_add(state.margins.left);
        let base_y = viewport.y.saturating_add(state.margins.top);
        let Some(next) = state
            .drag
            .apply(state.geometry(), column, row, base_x, base_y)
        else {
            return false;
        };
        if matches!(state.drag, DragState::Moving { .. }) {
            state.centered = false;
        }
        state.x = next.x;
        state.y = next.y;
        state.width = next.width.max(WINDOW_MIN_WIDTH);
        state.height = next.height.max(WINDOW_MIN_HEIGHT);
        tracing::trace!(
            x = state.x,
            y = state.y,
            width = state.width,
            height = state.height,
            "drag update"
        );
        true
    }

    /// Return to idle. Returns whether a drag was active.
    pub(crate) fn end_drag(&self) -> bool {
        let mut state = self.write();
        let was_active = !state.drag.is_idle();
        if was_active {
            tracing::debug!(title = state.region.title(), "drag ended");
        }
        state.drag = DragState::Idle;
        was_active
    }

    /// Recompute the position that centers the window on a screen.
    pub(crate) fn recenter(&self, screen_width: u16, screen_height: u16) {
        let mut state = self.write();
        if !state.centered {
            return;
        }
        let (x, y) = centered_origin(screen_width, screen_height, state.width, state.height);
        state.x = x;
        state.y = y;
    }

    /// Outer rectangle for normal compositing inside `viewport`.
    pub(crate) fn floating_rect(&self, viewport: Rect) -> Rect {
        let state = self.read();
        let rect = Rect {
            x: viewport.x.saturating_add(state.x),
            y: viewport.y.saturating_add(state.y),
            width: state.width,
            height: state.height,
        };
        state.margins.apply(rect)
    }

    /// Outer rectangle for the fullscreen pass: the viewport widened by one
    /// column on each side and one row below (covering the manager's side
    /// and bottom border), inset by margins and clamped to `screen`.
    pub(crate) fn fullscreen_rect(&self, viewport: Rect, screen: Rect) -> Rect {
        let state = self.read();
        let grown = Rect {
            x: viewport.x.saturating_sub(1),
            y: viewport.y,
            width: viewport
                .width
                .saturating_add(if viewport.x > 0 { 2 } else { 1 }),
            height: viewport.height.saturating_add(1),
        };
        state.margins.apply(grown).intersection(screen)
    }

    /// Paint the frame, then the content inside it, then the status line.
    pub fn draw(&self, frame: &mut UiFrame<'_>) {
        let state = self.read();
        if !state.region.is_visible() {
            return;
        }
        state.region.render(frame, state.decorator.as_ref());

        let inner = state.region.inner_rect();
        {
            let mut content = self.lock_content();
            content.set_rect(inner);
            if inner.width > 0 && inner.height > 0 {
                content.render(&mut frame.clipped(inner));
            }
        }

        let rect = state.region.rect();
        if state.status.text.is_empty() || rect.width < 3 || rect.height == 0 {
            return;
        }
        let width = rect.width - 2;
        let text = truncate_to_width(&state.status.text, width as usize);
        let len = display_width(&text).min(width);
        let x = rect.x
            + 1
            + match state.status.alignment {
                Alignment::Left => 0,
                Alignment::Center => (width - len) / 2,
                Alignment::Right => width - len,
            };
        let y = rect.y.saturating_add(rect.height - 1);
        // between the corners only
        let mut bar = frame.clipped(Rect::new(rect.x + 1, y, width, 1));
        bar.set_string(x, y, &text, Style::default().fg(state.status.color));
    }

    /// The content's key handling, unchanged.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        self.lock_content().handle_key(key)
    }

    /// Offer a mouse event to the window.
    ///
    /// Events outside the window are ignored. A press inside asks for focus;
    /// a left press on the border starts a move or resize. The event is then
    /// passed on to the content and reported as consumed.
    pub fn handle_mouse(&self, action: MouseAction, event: &MouseEvent) -> MouseOutcome {
        {
            let mut state = self.write();
            if !state.region.is_visible() || !state.region.contains(event.column, event.row) {
                return MouseOutcome::ignored();
            }
            if action == MouseAction::LeftDown && !state.fullscreen {
                let next = DragState::classify_press(
                    state.region.rect(),
                    event.column,
                    event.row,
                    state.geometry(),
                );
                if !next.is_idle() {
                    tracing::debug!(
                        title = state.region.title(),
                        axis = ?next.axis(),
                        grab = ?next.grab(),
                        "drag started"
                    );
                }
                state.drag = next;
            }
        }

        let inner = self.lock_content().handle_mouse(action, event);
        MouseOutcome {
            consumed: true,
            capture: inner.capture,
            focus: action.is_press() || inner.focus,
        }
    }
}
