use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::Rect;

use super::Window;
use super::decorator::{LineDecorator, WindowDecorator};
use crate::components::Component;
use crate::constants::{FULLSCREEN_INSET_COLUMNS, FULLSCREEN_INSET_ROWS};
use crate::drivers::{MouseAction, MouseOutcome};
use crate::region::Region;
use crate::ui::UiFrame;

#[derive(Debug)]
struct ManagerState {
    region: Region,
    /// Z-order, back to front. The last window is the topmost.
    windows: Vec<Arc<Window>>,
    fullscreen: bool,
    /// Screen area seen by the most recent draw.
    screen: Option<Rect>,
    decorator: Arc<dyn WindowDecorator>,
}

impl ManagerState {
    fn screen(&self) -> Rect {
        self.screen.unwrap_or_else(|| self.region.rect())
    }

    /// Area window positions are relative to.
    fn viewport(&self) -> Rect {
        if self.fullscreen {
            let screen = self.screen();
            Rect {
                x: screen.x.saturating_add(FULLSCREEN_INSET_COLUMNS),
                y: screen.y,
                width: screen.width.saturating_sub(FULLSCREEN_INSET_COLUMNS),
                height: screen.height.saturating_sub(FULLSCREEN_INSET_ROWS),
            }
        } else {
            self.region.inner_rect()
        }
    }

    /// Assign every visible window its absolute rectangle for this frame and
    /// return the windows that take part, back to front.
    ///
    /// Visible fullscreen windows are exclusive: when any exist, only they
    /// are laid out and the floating windows sit the frame out.
    fn layout(&self) -> Vec<Arc<Window>> {
        let viewport = self.viewport();
        let screen = self.screen();

        let fullscreen: Vec<Arc<Window>> = self
            .windows
            .iter()
            .filter(|w| w.is_visible() && w.is_fullscreen())
            .cloned()
            .collect();
        if !fullscreen.is_empty() {
            tracing::trace!(count = fullscreen.len(), "fullscreen pass");
            for window in &fullscreen {
                window.set_rect(window.fullscreen_rect(viewport, screen));
            }
            return fullscreen;
        }

        let floating: Vec<Arc<Window>> = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .cloned()
            .collect();
        for window in &floating {
            window.recenter(screen.width, screen.height);
            window.set_rect(window.floating_rect(viewport));
        }
        floating
    }

    /// Index of the topmost laid-out window containing the point.
    fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let candidates = self.layout();
        self.windows.iter().rposition(|w| {
            candidates.iter().any(|c| Arc::ptr_eq(c, w)) && w.contains(column, row)
        })
    }
}

/// Floating-window compositor.
///
/// Owns the z-order of its windows, lays them out inside its own region and
/// routes input to them. Like [`Window`], every method takes `&self`.
#[derive(Debug)]
pub struct WindowManager {
    state: RwLock<ManagerState>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ManagerState {
                region: Region::new(),
                windows: Vec::new(),
                fullscreen: false,
                screen: None,
                decorator: Arc::new(LineDecorator),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ManagerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ManagerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append windows on top of the current z-order. Added windows always
    /// get a border.
    pub fn add(&self, windows: impl IntoIterator<Item = Arc<Window>>) {
        let mut state = self.write();
        for window in windows {
            window.set_border(true);
            tracing::debug!(title = %window.title(), "window added");
            state.windows.push(window);
        }
    }

    pub fn clear(&self) {
        let mut state = self.write();
        tracing::debug!(count = state.windows.len(), "windows cleared");
        state.windows.clear();
    }

    /// Snapshot of the z-order, back to front.
    pub fn windows(&self) -> Vec<Arc<Window>> {
        self.read().windows.clone()
    }

    pub fn len(&self) -> usize {
        self.read().windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().windows.is_empty()
    }

    /// Derive the viewport from the screen instead of the manager's region.
    pub fn set_fullscreen(&self, fullscreen: bool) {
        self.write().fullscreen = fullscreen;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.read().fullscreen
    }

    pub fn rect(&self) -> Rect {
        self.read().region.rect()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.write().region.set_rect(rect);
    }

    pub fn show(&self) {
        self.write().region.set_visible(true);
    }

    pub fn hide(&self) {
        self.write().region.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.read().region.is_visible()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.write().region.set_title(title);
    }

    pub fn set_border(&self, border: bool) {
        self.write().region.set_border(border);
    }

    pub fn set_decorator(&self, decorator: Arc<dyn WindowDecorator>) {
        self.write().decorator = decorator;
    }

    /// Topmost window under the point, as it would be laid out now.
    pub fn window_at(&self, column: u16, row: u16) -> Option<Arc<Window>> {
        let state = self.read();
        state
            .hit(column, row)
            .map(|index| Arc::clone(&state.windows[index]))
    }

    /// Composite all windows, back to front, into `frame`.
    pub fn draw(&self, frame: &mut UiFrame<'_>) {
        {
            let mut state = self.write();
            if !state.region.is_visible() {
                return;
            }
            state.screen = Some(frame.area());
        }
        let state = self.read();
        state.region.render(frame, state.decorator.as_ref());
        for window in state.layout() {
            window.draw(frame);
        }
    }

    /// Route a mouse event.
    ///
    /// Active drags follow every pointer move, even off the dragged window,
    /// and a left release ends every drag. A press raises the topmost window
    /// under the pointer and blurs the rest; the event then goes to that
    /// window and its outcome is returned as is.
    pub fn handle_mouse(&self, action: MouseAction, event: &MouseEvent) -> MouseOutcome {
        let (column, row) = (event.column, event.row);
        let mut state = self.write();

        if !state.region.is_visible() || !state.region.contains(column, row) {
            if action == MouseAction::LeftUp {
                for window in &state.windows {
                    window.end_drag();
                }
            }
            return MouseOutcome::ignored();
        }

        let mut consumed = false;
        match action {
            MouseAction::Move => {
                let viewport = state.viewport();
                for window in &state.windows {
                    consumed |= window.drag_to(column, row, viewport);
                }
            }
            MouseAction::LeftUp => {
                for window in &state.windows {
                    consumed |= window.end_drag();
                }
            }
            _ => {}
        }

        let Some(index) = state.hit(column, row) else {
            return MouseOutcome {
                consumed,
                ..MouseOutcome::default()
            };
        };
        let window = Arc::clone(&state.windows[index]);

        if action.is_press() {
            for other in state.windows.iter().filter(|w| !Arc::ptr_eq(w, &window)) {
                other.blur();
            }
            if index + 1 != state.windows.len() {
                let raised = state.windows.remove(index);
                state.windows.push(raised);
                tracing::debug!(title = %window.title(), from = index, "window raised");
            }
        }
        drop(state);

        let outcome = window.handle_mouse(action, event);
        if outcome.focus {
            window.focus();
        }
        outcome
    }

    /// Offer a key to the focused window, front to back.
    pub fn handle_key(&self, key: &KeyEvent) -> bool {
        let focused = {
            let state = self.read();
            if !state.region.is_visible() {
                return false;
            }
            state
                .windows
                .iter()
                .rev()
                .find(|w| w.is_visible() && w.has_focus())
                .cloned()
        };
        focused.is_some_and(|window| window.handle_key(key))
    }

    /// Focus the manager, handing focus to its topmost visible window.
    pub fn focus(&self) {
        let mut state = self.write();
        state.region.focus();
        let top = state.windows.iter().rev().find(|w| w.is_visible()).cloned();
        for window in &state.windows {
            if top.as_ref().is_some_and(|t| Arc::ptr_eq(t, window)) {
                window.focus();
            } else {
                window.blur();
            }
        }
    }

    pub fn blur(&self) {
        let mut state = self.write();
        state.region.blur();
        for window in &state.windows {
            window.blur();
        }
    }

    pub fn has_focus(&self) -> bool {
        let state = self.read();
        state.region.has_focus() || state.windows.iter().any(|w| w.has_focus())
    }
}

impl Component for WindowManager {
    fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.draw(frame);
    }

    fn rect(&self) -> Rect {
        WindowManager::rect(self)
    }

    fn set_rect(&mut self, rect: Rect) {
        WindowManager::set_rect(self, rect);
    }

    fn focus(&mut self) {
        WindowManager::focus(self);
    }

    fn blur(&mut self) {
        WindowManager::blur(self);
    }

    fn has_focus(&self) -> bool {
        WindowManager::has_focus(self)
    }

    fn focusable(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        WindowManager::handle_key(self, key)
    }

    fn handle_mouse(&mut self, action: MouseAction, event: &MouseEvent) -> MouseOutcome {
        WindowManager::handle_mouse(self, action, event)
    }
}
