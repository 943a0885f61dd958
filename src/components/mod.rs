use std::sync::{Arc, Mutex};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::drivers::{MouseAction, MouseOutcome};
use crate::ui::UiFrame;

pub mod text_pane;

pub use text_pane::TextPane;

/// A drawable region that can be hosted inside a window.
///
/// The compositor only relies on this contract: it assigns the content a
/// rectangle, asks it to draw into a surface, moves focus in and out of it,
/// and offers it keyboard and mouse input.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>);

    fn rect(&self) -> Rect;

    fn set_rect(&mut self, rect: Rect);

    fn focus(&mut self) {}

    fn blur(&mut self) {}

    fn has_focus(&self) -> bool {
        false
    }

    /// Whether `has_focus` reports real focus state. When `false`, a hosting
    /// window falls back to its own border focus.
    fn focusable(&self) -> bool {
        false
    }

    /// Offer a key press. Returns `true` when the key was handled.
    fn handle_key(&mut self, _key: &KeyEvent) -> bool {
        false
    }

    fn handle_mouse(&mut self, _action: MouseAction, _event: &MouseEvent) -> MouseOutcome {
        MouseOutcome::ignored()
    }
}

/// Content handle shared between the caller and the window hosting it.
pub type SharedComponent = Arc<Mutex<dyn Component + Send>>;

pub fn shared<C: Component + Send + 'static>(component: C) -> SharedComponent {
    Arc::new(Mutex::new(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

    struct DummyComp {
        rect: Rect,
    }

    impl Component for DummyComp {
        fn render(&mut self, _frame: &mut UiFrame<'_>) {}

        fn rect(&self) -> Rect {
            self.rect
        }

        fn set_rect(&mut self, rect: Rect) {
            self.rect = rect;
        }
    }

    #[test]
    fn defaults_ignore_input_and_report_no_focus() {
        let mut d = DummyComp {
            rect: Rect::default(),
        };
        d.focus();
        assert!(!d.has_focus());
        assert!(!d.focusable());
        assert!(!d.handle_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        let event = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            d.handle_mouse(MouseAction::Move, &event),
            MouseOutcome::ignored()
        );
    }

    #[test]
    fn shared_handle_coerces_to_trait_object() {
        let handle: SharedComponent = shared(DummyComp {
            rect: Rect::new(1, 2, 3, 4),
        });
        let guard = handle.lock().unwrap();
        assert_eq!(guard.rect(), Rect::new(1, 2, 3, 4));
    }
}
