use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::drivers::{InputDriver, MouseAction};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::ui::UiFrame;
use crate::window::WindowManager;

/// Route one terminal event into the manager. Returns whether it was used.
pub fn dispatch_event(manager: &WindowManager, event: &Event) -> bool {
    match event {
        Event::Mouse(mouse) => {
            let action = MouseAction::from_kind(mouse.kind);
            manager.handle_mouse(action, mouse).consumed
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => manager.handle_key(key),
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            false
        }
        _ => false,
    }
}

/// Drive `manager` full-screen on `terminal` until `should_quit` says so.
///
/// The manager is resized to the frame on every draw. `should_quit` sees each
/// event before it is dispatched, and `None` on every idle tick. Mouse capture
/// is released on the way out; an error from the loop wins over one from that
/// release.
pub fn run_compositor<B, D, F>(
    terminal: &mut Terminal<B>,
    driver: D,
    manager: &WindowManager,
    poll_interval: Duration,
    mut should_quit: F,
) -> io::Result<()>
where
    B: Backend,
    D: InputDriver,
    F: FnMut(Option<&Event>, &WindowManager) -> bool,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    let result = event_loop.run(|_, event| {
        if should_quit(event.as_ref(), manager) {
            return Ok(ControlFlow::Quit);
        }
        match event {
            Some(event) => {
                dispatch_event(manager, &event);
            }
            None => {
                terminal
                    .draw(|frame| {
                        manager.set_rect(frame.area());
                        manager.draw(&mut UiFrame::new(frame));
                    })
                    .map_err(|e| io::Error::other(e.to_string()))?;
            }
        }
        Ok(ControlFlow::Continue)
    });

    let released = event_loop.driver().set_mouse_capture(false);
    match result {
        Err(err) => {
            if let Err(cleanup) = released {
                tracing::warn!(error = %cleanup, "failed to release mouse capture");
            }
            Err(err)
        }
        Ok(()) => released,
    }
}
