use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};

use super::InputDriver;

/// Input driver backed by the real terminal via crossterm.
///
/// Key release and repeat events are dropped so handlers only ever see
/// presses, regardless of whether the terminal reports enhanced key events.
#[derive(Debug, Default)]
pub struct ConsoleDriver;

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn accept(event: &Event) -> bool {
        !matches!(event, Event::Key(key) if key.kind != KeyEventKind::Press)
    }

}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        loop {
            let evt = crossterm::event::read()?;
            if Self::accept(&evt) {
                return Ok(evt);
            }
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)
        } else {
            crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn only_key_presses_pass_through() {
        assert!(ConsoleDriver::accept(&key(KeyEventKind::Press)));
        assert!(!ConsoleDriver::accept(&key(KeyEventKind::Repeat)));
        assert!(ConsoleDriver::accept(&Event::Resize(80, 24)));
    }

    #[test]
    fn key_releases_are_filtered() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!ConsoleDriver::accept(&release));
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(ConsoleDriver::accept(&mouse));
    }
}
