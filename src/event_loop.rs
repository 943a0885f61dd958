use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Polls an input driver and hands events to a handler on the calling thread.
///
/// The loop never renders on its own; the handler is called with `None`
/// whenever the poll interval elapses without input, which is where callers
/// draw a frame.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Run until the handler returns [`ControlFlow::Quit`] or the driver
    /// fails.
    ///
    /// Each iteration first calls the handler with `None` (the idle tick),
    /// then waits up to the poll interval for input and drains every event
    /// already queued before ticking again, so a burst of mouse moves during
    /// a drag costs one redraw rather than one per event.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                return Ok(());
            }

            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}
