use crossterm::event::{MouseButton, MouseEventKind};

/// Closed set of mouse actions the compositor reacts to.
///
/// Positions travel alongside in the crossterm `MouseEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    LeftDown,
    LeftUp,
    MiddleDown,
    MiddleUp,
    RightDown,
    RightUp,
    Move,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

impl MouseAction {
    pub fn from_kind(kind: MouseEventKind) -> Self {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => MouseAction::LeftDown,
            MouseEventKind::Down(MouseButton::Middle) => MouseAction::MiddleDown,
            MouseEventKind::Down(MouseButton::Right) => MouseAction::RightDown,
            MouseEventKind::Up(MouseButton::Left) => MouseAction::LeftUp,
            MouseEventKind::Up(MouseButton::Middle) => MouseAction::MiddleUp,
            MouseEventKind::Up(MouseButton::Right) => MouseAction::RightUp,
            MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Move,
            MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            MouseEventKind::ScrollLeft => MouseAction::ScrollLeft,
            MouseEventKind::ScrollRight => MouseAction::ScrollRight,
        }
    }

    /// Any button going down.
    pub fn is_press(self) -> bool {
        matches!(
            self,
            MouseAction::LeftDown | MouseAction::MiddleDown | MouseAction::RightDown
        )
    }
}

/// Result of offering a mouse event to a handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseOutcome {
    /// The handler used the event; it should not propagate further.
    pub consumed: bool,
    /// The handler wants subsequent mouse events routed to it directly.
    pub capture: bool,
    /// The handler asks to become the keyboard focus owner.
    pub focus: bool,
}

impl MouseOutcome {
    pub const fn ignored() -> Self {
        Self {
            consumed: false,
            capture: false,
            focus: false,
        }
    }

    pub const fn consumed() -> Self {
        Self {
            consumed: true,
            capture: false,
            focus: false,
        }
    }

    pub const fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub const fn with_focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }
}
