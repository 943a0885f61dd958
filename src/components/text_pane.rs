use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::components::Component;
use crate::drivers::{MouseAction, MouseOutcome};
use crate::region::Region;
use crate::ui::UiFrame;

/// Scrollable, optionally wrapped block of text.
#[derive(Debug)]
pub struct TextPane {
    region: Region,
    text: Text<'static>,
    wrap: bool,
    offset: u16,
    style: Style,
}

impl TextPane {
    pub fn new(text: impl Into<Text<'static>>) -> Self {
        Self {
            region: Region::new(),
            text: text.into(),
            wrap: true,
            offset: 0,
            style: Style::default(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<Text<'static>>) {
        self.text = text.into();
        self.offset = 0;
    }

    pub fn push_line(&mut self, line: impl Into<Line<'static>>) {
        self.text.lines.push(line.into());
    }

    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.text.lines.len().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.offset = (self.offset as i32 + delta).clamp(0, max) as u16;
    }

    fn page(&self) -> i32 {
        self.region.rect().height.max(1) as i32
    }
}

impl Component for TextPane {
    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = self.region.rect();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut paragraph = Paragraph::new(self.text.clone()).style(self.style);
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        frame.render_widget(paragraph.scroll((self.offset, 0)), area);
    }

    fn rect(&self) -> Rect {
        self.region.rect()
    }

    fn set_rect(&mut self, rect: Rect) {
        self.region.set_rect(rect);
    }

    fn focus(&mut self) {
        self.region.focus();
    }

    fn blur(&mut self) {
        self.region.blur();
    }

    fn has_focus(&self) -> bool {
        self.region.has_focus()
    }

    fn focusable(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::PageDown => self.scroll_by(self.page()),
            KeyCode::Home => self.offset = 0,
            _ => return false,
        }
        true
    }

    fn handle_mouse(&mut self, action: MouseAction, event: &MouseEvent) -> MouseOutcome {
        if !self.region.contains(event.column, event.row) {
            return MouseOutcome::ignored();
        }
        match action {
            MouseAction::ScrollUp => self.scroll_by(-1),
            MouseAction::ScrollDown => self.scroll_by(1),
            action if action.is_press() => {
                return MouseOutcome::consumed().with_focus(true);
            }
            _ => return MouseOutcome::ignored(),
        }
        MouseOutcome::consumed()
    }
}
