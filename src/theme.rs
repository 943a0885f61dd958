use ratatui::style::{Color, Modifier, Style};

// Centralized theme colors shared by decorators, regions and status lines.

pub fn window_border() -> Color {
    Color::White
}

pub fn window_border_focused() -> Color {
    Color::LightCyan
}

pub fn window_title() -> Color {
    Color::White
}

pub fn window_background() -> Color {
    Color::Reset
}

pub fn status_fg() -> Color {
    Color::Gray
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(window_border_focused())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(window_border())
    }
}

pub fn title_style(focused: bool) -> Style {
    let style = Style::default().fg(window_title());
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
