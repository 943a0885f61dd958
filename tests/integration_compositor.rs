use std::sync::Arc;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use term_compositor::components::{TextPane, shared};
use term_compositor::drivers::MouseAction;
use term_compositor::ui::UiFrame;
use term_compositor::window::{Window, WindowManager};

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 60,
    height: 20,
};

fn pane_window(fill: char, x: u16, y: u16, width: u16, height: u16) -> Arc<Window> {
    let line: String = std::iter::repeat_n(fill, width.saturating_sub(2) as usize).collect();
    let text = vec![line; height.saturating_sub(2) as usize].join("\n");
    let window = Window::new(shared(TextPane::new(text)));
    window.set_position(x, y);
    window.set_size(width, height);
    window
}

fn render(manager: &WindowManager) -> Buffer {
    let mut buf = Buffer::empty(SCREEN);
    manager.draw(&mut UiFrame::from_parts(SCREEN, &mut buf));
    buf
}

fn left_down(manager: &WindowManager, column: u16, row: u16) -> bool {
    let event = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    manager
        .handle_mouse(MouseAction::from_kind(event.kind), &event)
        .consumed
}

fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
    buf.cell((x, y)).unwrap().symbol().to_string()
}

#[test]
fn three_windows_cycle_through_the_front() {
    let manager = WindowManager::new();
    manager.set_rect(SCREEN);
    let a = pane_window('a', 0, 0, 12, 6);
    let b = pane_window('b', 4, 2, 12, 6);
    let c = pane_window('c', 8, 3, 12, 6);
    manager.add([Arc::clone(&a), Arc::clone(&b), Arc::clone(&c)]);

    // (10, 4) lies inside the interiors of all three windows
    assert_eq!(symbol(&render(&manager), 10, 4), "c");

    assert!(left_down(&manager, 2, 2));
    assert_eq!(symbol(&render(&manager), 10, 4), "a");

    assert!(left_down(&manager, 6, 6));
    assert_eq!(symbol(&render(&manager), 10, 4), "b");

    let order = manager.windows();
    assert!(Arc::ptr_eq(&order[0], &c));
    assert!(Arc::ptr_eq(&order[1], &a));
    assert!(Arc::ptr_eq(&order[2], &b));
    assert!(b.has_focus());
    assert!(!a.has_focus());
    assert!(!c.has_focus());
}

#[test]
fn hidden_windows_are_skipped_by_hit_testing_and_drawing() {
    let manager = WindowManager::new();
    manager.set_rect(SCREEN);
    let back = pane_window('x', 0, 0, 12, 6);
    let front = pane_window('y', 0, 0, 12, 6);
    manager.add([Arc::clone(&back), Arc::clone(&front)]);
    front.hide();

    assert_eq!(symbol(&render(&manager), 3, 3), "x");
    assert!(left_down(&manager, 3, 3));
    assert!(back.has_focus());
    assert!(Arc::ptr_eq(&manager.windows()[1], &back));
}

#[test]
fn fullscreen_flag_takes_over_until_cleared() {
    let manager = WindowManager::new();
    manager.set_rect(SCREEN);
    let normal = pane_window('n', 30, 10, 12, 6);
    let modal = pane_window('m', 0, 0, 12, 6);
    modal.set_fullscreen(true);
    manager.add([Arc::clone(&modal), Arc::clone(&normal)]);

    let buf = render(&manager);
    assert_eq!(modal.rect(), SCREEN);
    assert_eq!(symbol(&buf, 0, 0), "┌");
    assert_eq!(symbol(&buf, 2, 2), "m");
    assert_eq!(symbol(&buf, 30, 10), " ");
    assert!(Arc::ptr_eq(&manager.window_at(31, 11).unwrap(), &modal));

    modal.set_fullscreen(false);
    let buf = render(&manager);
    assert_eq!(symbol(&buf, 30, 10), "┌");
    assert_eq!(symbol(&buf, 31, 11), "n");
}

#[test]
fn status_line_sits_on_top_of_content() {
    let manager = WindowManager::new();
    manager.set_rect(SCREEN);
    let w = pane_window('z', 0, 0, 14, 5);
    w.set_status("done");
    manager.add([Arc::clone(&w)]);
    let buf = render(&manager);
    let status: String = (9..13).map(|x| symbol(&buf, x, 4)).collect();
    assert_eq!(status, "done");
    assert_eq!(symbol(&buf, 13, 4), "┘");
}

#[test]
fn manager_nests_inside_a_window() {
    let inner = WindowManager::new();
    let child = pane_window('k', 2, 2, 10, 5);
    inner.add([Arc::clone(&child)]);

    let outer = WindowManager::new();
    outer.set_rect(SCREEN);
    let host = Window::new(shared(inner));
    host.set_size(30, 12);
    outer.add([Arc::clone(&host)]);

    let buf = render(&outer);
    // host inner area starts at (1, 1); child sits 2 cells further in
    assert_eq!(child.rect(), Rect::new(3, 3, 10, 5));
    assert_eq!(symbol(&buf, 3, 3), "┌");
    assert_eq!(symbol(&buf, 4, 4), "k");

    assert!(left_down(&outer, 5, 5));
    assert!(host.has_focus());
    assert!(child.has_focus());
}

#[test]
fn clear_drops_every_window() {
    let manager = WindowManager::new();
    manager.set_rect(SCREEN);
    manager.add([pane_window('a', 0, 0, 8, 4), pane_window('b', 10, 0, 8, 4)]);
    assert_eq!(manager.len(), 2);
    manager.clear();
    assert!(manager.is_empty());
    assert_eq!(symbol(&render(&manager), 0, 0), " ");
    assert!(!left_down(&manager, 1, 1));
}
