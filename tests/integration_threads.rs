use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use term_compositor::components::{TextPane, shared};
use term_compositor::drivers::MouseAction;
use term_compositor::ui::UiFrame;
use term_compositor::window::{Window, WindowManager};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn manager_and_windows_are_send_and_sync() {
    assert_send_sync::<WindowManager>();
    assert_send_sync::<Window>();
    assert_send_sync::<Arc<Window>>();
}

fn press(manager: &WindowManager, column: u16, row: u16) {
    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Drag(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        manager.handle_mouse(MouseAction::from_kind(kind), &event);
    }
}

#[test]
fn drawing_while_another_thread_adds_and_clicks() {
    let manager = WindowManager::new();
    manager.set_rect(Rect::new(0, 0, 60, 20));
    let done = AtomicBool::new(false);

    let frames = thread::scope(|scope| {
        let painter = scope.spawn(|| {
            let area = Rect::new(0, 0, 60, 20);
            let mut frames = 0usize;
            while !done.load(Ordering::Acquire) || frames == 0 {
                let mut buf = Buffer::empty(area);
                manager.draw(&mut UiFrame::from_parts(area, &mut buf));
                frames += 1;
            }
            frames
        });

        for i in 0..40u16 {
            let window = Window::new(shared(TextPane::new(format!("w{i}"))));
            window.set_position(i % 30, i % 10);
            window.set_size(12, 6);
            manager.add([window]);
            press(&manager, (i % 30) + 3, (i % 10) + 2);
        }
        done.store(true, Ordering::Release);
        painter.join().unwrap()
    });

    assert!(frames > 0);
    assert_eq!(manager.len(), 40);
    let windows = manager.windows();
    assert!(windows.iter().all(|w| w.drag_axis() == (0, 0)));
    assert!(windows.iter().all(|w| w.drag_grab().is_none()));
    // the last press landed inside the last added window and raised it
    assert!(windows.last().unwrap().has_focus());
    assert_eq!(windows.iter().filter(|w| w.has_focus()).count(), 1);
}
