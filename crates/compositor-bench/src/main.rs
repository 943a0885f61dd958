use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use term_compositor::components::{TextPane, shared};
use term_compositor::drivers::MouseAction;
use term_compositor::ui::UiFrame;
use term_compositor::window::{Window, WindowManager};

#[derive(Parser, Debug)]
#[command(
    name = "compositor-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Composite overlapping windows off-screen while dragging them around"
)]
struct BenchCli {
    /// Number of overlapping windows.
    #[arg(short = 'n', long = "windows", value_name = "N", default_value_t = 8)]
    windows: usize,

    /// Frames to composite.
    #[arg(short = 'f', long = "frames", value_name = "FRAMES", default_value_t = 2_000)]
    frames: u64,

    /// Off-screen surface width.
    #[arg(long = "width", value_name = "COLUMNS", default_value_t = 200)]
    width: u16,

    /// Off-screen surface height.
    #[arg(long = "height", value_name = "ROWS", default_value_t = 60)]
    height: u16,
}

struct BenchConfig {
    windows: usize,
    frames: u64,
    area: Rect,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=256).contains(&cli.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        if cli.frames == 0 {
            return Err("frames must be at least 1".to_string());
        }
        if cli.width < 40 || cli.height < 12 {
            return Err("surface must be at least 40x12".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            frames: cli.frames,
            area: Rect::new(0, 0, cli.width, cli.height),
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

fn build_manager(config: &BenchConfig) -> (WindowManager, Vec<Arc<Window>>) {
    let manager = WindowManager::new();
    manager.set_rect(config.area);
    let windows: Vec<Arc<Window>> = (0..config.windows)
        .map(|idx| {
            let text = format!("window {idx}\n").repeat(12);
            let window = Window::new(shared(TextPane::new(text)));
            let step = idx as u16;
            window.set_position(step.saturating_mul(3) % 120, step.saturating_mul(2) % 30);
            window.set_size(36, 12);
            window.set_title(format!("bench {idx}"));
            window.set_status(format!("{idx}"));
            window
        })
        .collect();
    manager.add(windows.iter().cloned());
    (manager, windows)
}

fn mouse(manager: &WindowManager, kind: MouseEventKind, column: u16, row: u16) {
    let event = MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    manager.handle_mouse(MouseAction::from_kind(kind), &event);
}

/// Raise a window by its title bar, then drag it along a diagonal sweep.
fn drive_gesture(manager: &WindowManager, window: &Window, tick: u64, area: Rect) {
    let rect = window.rect();
    let grab_x = rect.x.saturating_add(rect.width / 2);
    if tick % 32 == 0 {
        mouse(
            manager,
            MouseEventKind::Down(MouseButton::Left),
            grab_x,
            rect.y,
        );
    }
    let phase = (tick % 32) as u16;
    let column = grab_x.saturating_add(phase) % area.width;
    let row = rect.y.saturating_add(phase / 2) % area.height;
    mouse(
        manager,
        MouseEventKind::Drag(MouseButton::Left),
        column,
        row,
    );
    if tick % 32 == 31 {
        mouse(manager, MouseEventKind::Up(MouseButton::Left), column, row);
    }
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let (manager, windows) = build_manager(config);
    let mut buffer = Buffer::empty(config.area);
    let mut stats = BenchStats::new();

    for tick in 0..config.frames {
        let frame_start = Instant::now();
        let target = &windows[(tick / 32) as usize % windows.len()];
        drive_gesture(&manager, target, tick, config.area);
        buffer.reset();
        manager.draw(&mut UiFrame::from_parts(config.area, &mut buffer));
        stats.record_frame(frame_start.elapsed());
    }

    stats.mark_completed();
    stats
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    frame_count: u64,
    total_frame_time: Duration,
    fastest_frame: Duration,
    slowest_frame: Duration,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            frame_count: 0,
            total_frame_time: Duration::ZERO,
            fastest_frame: Duration::MAX,
            slowest_frame: Duration::ZERO,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_frame(&mut self, frame_time: Duration) {
        self.frame_count = self.frame_count.saturating_add(1);
        self.total_frame_time += frame_time;
        self.fastest_frame = self.fastest_frame.min(frame_time);
        self.slowest_frame = self.slowest_frame.max(frame_time);
    }

    fn average_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        (self.total_frame_time.as_secs_f64() / self.frame_count as f64) * 1_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let fps = if elapsed > 0.0 {
            self.frame_count as f64 / elapsed
        } else {
            0.0
        };
        let cells = config.area.width as u64 * config.area.height as u64 * self.frame_count;
        let (best, worst) = if self.frame_count == 0 {
            (0.0, 0.0)
        } else {
            (
                self.fastest_frame.as_secs_f64() * 1_000.0,
                self.slowest_frame.as_secs_f64() * 1_000.0,
            )
        };

        indoc::formatdoc!(
            r#"
            Compositor bench: {windows} windows on {width}x{height}.
            Duration: {elapsed:.2}s | Frames: {frames} | FPS: {fps:.1}
            Avg frame: {avg:.3} ms | Best: {best:.3} ms | Worst: {worst:.3} ms
            Cells composited: {cells}
            "#,
            windows = config.windows,
            width = config.area.width,
            height = config.area.height,
            elapsed = elapsed,
            frames = self.frame_count,
            fps = fps,
            avg = self.average_frame_ms(),
            best = best,
            worst = worst,
            cells = cells,
        )
    }
}
