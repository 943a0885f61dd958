use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;

use term_compositor::components::{TextPane, shared};
use term_compositor::drivers::console::ConsoleDriver;
use term_compositor::runner::run_compositor;
use term_compositor::tracing_sub;
use term_compositor::window::{Window, WindowGeometry, WindowManager};

const HELP: &str = indoc! {"
    Drag the top edge to move this window.
    Drag a side, the bottom edge or a corner to resize it.
    Click anywhere inside to bring it to the front.

    Up/Down/PgUp/PgDn scroll the focused window.
    Ctrl-Q or Esc quits.
"};

#[derive(Parser, Debug)]
#[command(
    name = "term-compositor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating-window compositor demo"
)]
struct Cli {
    /// Number of cascaded windows to open when no --window is given.
    #[arg(short = 'n', long = "windows", value_name = "N", default_value_t = 3)]
    windows: usize,

    /// Open a window at an explicit position and size. Repeatable.
    #[arg(short = 'w', long = "window", value_name = "X,Y,WIDTHxHEIGHT")]
    geometry: Vec<WindowGeometry>,

    /// Lay windows out against the whole screen instead of the manager frame.
    #[arg(long)]
    fullscreen: bool,

    /// Append debug logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Idle redraw interval.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        tracing_sub::init_file(path)?;
    }

    let manager = WindowManager::new();
    manager.set_fullscreen(cli.fullscreen);
    manager.add(build_windows(&cli));

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = terminal::disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err);
        }
    };

    let result = run_compositor(
        &mut terminal,
        ConsoleDriver::new(),
        &manager,
        Duration::from_millis(cli.tick_ms),
        |event, _| {
            matches!(
                event,
                Some(Event::Key(key))
                    if key.code == KeyCode::Esc
                        || (key.code == KeyCode::Char('q')
                            && key.modifiers.contains(KeyModifiers::CONTROL))
            )
        },
    );

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn build_windows(cli: &Cli) -> Vec<Arc<Window>> {
    if !cli.geometry.is_empty() {
        return cli
            .geometry
            .iter()
            .enumerate()
            .map(|(idx, geometry)| {
                let window = demo_window(idx);
                geometry.apply_to(&window);
                window
            })
            .collect();
    }

    (0..cli.windows)
        .map(|idx| {
            let window = demo_window(idx);
            let step = idx as u16;
            window.set_position(2 + step * 6, 1 + step * 3);
            window.set_size(44, 11);
            window
        })
        .collect()
}

fn demo_window(idx: usize) -> Arc<Window> {
    let window = Window::new(shared(TextPane::new(HELP)));
    window.set_title(format!("window {}", idx + 1));
    window.set_status(format!("#{}", idx + 1));
    window.set_status_alignment(Alignment::Left);
    window
}
