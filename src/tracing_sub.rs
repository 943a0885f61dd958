use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Where formatted log lines end up. Use `File` while the alternate screen
/// is active; stderr output would land on top of the windows.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stderr,
    File(Arc<Mutex<File>>),
}

impl LogTarget {
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::File(Arc::new(Mutex::new(file))))
    }
}

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<Mutex<File>>),
    Stderr(io::Stderr),
}

impl DelegatingWriter {
    fn new(target: &LogTarget) -> Self {
        match target {
            LogTarget::File(file) => DelegatingWriter {
                inner: DelegatingInner::File(Arc::clone(file)),
            },
            LogTarget::Stderr => DelegatingWriter {
                inner: DelegatingInner::Stderr(io::stderr()),
            },
        }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.lock().unwrap_or_else(|err| err.into_inner()).write(buf),
            DelegatingInner::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.lock().unwrap_or_else(|err| err.into_inner()).flush(),
            DelegatingInner::Stderr(s) => s.flush(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    target: LogTarget,
}

impl SubscriberMakeWriter {
    pub fn new(target: LogTarget) -> Self {
        Self { target }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new(&self.target)
    }
}

/// Initialize a tracing subscriber that writes to stderr. Safe to call
/// multiple times; subsequent calls are no-ops for the global subscriber.
pub fn init_default() {
    init_with_target(LogTarget::Stderr);
}

/// Initialize a tracing subscriber appending to `path`.
pub fn init_file(path: impl AsRef<Path>) -> io::Result<()> {
    init_with_target(LogTarget::file(path)?);
    Ok(())
}

fn init_with_target(target: LogTarget) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(SubscriberMakeWriter::new(target))
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .try_init();
}
