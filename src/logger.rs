use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use termcolor::WriteColor;

use crate::console::Console;
use crate::formatter::{formatted_console_line, formatted_file_line};
use crate::level::Level;
use crate::lock::{LockFn, LockGuard};
use crate::record::Record;

struct Sinks {
    console: Option<Box<dyn WriteColor + Send>>,
    file: Option<Box<dyn Write + Send>>,
}

/// A leveled logger writing to an optional console and an optional file.
///
/// A new logger writes nothing until [`Logger::init`] configures a sink.
/// The threshold starts at [`Level::Trace`], so every level passes.
///
/// Each emission takes an internal mutex around both sink writes, so lines
/// from concurrent threads never interleave. The optional lock callback set
/// with [`Logger::set_lock`] is called around that, for callers that share
/// a sink with other code and need their own lock held while it's written.
pub struct Logger {
    threshold: AtomicU8,
    // Any sink configured. Read without taking the sinks mutex.
    active: AtomicBool,
    sinks: Mutex<Sinks>,
    lock: RwLock<Option<LockFn>>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            threshold: AtomicU8::new(Level::Trace as u8),
            active: AtomicBool::new(false),
            sinks: Mutex::new(Sinks {
                console: None,
                file: None,
            }),
            lock: RwLock::new(None),
        }
    }

    /// Set the threshold and replace both sinks.
    ///
    /// The file sink is written as given. The logger never opens or closes
    /// files, the caller owns it.
    pub fn init(&self, level: Level, console: Console, file: Option<Box<dyn Write + Send>>) {
        let mut sinks = self.sinks();
        sinks.console = console.into_sink();
        sinks.file = file;
        self.active
            .store(sinks.console.is_some() || sinks.file.is_some(), Ordering::Release);
        self.threshold.store(level as u8, Ordering::Release);
    }

    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_lock<F>(&self, lock: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        *self.lock.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(lock));
    }

    pub fn clear_lock(&self) {
        *self.lock.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Would a line at `level` be written anywhere?
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 >= self.threshold.load(Ordering::Acquire) && self.active.load(Ordering::Acquire)
    }

    /// Write a line to every configured sink, if `level` passes the
    /// threshold. Write errors are ignored per sink.
    #[inline]
    pub fn log(&self, level: Level, file: &str, line: u32, args: fmt::Arguments) {
        if !self.enabled(level) {
            return;
        }
        self.emit(&Record::new(level, file, line, args));
    }

    pub fn flush(&self) {
        let mut sinks = self.sinks();
        if let Some(console) = sinks.console.as_mut() {
            let _ = console.flush();
        }
        if let Some(file) = sinks.file.as_mut() {
            let _ = file.flush();
        }
    }

    fn emit(&self, record: &Record) {
        let _lock = LockGuard::acquire(self.lock_fn());
        let mut sinks = self.sinks();
        if let Some(console) = sinks.console.as_mut() {
            let _ = formatted_console_line(&mut **console, record);
        }
        if let Some(file) = sinks.file.as_mut() {
            let _ = formatted_file_line(&mut **file, record);
        }
    }

    fn lock_fn(&self) -> Option<LockFn> {
        self.lock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // A panic inside a writer must not stop all further logging.
    fn sinks(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("active", &self.active.load(Ordering::Acquire))
            .finish()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        if !Logger::enabled(self, level) {
            return;
        }
        let file = record.file().unwrap_or_else(|| record.target());
        self.emit(&Record::new(
            level,
            file,
            record.line().unwrap_or(0),
            *record.args(),
        ));
    }

    fn flush(&self) {
        Logger::flush(self)
    }
}
