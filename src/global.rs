//! The process wide logger used by the `log_*!` macros and the `log` crate
//! facade.
//!
//! It starts out without sinks, so everything logged before [`init`] is
//! dropped. Call [`init`] once at the start of `main`, before other threads
//! log. [`set_level`] and [`set_lock`] may be called from any thread at any
//! time after that.

use std::fmt;
use std::io::Write;

use crate::console::Console;
use crate::level::Level;
use crate::logger::Logger;

lazy_static! {
    static ref LOGGER: Logger = Logger::new();
}

pub fn logger() -> &'static Logger {
    &LOGGER
}

pub fn init(level: Level, console: Console, file: Option<Box<dyn Write + Send>>) {
    LOGGER.init(level, console, file);
}

pub fn set_level(level: Level) {
    LOGGER.set_level(level);
}

pub fn set_lock<F>(lock: F)
where
    F: Fn(bool) + Send + Sync + 'static,
{
    LOGGER.set_lock(lock);
}

pub fn clear_lock() {
    LOGGER.clear_lock();
}

pub fn log(level: Level, file: &str, line: u32, args: fmt::Arguments) {
    LOGGER.log(level, file, line, args);
}

/// Route the `log` crate macros (`log::info!` and friends) to the process
/// wide logger. Fails when another logger was already installed.
pub fn install_log_facade() -> Result<(), log::SetLoggerError> {
    log::set_logger(logger())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::*;
    use std::sync::{Arc, Mutex};
    use termcolor::NoColor;

    // The process wide logger is shared by all tests in this binary, so
    // everything touching it lives in this one test.
    #[test]
    fn process_wide_logger() {
        let console = SharedBuffer::new();
        let file = SharedBuffer::new();
        init(
            Level::Debug,
            Console::writer(NoColor::new(console.clone())),
            Some(Box::new(file.clone())),
        );
        assert_eq!(logger().level(), Level::Debug);

        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        set_lock(move |acquire| recorded.lock().unwrap().push(acquire));

        crate::log_trace!("hidden {}", 1);
        let info_line = line!() + 1;
        crate::log_info!("shown {}", 2);
        set_level(Level::Error);
        crate::log_warn!("hidden {}", 3);
        let fatal_line = line!() + 1;
        crate::log_fatal!("shown {}", 4);
        clear_lock();
        log(Level::Error, "direct.rs", 77, format_args!("shown {}", 5));

        assert_eq!(*calls.lock().unwrap(), vec![true, false, true, false]);

        let console = console.contents();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines.len(), 3, "console: {:?}", console);
        assert!(lines[0].ends_with(&format!("INFO  src/global.rs:{}: shown 2", info_line)));
        assert!(lines[1].ends_with(&format!("FATAL src/global.rs:{}: shown 4", fatal_line)));
        assert!(lines[2].ends_with("ERROR direct.rs:77: shown 5"));
        assert_eq!(file.contents().matches("\r\n").count(), 3);

        install_log_facade().expect("Facade already installed");
        log::error!("from the facade");
        assert!(file.contents().contains(" ERROR src/global.rs:"));
        assert!(file.contents().ends_with(": from the facade\r\n"));
        assert!(install_log_facade().is_err());
    }
}
