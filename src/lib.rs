//! Loglet is a small leveled logger.
//!
//! Every line passing the threshold is written to a colored console sink
//! (stderr by default) and, when given, to a plain text file sink:
//!
//! ```text
//! [13:04:05] INFO  src/main.rs:42: hello world
//! [2024-03-09 13:04:05] INFO  src/main.rs:42: hello world
//! ```
//!
//! ```rust,no_run
//! use loglet::{log_info, Console, Level};
//!
//! loglet::init(Level::Info, Console::default(), None);
//! log_info!("hello {}", "world");
//! ```

#[macro_use]
extern crate lazy_static;

mod console;
mod formatter;
mod global;
mod level;
mod lock;
mod logger;
mod macros;
mod record;

#[cfg(test)]
mod test;

pub use console::Console;
pub use formatter::{formatted_console_line, formatted_file_line};
pub use global::{clear_lock, init, install_log_facade, log, logger, set_level, set_lock};
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
pub use record::Record;
pub use termcolor::ColorChoice;
