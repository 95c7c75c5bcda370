//! Line layouts for the two sinks.
//!
//! Console:
//!
//! ```text
//! [HH:MM:SS] <color>LEVEL <gray>file:line:<reset> message\n
//! ```
//!
//! File:
//!
//! ```text
//! [YYYY-MM-DD HH:MM:SS] LEVEL file:line: message\r\n
//! ```
//!
//! The file sink always ends lines with `\r\n`, also on Unix, because existing
//! log readers expect it.

use std::io::{self, Write};
use termcolor::WriteColor;

use crate::record::Record;

const MUTED: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

pub const CONSOLE_TIME_FORMAT: &str = "%H:%M:%S";
pub const FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write one console line. Color escapes are only written when the writer
/// supports color, the layout is otherwise the same.
pub fn formatted_console_line<W: WriteColor + ?Sized>(out: &mut W, record: &Record) -> io::Result<()> {
    let color = out.supports_color();
    write!(out, "[{}] ", record.time.format(CONSOLE_TIME_FORMAT))?;
    if color {
        write!(out, "{}", record.level.ansi_color())?;
    }
    write!(out, "{:<5} ", record.level)?;
    if color {
        write!(out, "{}", MUTED)?;
    }
    write!(out, "{}:{}:", record.file, record.line)?;
    if color {
        write!(out, "{}", RESET)?;
    }
    write!(out, " {}", record.args)?;
    writeln!(out)?;
    out.flush()
}

pub fn formatted_file_line<W: Write + ?Sized>(out: &mut W, record: &Record) -> io::Result<()> {
    write!(
        out,
        "[{}] {:<5} {}:{}: {}\r\n",
        record.time.format(FILE_TIME_FORMAT),
        record.level,
        record.file,
        record.line,
        record.args
    )?;
    out.flush()
}
