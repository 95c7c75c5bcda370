use chrono::{DateTime, Local};
use std::fmt;

use crate::level::Level;

/// One emission, built at the call site and rendered to every active sink
/// before the call returns. Never stored.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    pub level: Level,
    /// Captured once per emission so both sinks print the same time.
    pub time: DateTime<Local>,
    pub file: &'a str,
    pub line: u32,
    pub args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, file: &'a str, line: u32, args: fmt::Arguments<'a>) -> Self {
        Self::at(Local::now(), level, file, line, args)
    }

    pub fn at(
        time: DateTime<Local>,
        level: Level,
        file: &'a str,
        line: u32,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Record {
            level,
            time,
            file,
            line,
            args,
        }
    }
}
