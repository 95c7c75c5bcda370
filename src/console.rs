use std::fmt;
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Where console lines go.
///
/// `Stderr` is the default. `Disabled` turns the console sink off, which is
/// different from passing no console at all.
pub enum Console {
    Stderr(ColorChoice),
    Writer(Box<dyn WriteColor + Send>),
    Disabled,
}

impl Console {
    /// Use any color aware writer as console, for example
    /// `termcolor::Ansi::new(writer)` to always get color escapes or
    /// `termcolor::NoColor::new(writer)` to never get them.
    pub fn writer<W: WriteColor + Send + 'static>(writer: W) -> Self {
        Console::Writer(Box::new(writer))
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Console::Disabled)
    }

    pub(crate) fn into_sink(self) -> Option<Box<dyn WriteColor + Send>> {
        match self {
            Console::Stderr(choice) => Some(Box::new(StandardStream::stderr(choice))),
            Console::Writer(writer) => Some(writer),
            Console::Disabled => None,
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::Stderr(ColorChoice::Always)
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Console::Stderr(choice) => write!(f, "Stderr({:?})", choice),
            Console::Writer(_) => write!(f, "Writer"),
            Console::Disabled => write!(f, "Disabled"),
        }
    }
}
