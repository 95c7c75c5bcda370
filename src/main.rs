#[macro_use]
extern crate log;

use clap::Parser;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use loglet::{ColorChoice, Console, Level, Logger};

#[derive(Parser, Debug)]
#[clap(
    name = "loglet",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment
)]
/**
Write leveled log lines to the console and a log file.

## Usage examples

    loglet info Service started
      Print one INFO line to stderr.

    loglet --output app.log warn Disk almost full
      Print a WARN line to stderr and append it to app.log.

    tail -f worker.out | loglet --no-console -o worker.log --source worker debug
      Log every line read from stdin as a DEBUG line in worker.log.

    loglet --threshold error info Not shown
      Lines below the threshold are not written anywhere.
*/
struct Options {
    /// Only write lines at or above this level
    #[clap(short, long, default_value = "trace", help_heading = "FILTER")]
    threshold: Level,

    /// Append lines to this log file, created when missing
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT")]
    output: Option<PathBuf>,

    /// Disable console output
    #[clap(long = "no-console", help_heading = "OUTPUT")]
    no_console: bool,

    /// Enable color output
    #[clap(long = "color", help_heading = "OUTPUT")]
    color: bool,

    /// Disable color output
    #[clap(long = "no-color", help_heading = "OUTPUT")]
    no_color: bool,

    /// Prints debug information
    #[clap(long, help_heading = "OUTPUT")]
    debug: bool,

    /// File name printed in each line. Defaults to "loglet", or "stdin" when
    /// reading from stdin
    #[clap(long, help_heading = "SOURCE")]
    source: Option<String>,

    /// Line number printed with a message given as argument. When reading
    /// from stdin the input line number is printed instead
    #[clap(long, help_heading = "SOURCE")]
    line: Option<u32>,

    /// Level of the logged lines
    #[clap(name = "LEVEL")]
    level: Level,

    /// Message to log. When no message is given every line read from stdin
    /// is logged
    #[clap(name = "MESSAGE")]
    message: Vec<String>,
}

impl Options {
    /// Return color config option value
    fn color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        true // By default color is turned on
    }

    fn color_choice(&self) -> ColorChoice {
        if self.color() {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

fn main() {
    let options = Options::parse();
    init_diagnostics(&options);
    debug!("Options: {:?}", options);

    let logger = match build_logger(&options) {
        Ok(logger) => logger,
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        }
    };
    debug!("Logger: {:?}", logger);

    let result = if options.message.is_empty() {
        log_stdin(&logger, &options)
    } else {
        log_message(&logger, &options);
        Ok(1)
    };
    logger.flush();
    match result {
        Ok(count) => debug!("Handled {} line(s)", count),
        Err(e) => {
            error!("Unable to read stdin: {}", e);
            process::exit(1)
        }
    }
}

// Diagnostics for loglet itself go through the `log` crate facade into the
// process wide logger, on stderr only. Warnings and errors are always shown.
fn init_diagnostics(options: &Options) {
    loglet::init(Level::Trace, Console::Stderr(options.color_choice()), None);
    if let Err(error) = loglet::install_log_facade() {
        eprintln!(
            "An error occurred while initializing the logger. \
            Cannot continue.\n{:?}",
            error
        );
        process::exit(1)
    }
    let max_level = if options.debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    log::set_max_level(max_level);
}

fn build_logger(options: &Options) -> Result<Logger, String> {
    let console = if options.no_console {
        Console::Disabled
    } else {
        Console::Stderr(options.color_choice())
    };
    let file: Option<Box<dyn Write + Send>> = match &options.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Unable to open log file '{}': {}", path.display(), e))?;
            Some(Box::new(file))
        }
        None => None,
    };

    let logger = Logger::new();
    logger.init(options.threshold, console, file);
    Ok(logger)
}

fn log_message(logger: &Logger, options: &Options) {
    let source = options.source.as_deref().unwrap_or("loglet");
    let line = options.line.unwrap_or(0);
    logger.log(
        options.level,
        source,
        line,
        format_args!("{}", options.message.join(" ")),
    );
}

fn log_stdin(logger: &Logger, options: &Options) -> io::Result<u32> {
    let source = options.source.as_deref().unwrap_or("stdin");
    let stdin = io::stdin();
    let mut count = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        count += 1;
        logger.log(options.level, source, count, format_args!("{}", line));
    }
    Ok(count)
}

// Print the long version label including the target for which it was built
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\n",
        env!("LOGLET_BUILD_TARGET_TRIPLE")
    )
}

#[cfg(test)]
mod tests {
    use super::Options;
    use clap::Parser;
    use loglet::{ColorChoice, Level};

    #[test]
    fn color_flags() {
        // Both color flags set, but --no-color is leading
        assert!(!Options::parse_from(["loglet", "--color", "--no-color", "info"]).color());

        // Only --color is set
        assert!(Options::parse_from(["loglet", "--color", "info"]).color());

        // Only --no-color is set
        let options = Options::parse_from(["loglet", "--no-color", "info"]);
        assert!(!options.color());
        assert!(matches!(options.color_choice(), ColorChoice::Never));

        // No flags are set
        assert!(Options::parse_from(["loglet", "info"]).color());
    }

    #[test]
    fn defaults() {
        let options = Options::parse_from(["loglet", "warn"]);
        assert_eq!(options.threshold, Level::Trace);
        assert_eq!(options.level, Level::Warn);
        assert!(options.message.is_empty());
        assert!(options.output.is_none());
        assert!(!options.no_console);
    }

    #[test]
    fn message_words() {
        let options = Options::parse_from([
            "loglet",
            "-t",
            "debug",
            "--source",
            "app.c",
            "--line",
            "42",
            "error",
            "disk",
            "full",
        ]);
        assert_eq!(options.threshold, Level::Debug);
        assert_eq!(options.level, Level::Error);
        assert_eq!(options.source.as_deref(), Some("app.c"));
        assert_eq!(options.line, Some(42));
        assert_eq!(options.message, vec!["disk", "full"]);
    }

    #[test]
    fn invalid_level() {
        assert!(Options::try_parse_from(["loglet", "loud", "message"]).is_err());
        assert!(Options::try_parse_from(["loglet", "-t", "verbose", "info"]).is_err());
    }
}
