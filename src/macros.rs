//! Leveled logging macros.
//!
//! `log_trace!` to `log_fatal!` write to the process wide logger,
//! `logger_trace!` to `logger_fatal!` to a given [`Logger`](crate::Logger).
//! All of them report the file and line of the macro call.

#[macro_export]
macro_rules! log_at {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log($lvl, file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_trace { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Trace, $($arg)+) } }
#[macro_export]
macro_rules! log_debug { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Debug, $($arg)+) } }
#[macro_export]
macro_rules! log_info  { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Info, $($arg)+) } }
#[macro_export]
macro_rules! log_warn  { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Warn, $($arg)+) } }
#[macro_export]
macro_rules! log_error { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Error, $($arg)+) } }
#[macro_export]
macro_rules! log_fatal { ($($arg:tt)+) => { $crate::log_at!($crate::Level::Fatal, $($arg)+) } }

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {
        $logger.log($lvl, file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Trace, $($arg)+) } }
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Debug, $($arg)+) } }
#[macro_export]
macro_rules! logger_info  { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Info, $($arg)+) } }
#[macro_export]
macro_rules! logger_warn  { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Warn, $($arg)+) } }
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Error, $($arg)+) } }
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Fatal, $($arg)+) } }
