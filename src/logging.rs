#![cfg(feature = "std")]

//! Log records tagged with the module that emitted them.

use std::env;
use std::fmt::Display;
use std::io::Write;

use log::{Level, LevelFilter, Metadata, Record};

/// Stream that receives log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    Stderr,
}

impl LogSink {
    /// Console play owns stdout, so its logs go to stderr. The HTTP server
    /// prints nothing else and logs to stdout.
    pub fn for_mode(http: bool) -> Self {
        if http {
            LogSink::Stdout
        } else {
            LogSink::Stderr
        }
    }
}

struct GameLogger {
    sink: LogSink,
}

/// `LEVEL [module] message`, with the crate prefix stripped from the target.
fn format_line(level: Level, target: &str, args: &dyn Display) -> String {
    let module = target.strip_prefix("battleship::").unwrap_or(target);
    format!("{:<5} [{}] {}", level, module, args)
}

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), record.args());
        let _ = match self.sink {
            LogSink::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            LogSink::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
    }

    fn flush(&self) {
        let _ = match self.sink {
            LogSink::Stdout => std::io::stdout().flush(),
            LogSink::Stderr => std::io::stderr().flush(),
        };
    }
}

/// Install the logger on `sink`, with a level taken from the `BATTLESHIP_LOG`
/// environment variable. Defaults to `info` if unset or invalid. Only the
/// first call has any effect.
pub fn init_logging(sink: LogSink) {
    let level = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let logger: &'static GameLogger = Box::leak(Box::new(GameLogger { sink }));
    let _ = log::set_logger(logger).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate_prefix() {
        assert_eq!(
            format_line(Level::Info, "battleship::game", &"ship destroyed"),
            "INFO  [game] ship destroyed"
        );
        assert_eq!(
            format_line(Level::Warn, "hyper::proto", &"closed"),
            "WARN  [hyper::proto] closed"
        );
    }

    #[test]
    fn test_sink_follows_mode() {
        assert_eq!(LogSink::for_mode(true), LogSink::Stdout);
        assert_eq!(LogSink::for_mode(false), LogSink::Stderr);
    }
}
