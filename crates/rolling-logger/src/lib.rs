//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every line to the browser console on wasm32. The buffer is
//! replayed by `dump_recent`, which the app calls from its panic hook.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Bounded log buffer
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Buffered lines under a header, or `None` when nothing was logged
    pub fn report(&self) -> Option<String> {
        let lines = self.lines();
        if lines.is_empty() {
            return None;
        }
        let mut out = format!("[Log] last {} of {} lines before panic:", lines.len(), self.capacity);
        for line in &lines {
            out.push('\n');
            out.push_str(line);
        }
        Some(out)
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn forward(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn forward(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        forward(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Subsequent calls fail with `SetLoggerError`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Write the buffered lines to the console as one error entry
pub fn dump_recent() {
    if let Some(report) = LOGGER.get().and_then(RollingLogger::report) {
        forward(Level::Error, &report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_evicts_oldest() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            logger.push(format!("line {}", i));
        }
        assert_eq!(logger.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_respects_level() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        record_at(&logger, Level::Debug, "hidden");
        record_at(&logger, Level::Info, "[App] mounted");
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO  [App] mounted"));
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let logger = RollingLogger::new(LevelFilter::Trace, 0);
        logger.push("a".to_string());
        logger.push("b".to_string());
        assert_eq!(logger.lines(), vec!["b"]);
    }

    #[test]
    fn test_report_replays_buffer() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        assert_eq!(logger.report(), None);
        record_at(&logger, Level::Info, "[Api] GET /needs/4");
        record_at(&logger, Level::Warn, "[Api] timeout");
        record_at(&logger, Level::Error, "[Api] giving up");
        let report = logger.report().unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "[Log] last 2 of 2 lines before panic:");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("WARN  [Api] timeout"));
        assert!(lines[2].ends_with("ERROR [Api] giving up"));
    }
}
