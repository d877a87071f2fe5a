//! Console Logger
//!
//! A `log` backend for the browser. Records are stamped with local time and
//! written to the matching `console.*` method; off the web (tests, native
//! tools) they go to stderr instead.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that formats `[HH:MM:SS.mmm LEVEL target] message`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Render one line; `time` is passed in so formatting stays deterministic.
pub fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{} {:<5} {}] {}", time, level, target, message)
}

fn now() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::log_1(&value),
        Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("10:04:05.123", Level::Warn, "wishlist_core::http", "slow");
        assert_eq!(line, "[10:04:05.123 WARN  wishlist_core::http] slow");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_timestamp_shape() {
        let stamp = now();
        assert_eq!(stamp.len(), "00:00:00.000".len());
        assert_eq!(stamp.as_bytes()[8], b'.');
    }
}
