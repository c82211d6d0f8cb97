//! Console Logger
//!
//! A `log` backend for browser apps: every enabled record becomes one
//! timestamped line on the console, routed to the method matching its level.

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger tagged with the app name
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
        }
    }

    /// Line written for `record` at time `at`
    pub fn format_line<Tz>(&self, record: &Record, at: DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "[{}] {} {} {}: {}",
            at.format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record, chrono::Local::now());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("items").build()
    }

    #[test]
    fn test_level_filtering() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Warn);
        assert!(logger.enabled(&metadata(Level::Error)));
        assert!(logger.enabled(&metadata(Level::Warn)));
        assert!(!logger.enabled(&metadata(Level::Info)));
        assert!(!logger.enabled(&metadata(Level::Debug)));
    }

    #[test]
    fn test_line_format() {
        let logger = ConsoleLogger::new("ItemCards", LevelFilter::Debug);
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 3).unwrap();
        let record = Record::builder()
            .level(Level::Error)
            .target("items")
            .args(format_args!("Error fetching data: offline"))
            .build();

        assert_eq!(
            logger.format_line(&record, at),
            "[08:05:03.000] ItemCards ERROR items: Error fetching data: offline"
        );
    }

    #[test]
    fn test_second_init_fails() {
        init_logger("Global", LevelFilter::Debug).expect("logger already set");
        log::info!(target: "bootstrap", "mounted");
        assert!(init_logger("Again", LevelFilter::Info).is_err());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
