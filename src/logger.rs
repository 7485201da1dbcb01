//! Console Logger
//!
//! Routes the `log` facade to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend writing through `web_sys::console`
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("{} {}", record.level(), record.args());
        match record.level() {
            Level::Error => web_sys::console::error_1(&message.into()),
            Level::Warn => web_sys::console::warn_1(&message.into()),
            Level::Info => web_sys::console::info_1(&message.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message.into()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; a second call only adjusts the level
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        web_sys::console::warn_1(&"[LOG] Logger already installed".into());
    }
    log::set_max_level(level);
}
