//! Console Logger
//!
//! `log` backend that writes to the browser console, tagging each line with
//! the last segment of the record's target (`[app] ...`).

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Debug builds log at `Debug`, release at `Info`.
pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_line(target: &str, message: &str) -> String {
    let tag = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", tag, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_target_segment() {
        assert_eq!(
            format_line("renovation_tracker_ui::components::dialog", "opened"),
            "[dialog] opened"
        );
    }

    #[test]
    fn test_format_line_plain_target() {
        assert_eq!(format_line("app", "Loaded 30 items"), "[app] Loaded 30 items");
    }
}
