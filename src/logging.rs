//! Console logging setup.

use log::{info, Level};
use rolling_logger::{RollingLogger, Sink};
use shelf_core::ShelfConfig;
use wasm_bindgen::JsValue;

/// Forwards records to the browser console at the matching level
struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let msg = JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }
}

/// Install the logger; its ring buffer backs the activity panel
pub fn init(config: &ShelfConfig) -> Option<&'static RollingLogger> {
    match RollingLogger::new(config.log_capacity, config.level_filter(), ConsoleSink).init() {
        Ok(logger) => {
            info!("Logging at {} (keeping {} records)", config.log_level, config.log_capacity);
            Some(logger)
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
            None
        }
    }
}
