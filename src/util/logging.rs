//! Diagnostics go through the `log` facade. C hosts that never install a
//! logger get `ConsoleLogger` from `glc_context_create`; hosts with their own
//! `log` backend keep it. Nothing the cache logs changes its behavior.

use std::sync::Once;

/// Terse stdout logger for hosts that don't install their own.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        println!("[glcache {}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Install the console logger once at `Info`, which keeps the row-length
/// notice and fatal errors but not the per-call unmanaged hits.
pub fn init_logger() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    });
}
