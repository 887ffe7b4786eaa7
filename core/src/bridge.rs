//! # `log` Facade Bridge
//!
//! Routes records from the [`log`] crate into the Ember dispatcher, so code
//! written against the facade (drivers, vendored libraries) lands in the
//! same sinks and transport as native `ember_log!` calls.
//!
//! Filtering is left to the dispatcher: `enabled` is permissive and the
//! facade max level is opened up at init. The facade has no `Fatal`, so
//! bridged records never map to it.

use log::{LevelFilter, Metadata, Record as FacadeRecord};

use crate::level::Level;
use crate::logger;

/// File name reported when the facade record carries no location.
const UNKNOWN_FILE: &str = "<unknown>";

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl log::Log for Bridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &FacadeRecord<'_>) {
        let level = Level::from_log(record.level());
        let file = record.file_static().unwrap_or(UNKNOWN_FILE);
        let line = record.line().unwrap_or(0);
        logger::dispatch(level, file, line, *record.args());
    }

    fn flush(&self) {}
}

/// Install the bridge as the process-wide `log` logger.
///
/// Calling this more than once is harmless: only the first call installs a
/// logger, later calls' errors are ignored (multi-core init paths hit this).
pub fn init() {
    let _ = log::set_logger(&BRIDGE);
    log::set_max_level(LevelFilter::Trace);
}
