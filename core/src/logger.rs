//! # Logger
//!
//! The dispatcher and its configuration state. A [`Logger`] owns the global
//! severity threshold, the quiet flag, the optional clock and transport, the
//! sink table, and the shared line buffer that every dispatch call renders
//! into.
//!
//! A `Logger` can be embedder-owned (exclusive through `&mut self`), but the
//! usual arrangement is the process-wide instance behind a `spin::Mutex`,
//! reached through the free functions below and the logging macros. The
//! mutex brackets the whole dispatch body, so concurrent callers cannot race
//! on the shared buffer or the transport.
//!
//! Logging from inside a sink through the global instance would re-acquire
//! the mutex and deadlock; sinks must not call back into the global logger.

use core::fmt;

use spin::Mutex;

use ember_hal::Transport;

use crate::level::Level;
use crate::linebuf::{LineBuffer, LINE_CAPACITY};
use crate::record::{ClockFn, Record};
use crate::sink::{Sink, SinkTable, SinkTableFull};

/// Dispatcher plus process-wide configuration state.
pub struct Logger {
    level: Level,
    quiet: bool,
    clock: Option<ClockFn>,
    transport: Option<&'static dyn Transport>,
    sinks: SinkTable,
    line: LineBuffer<LINE_CAPACITY>,
}

impl Logger {
    /// Create a logger with default state: threshold `Trace`, not quiet, no
    /// clock, no transport, no sinks.
    pub const fn new() -> Self {
        Self {
            level: Level::Trace,
            quiet: false,
            clock: None,
            transport: None,
            sinks: SinkTable::new(),
            line: LineBuffer::new(),
        }
    }

    /// Set the global minimum severity for the built-in output.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Mute or unmute the built-in output. Registered sinks are unaffected.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Install the clock source used to stamp events.
    pub fn set_clock(&mut self, clock: ClockFn) {
        self.clock = Some(clock);
    }

    /// Install the transport the built-in output writes to.
    pub fn set_transport(&mut self, transport: &'static dyn Transport) {
        self.transport = Some(transport);
    }

    /// Register a sink with its own minimum severity.
    ///
    /// Per-sink thresholds are independent of the global threshold and the
    /// quiet flag. Fails with [`SinkTableFull`] once the table holds
    /// [`MAX_SINKS`](crate::sink::MAX_SINKS) entries.
    pub fn add_sink(
        &mut self,
        sink: &'static dyn Sink,
        min_level: Level,
    ) -> Result<(), SinkTableFull> {
        self.sinks.add(sink, min_level)
    }

    /// Dispatch one event to the built-in output and the registered sinks.
    ///
    /// The built-in output runs when the logger is not quiet and `level`
    /// meets the global threshold; each sink runs when `level` meets its own
    /// threshold. The timestamp is read at most once and shared by all
    /// consumers of the event.
    pub fn dispatch(
        &mut self,
        level: Level,
        file: &'static str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) {
        let mut record = Record::new(level, file, line, args);

        if !self.quiet && level >= self.level {
            record.stamp(self.clock);
            self.line.render(&record);
            if let Some(transport) = self.transport {
                transport.write_bytes(self.line.as_bytes());
            }
        }

        self.sinks.dispatch(&mut record, self.clock);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("quiet", &self.quiet)
            .field("sinks", &self.sinks)
            .finish()
    }
}

// =============================================================================
// GLOBAL INSTANCE
// =============================================================================

/// Process-wide logger. The mutex is the exclusivity guard for the shared
/// line buffer and the transport.
static LOGGER: Mutex<Logger> = Mutex::new(Logger::new());

/// Run `f` with exclusive access to the global logger.
pub fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut LOGGER.lock())
}

/// Set the global minimum severity (convenience wrapper).
pub fn set_level(level: Level) {
    LOGGER.lock().set_level(level);
}

/// Mute or unmute the built-in output (convenience wrapper).
pub fn set_quiet(quiet: bool) {
    LOGGER.lock().set_quiet(quiet);
}

/// Install the clock source (convenience wrapper).
pub fn set_clock(clock: ClockFn) {
    LOGGER.lock().set_clock(clock);
}

/// Install the transport (convenience wrapper).
pub fn set_transport(transport: &'static dyn Transport) {
    LOGGER.lock().set_transport(transport);
}

/// Register a sink on the global logger (convenience wrapper).
pub fn add_sink(sink: &'static dyn Sink, min_level: Level) -> Result<(), SinkTableFull> {
    LOGGER.lock().add_sink(sink, min_level)
}

/// Dispatch through the global logger. The logging macros expand to this.
pub fn dispatch(level: Level, file: &'static str, line: u32, args: fmt::Arguments<'_>) {
    LOGGER.lock().dispatch(level, file, line, args);
}
