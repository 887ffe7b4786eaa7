//! # Sink Table
//!
//! Registered destinations for log events beyond the built-in transport.
//! Each entry pairs a sink with its own minimum severity; the table has a
//! fixed compile-time capacity and no removal operation. Registration order
//! determines fan-out order.

use heapless::Vec;
use static_assertions::const_assert;

use crate::level::Level;
use crate::record::{ClockFn, Record};

/// Maximum number of registered sinks.
pub const MAX_SINKS: usize = 32;

const_assert!(MAX_SINKS > 0);

/// A destination for log events.
///
/// The implementor's own state stands in for the opaque context pointer of
/// C-style logger callbacks; sinks needing mutable state use interior
/// mutability and synchronize it themselves.
pub trait Sink: Sync {
    /// Deliver one event. The record is already stamped.
    fn log(&self, record: &Record<'_>);
}

/// One occupied table slot.
#[derive(Clone, Copy)]
struct SinkEntry {
    sink: &'static dyn Sink,
    min_level: Level,
}

/// Error returned when registering into a full table.
///
/// No mutation has taken place; previously registered sinks keep their
/// slots and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkTableFull;

/// Fixed-capacity, ordered sink table.
///
/// Slots are densely packed: entries are appended in registration order and
/// never cleared or reordered.
#[derive(Default)]
pub struct SinkTable {
    entries: Vec<SinkEntry, MAX_SINKS>,
}

impl SinkTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a sink with its minimum severity.
    pub fn add(&mut self, sink: &'static dyn Sink, min_level: Level) -> Result<(), SinkTableFull> {
        self.entries
            .push(SinkEntry { sink, min_level })
            .map_err(|_| SinkTableFull)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no sink is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `record` to every sink whose threshold it meets, in
    /// registration order.
    ///
    /// The record is stamped lazily, before the first sink that fires; if no
    /// sink fires (and the built-in output was gated off) the clock is never
    /// read.
    pub fn dispatch(&self, record: &mut Record<'_>, clock: Option<ClockFn>) {
        for entry in &self.entries {
            if record.level() >= entry.min_level {
                record.stamp(clock);
                entry.sink.log(record);
            }
        }
    }
}

impl core::fmt::Debug for SinkTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SinkTable")
            .field("len", &self.entries.len())
            .field("capacity", &MAX_SINKS)
            .finish()
    }
}
