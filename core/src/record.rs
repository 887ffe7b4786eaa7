//! # Log Records
//!
//! One [`Record`] exists per dispatch call. It borrows the caller's message
//! arguments for the duration of the call, carries the source location and
//! severity, and caches the wall-clock timestamp so that every consumer of
//! the event sees the same instant.

use core::fmt;

use crate::level::Level;

/// Clock source: seconds (e.g. UNIX seconds or seconds since boot) used to
/// derive the `HH:MM:SS` stamp. Installed by the embedder.
pub type ClockFn = fn() -> u64;

const SECS_PER_DAY: u64 = 86_400;

/// Wall-clock time of day, second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    /// Hour of day, 0..24.
    pub hour: u8,
    /// Minute of hour, 0..60.
    pub min: u8,
    /// Second of minute, 0..60.
    pub sec: u8,
}

impl Timestamp {
    /// Derive the time of day from a seconds counter.
    pub const fn from_secs(secs: u64) -> Self {
        let day = secs % SECS_PER_DAY;
        Self {
            hour: (day / 3600) as u8,
            min: (day / 60 % 60) as u8,
            sec: (day % 60) as u8,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.min, self.sec)
    }
}

/// A single log event, alive only for the duration of one dispatch call.
///
/// The message is a `fmt::Arguments`, which is `Copy`: each consumer
/// (built-in formatter, every sink) formats it independently from the start,
/// so no consumer observes another's partially-consumed state.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    file: &'static str,
    line: u32,
    args: fmt::Arguments<'a>,
    timestamp: Option<Timestamp>,
}

impl<'a> Record<'a> {
    /// Create a record with the timestamp left unset.
    pub const fn new(
        level: Level,
        file: &'static str,
        line: u32,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            level,
            file,
            line,
            args,
            timestamp: None,
        }
    }

    /// Severity of this event.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Source file that produced this event.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line that produced this event.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The message arguments; format with `write!(.., "{}", record.args())`.
    pub const fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    /// Populate the timestamp from `clock` if not already populated.
    ///
    /// Invariant: the clock is read at most once per record; later calls
    /// reuse the first stamp so every sink sees the same instant. With no
    /// clock installed the stamp is all zeros.
    pub fn stamp(&mut self, clock: Option<ClockFn>) {
        if self.timestamp.is_none() {
            self.timestamp = Some(match clock {
                Some(now) => Timestamp::from_secs(now()),
                None => Timestamp::default(),
            });
        }
    }

    /// Timestamp of this event, if [`stamp`](Self::stamp) has run.
    pub const fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }
}
