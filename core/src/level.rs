//! # Severity Levels
//!
//! Ordered severity categories used for filtering, `Trace` lowest through
//! `Fatal` highest.

use core::fmt;

/// Display names, indexed by level discriminant.
const LEVEL_NAMES: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Very fine-grained tracing output.
    Trace = 0,
    /// Diagnostic detail for developers.
    Debug = 1,
    /// Coarse-grained progress messages.
    Info = 2,
    /// Potentially harmful situations.
    Warn = 3,
    /// Errors that still allow the system to continue.
    Error = 4,
    /// Errors after which the system cannot continue.
    Fatal = 5,
}

impl Level {
    /// Create from a raw severity value, `None` if out of range.
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            _ => None,
        }
    }

    /// Raw severity value.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Display name, e.g. `"INFO"`.
    pub const fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Map a `log` facade level onto an Ember level.
    ///
    /// The facade has no `Fatal`; nothing maps to it.
    pub const fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Trace.name(), "TRACE");
        assert_eq!(Level::Info.name(), "INFO");
        assert_eq!(Level::Fatal.name(), "FATAL");
        // Idempotent lookup.
        assert_eq!(Level::Warn.name(), Level::Warn.name());
    }

    #[test]
    fn test_level_from_raw() {
        assert_eq!(Level::from_raw(0), Some(Level::Trace));
        assert_eq!(Level::from_raw(5), Some(Level::Fatal));
        assert_eq!(Level::from_raw(6), None);
    }

    #[test]
    fn test_level_raw_round_trip() {
        for raw in 0..6u8 {
            let level = Level::from_raw(raw).unwrap();
            assert_eq!(level.raw(), raw);
        }
    }

    #[test]
    fn test_level_from_log_facade() {
        assert_eq!(Level::from_log(log::Level::Trace), Level::Trace);
        assert_eq!(Level::from_log(log::Level::Error), Level::Error);
    }
}
