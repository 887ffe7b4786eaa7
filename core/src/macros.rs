//! # Logging Macros
//!
//! Call-site macros that capture `file!()`/`line!()` and dispatch through
//! the global logger. `ember_log!` takes an explicit level; the per-level
//! macros are the usual shorthands.

/// Log at an explicit level through the global logger.
#[macro_export]
macro_rules! ember_log {
    ($level:expr, $($arg:tt)*) => {
        $crate::dispatch($level, file!(), line!(), format_args!($($arg)*))
    };
}

/// Log at `Trace` level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Trace, $($arg)*) };
}

/// Log at `Debug` level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Debug, $($arg)*) };
}

/// Log at `Info` level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Info, $($arg)*) };
}

/// Log at `Warn` level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Warn, $($arg)*) };
}

/// Log at `Error` level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Error, $($arg)*) };
}

/// Log at `Fatal` level.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => { $crate::ember_log!($crate::Level::Fatal, $($arg)*) };
}

#[cfg(test)]
mod tests {
    use ember_hal::CaptureTransport;

    use crate::{set_level, set_quiet, set_transport, with_logger, Level};

    // The one test that mutates the global logger; every other test in the
    // crate works on its own `Logger` instance to stay independent.
    #[test]
    fn test_global_logger_and_macros() {
        static CAP: CaptureTransport = CaptureTransport::new();

        set_transport(&CAP);
        set_level(Level::Info);
        set_quiet(false);
        CAP.clear();

        crate::debug!("filtered out");
        assert!(CAP.is_empty());

        crate::info!("x={}", 5);
        CAP.with_bytes(|bytes| {
            assert!(bytes.starts_with(b"00:00:00 INFO "));
            assert!(bytes.ends_with(b": x=5\n"));
            // file!() of this test file.
            let line = core::str::from_utf8(bytes).unwrap();
            assert!(line.contains("macros.rs:"));
        });

        with_logger(|logger| logger.set_quiet(true));
        CAP.clear();
        crate::error!("muted");
        assert!(CAP.is_empty());
        with_logger(|logger| logger.set_quiet(false));
    }
}
