//! # Ember HAL
//!
//! Debug transport boundary for the Ember logging framework.
//!
//! The logger core renders each event into a bounded buffer and hands the
//! bytes to a [`Transport`]. The transport is the only platform-facing piece
//! of the framework: on hardware it is typically the [`Semihosting`] channel
//! of an attached debugger, while tests use [`CaptureTransport`] and builds
//! that want no output at all use [`NullTransport`].
//!
//! Transports must not allocate and must not block indefinitely; a write is
//! a single synchronous operation expected to return quickly.

#![cfg_attr(not(test), no_std)]

pub mod capture;
pub mod semihosting;

pub use capture::CaptureTransport;
pub use semihosting::Semihosting;

/// A byte sink for rendered log lines.
///
/// Implementations take `&self`; any internal state is the implementor's
/// responsibility to synchronize.
pub trait Transport: Sync {
    /// Write raw bytes to the debug output channel.
    ///
    /// Best-effort: there is no error path. A transport that cannot deliver
    /// the bytes drops them.
    fn write_bytes(&self, bytes: &[u8]);
}

/// Transport that discards all output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn write_bytes(&self, _bytes: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_transport_discards() {
        let t = NullTransport;
        t.write_bytes(b"anything");
    }
}
