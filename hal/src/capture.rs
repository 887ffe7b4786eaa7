//! # Capture Transport
//!
//! In-memory transport for tests: written bytes accumulate in a bounded
//! buffer that the test can inspect afterwards. Const-constructible so it
//! can live in a `static` and be installed wherever a
//! `&'static dyn Transport` is expected.

use spin::Mutex;

use crate::Transport;

/// Capacity of the capture buffer in bytes.
pub const CAPTURE_CAPACITY: usize = 4096;

/// Transport that records everything written to it.
///
/// Writes beyond [`CAPTURE_CAPACITY`] are dropped; the logger's own line
/// buffer is far smaller, so a test never hits this in practice.
#[derive(Debug)]
pub struct CaptureTransport {
    buf: Mutex<heapless::Vec<u8, CAPTURE_CAPACITY>>,
}

impl CaptureTransport {
    /// Create an empty capture transport.
    pub const fn new() -> Self {
        Self {
            buf: Mutex::new(heapless::Vec::new()),
        }
    }

    /// Number of bytes captured so far.
    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    /// Copy of the captured bytes.
    pub fn contents(&self) -> heapless::Vec<u8, CAPTURE_CAPACITY> {
        self.buf.lock().clone()
    }

    /// Run `f` over the captured bytes without copying.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.buf.lock())
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Default for CaptureTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for CaptureTransport {
    fn write_bytes(&self, bytes: &[u8]) {
        let mut buf = self.buf.lock();
        for &b in bytes {
            if buf.push(b).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_round_trip() {
        let t = CaptureTransport::new();
        assert!(t.is_empty());

        t.write_bytes(b"hello ");
        t.write_bytes(b"world\n");

        assert_eq!(t.len(), 12);
        t.with_bytes(|bytes| assert_eq!(bytes, b"hello world\n"));
    }

    #[test]
    fn test_capture_clear() {
        let t = CaptureTransport::new();
        t.write_bytes(b"stale");
        t.clear();
        assert!(t.is_empty());
    }

    #[test]
    fn test_capture_in_static() {
        static CAP: CaptureTransport = CaptureTransport::new();
        CAP.clear();
        CAP.write_bytes(b"xyz");
        assert_eq!(CAP.contents().as_slice(), b"xyz");
    }
}
