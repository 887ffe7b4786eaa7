//! # Line Formatter
//!
//! Renders one log event into a fixed-capacity byte buffer as
//! `HH:MM:SS LEVEL file:line: <message>\n`. Field order is fixed.
//!
//! The buffer implements [`core::fmt::Write`] with a truncating `write_str`:
//! each append copies at most what fits and silently drops the rest, so an
//! oversized message degrades to a shorter line instead of an error or a
//! fault. The rendered line always ends in a newline; when the buffer is
//! full the final byte is overwritten, so output never exceeds the declared
//! capacity.

use core::fmt::{self, Write};

use static_assertions::const_assert;

use crate::record::Record;

/// Capacity of the logger's built-in line buffer in bytes.
pub const LINE_CAPACITY: usize = 256;

// Room for the "HH:MM:SS LEVEL " prefix and a bit of payload.
const_assert!(LINE_CAPACITY >= 32);

/// Fixed-capacity, truncating line buffer.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Bytes rendered so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Current length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been rendered.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset to empty without touching capacity.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Render `record` as a complete, newline-terminated line.
    ///
    /// Every field is attempted even after truncation sets in; appends to a
    /// full buffer copy zero bytes. The record should already be stamped;
    /// an unstamped record renders as `00:00:00`.
    pub fn render(&mut self, record: &Record<'_>) {
        self.clear();
        let _ = write!(
            self,
            "{} {} {}:{}: ",
            record.timestamp().unwrap_or_default(),
            record.level().name(),
            record.file(),
            record.line(),
        );
        let _ = self.write_fmt(record.args());
        self.terminate();
    }

    /// Guarantee the buffer ends in a newline without exceeding capacity.
    fn terminate(&mut self) {
        if self.len < N {
            self.buf[self.len] = b'\n';
            self.len += 1;
        } else {
            self.buf[N - 1] = b'\n';
        }
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    /// Truncating append: never fails, copies at most the remaining capacity.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = N - self.len;
        let take = s.len().min(remaining);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &N)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn rendered<const N: usize>(record: &mut Record<'_>) -> LineBuffer<N> {
        record.stamp(None);
        let mut line = LineBuffer::<N>::new();
        line.render(record);
        line
    }

    #[test]
    fn test_render_basic_line() {
        let mut record = Record::new(Level::Info, "a.rs", 11, format_args!("x={}", 5));
        let line = rendered::<LINE_CAPACITY>(&mut record);

        assert_eq!(line.as_bytes(), b"00:00:00 INFO a.rs:11: x=5\n");
    }

    #[test]
    fn test_render_uses_stamp() {
        let mut record = Record::new(Level::Warn, "b.rs", 7, format_args!("late"));
        record.stamp(Some(|| 86_399));
        let mut line = LineBuffer::<LINE_CAPACITY>::new();
        line.render(&record);
        assert_eq!(line.as_bytes(), b"23:59:59 WARN b.rs:7: late\n");
    }

    #[test]
    fn test_render_ends_in_single_newline() {
        let mut record = Record::new(Level::Error, "c.rs", 1, format_args!("boom"));
        let line = rendered::<LINE_CAPACITY>(&mut record);
        let bytes = line.as_bytes();

        assert_eq!(bytes[bytes.len() - 1], b'\n');
        assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn test_truncation_fills_exactly_capacity() {
        // 100-byte message into a 32-byte buffer.
        let args = format_args!("{:<100}", "wide");
        let mut record = Record::new(Level::Debug, "t.rs", 3, args);
        let line = rendered::<32>(&mut record);
        let bytes = line.as_bytes();

        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], b'\n');
        // Header survives intact ahead of the truncated payload.
        assert!(bytes.starts_with(b"00:00:00 DEBUG t.rs:3: "));
    }

    #[test]
    fn test_truncated_header_still_newline_terminated() {
        // Too small for even the prefix.
        let mut record = Record::new(Level::Info, "somefile.rs", 123, format_args!("msg"));
        record.stamp(None);
        let mut line = LineBuffer::<12>::new();
        line.render(&record);

        assert_eq!(line.len(), 12);
        assert_eq!(line.as_bytes()[11], b'\n');
    }

    #[test]
    fn test_empty_message() {
        let mut record = Record::new(Level::Trace, "e.rs", 9, format_args!(""));
        let line = rendered::<LINE_CAPACITY>(&mut record);
        assert_eq!(line.as_bytes(), b"00:00:00 TRACE e.rs:9: \n");
    }

    #[test]
    fn test_buffer_reuse_clears_previous_line() {
        let mut long = Record::new(Level::Info, "r.rs", 1, format_args!("a longer message"));
        let mut short = Record::new(Level::Info, "r.rs", 2, format_args!("s"));
        long.stamp(None);
        short.stamp(None);

        let mut line = LineBuffer::<LINE_CAPACITY>::new();
        line.render(&long);
        line.render(&short);
        assert_eq!(line.as_bytes(), b"00:00:00 INFO r.rs:2: s\n");
    }
}
