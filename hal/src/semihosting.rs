//! # Semihosting Transport
//!
//! Routes rendered log lines to a debugger-attached host through the ARM
//! semihosting interface: a trap instruction carrying an operation number in
//! `r0` and a pointer to an argument block in `r1`.
//!
//! The trap encoding differs by instruction set: Thumb targets use
//! `bkpt 0xAB`, ARM targets use `svc 0x123456` (selected via the `thumb`
//! cfg emitted by the build script). On non-ARM targets the trap is a stub
//! that discards output, so the crate builds and tests on the host.

use crate::Transport;

/// Semihosting `SYS_WRITE` operation number.
const SYS_WRITE: usize = 0x05;

/// Host stdout file descriptor for `SYS_WRITE`.
const HOST_STDOUT: usize = 1;

/// Argument block for `SYS_WRITE`: `{fd, buffer, length}`.
#[repr(C)]
#[cfg_attr(not(target_arch = "arm"), allow(dead_code))]
struct WriteArgs {
    fd: usize,
    buf: *const u8,
    len: usize,
}

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "arm", thumb))] {
        /// Issue a semihosting call (Thumb encoding).
        ///
        /// # Safety
        ///
        /// `arg` must point to a valid argument block for `op`, and a
        /// semihosting-capable host must be attached (or the target must
        /// tolerate the trap).
        unsafe fn syscall(op: usize, arg: *const WriteArgs) -> usize {
            let ret;
            unsafe {
                core::arch::asm!(
                    "bkpt 0xAB",
                    inout("r0") op => ret,
                    in("r1") arg,
                    options(nostack, preserves_flags),
                );
            }
            ret
        }
    } else if #[cfg(target_arch = "arm")] {
        /// Issue a semihosting call (ARM encoding).
        ///
        /// # Safety
        ///
        /// Same contract as the Thumb variant.
        unsafe fn syscall(op: usize, arg: *const WriteArgs) -> usize {
            let ret;
            unsafe {
                core::arch::asm!(
                    "svc 0x123456",
                    inout("r0") op => ret,
                    in("r1") arg,
                    options(nostack, preserves_flags),
                );
            }
            ret
        }
    } else {
        /// Host stand-in: no semihosting interface, output is discarded.
        unsafe fn syscall(_op: usize, _arg: *const WriteArgs) -> usize {
            0
        }
    }
}

/// Transport writing to the semihosting host's stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Semihosting;

impl Semihosting {
    /// Shared instance, suitable for installing into the global logger.
    pub const fn new() -> Self {
        Semihosting
    }
}

impl Transport for Semihosting {
    fn write_bytes(&self, bytes: &[u8]) {
        let args = WriteArgs {
            fd: HOST_STDOUT,
            buf: bytes.as_ptr(),
            len: bytes.len(),
        };
        // Safety: the argument block lives across the synchronous trap and
        // matches the SYS_WRITE layout.
        unsafe {
            syscall(SYS_WRITE, &args);
        }
    }
}
