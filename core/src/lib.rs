//! # Ember Logger Core
//!
//! Minimal, allocation-free logging for bare-metal targets. Leveled,
//! formatted messages fan out to a built-in debug transport and to any
//! registered sinks, each with its own severity threshold.
//!
//! ## Components
//!
//! - **Level**: ordered severity categories, `Trace` through `Fatal`
//! - **Record**: one borrowed event per dispatch call, stamped at most once
//! - **LineBuffer**: bounded, truncating formatter for the built-in output
//! - **SinkTable**: fixed-capacity ordered fan-out list
//! - **Logger**: the dispatcher plus its configuration state
//! - **bridge**: adapter feeding `log` facade records into the dispatcher
//!
//! ## Shape
//!
//! Nothing here allocates and nothing grows: the line buffer truncates at
//! [`LINE_CAPACITY`] and the sink table refuses registrations past
//! [`MAX_SINKS`]. The process-wide logger sits behind a `spin::Mutex` that
//! brackets the whole dispatch body; an embedder that wants full control
//! can instead own a [`Logger`] directly.
//!
//! ## Example
//!
//! ```no_run
//! use ember_core::Level;
//! use ember_hal::Semihosting;
//!
//! static TRANSPORT: Semihosting = Semihosting::new();
//!
//! ember_core::set_transport(&TRANSPORT);
//! ember_core::set_level(Level::Info);
//! ember_core::info!("boot complete, {} cores online", 4);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod bridge;
pub mod level;
pub mod linebuf;
pub mod logger;
pub mod macros;
pub mod record;
pub mod sink;

pub use level::Level;
pub use linebuf::{LineBuffer, LINE_CAPACITY};
pub use logger::{
    add_sink, dispatch, set_clock, set_level, set_quiet, set_transport, with_logger, Logger,
};
pub use record::{ClockFn, Record, Timestamp};
pub use sink::{Sink, SinkTableFull, MAX_SINKS};
