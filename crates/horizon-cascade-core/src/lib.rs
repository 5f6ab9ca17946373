//! Core systems for Horizon Cascade.
//!
//! This crate provides the foundational pieces the cascading menu subsystem is
//! built from:
//!
//! - **Signal/Slot System**: Type-safe notifications for menu entry events
//! - **Tick Clock**: A host-driven monotonic clock and dwell timers
//! - **Logging**: Tracing targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_cascade_core::Signal;
//!
//! let highlighted = Signal::<usize>::new();
//! let conn_id = highlighted.connect(|index| {
//!     println!("Entry {} highlighted", index);
//! });
//! highlighted.emit(2);
//! highlighted.disconnect(conn_id);
//! ```
//!
//! # Dwell Timer Example
//!
//! ```
//! use horizon_cascade_core::{DwellTimer, TickClock};
//! use std::time::Duration;
//!
//! let mut clock = TickClock::new();
//! let mut dwell = DwellTimer::new();
//! dwell.arm(clock.now());
//! clock.advance(Duration::from_millis(300));
//! assert!(dwell.has_elapsed(clock.now(), Duration::from_millis(250)));
//! ```

pub mod clock;
pub mod logging;
pub mod signal;

pub use clock::{DwellTimer, TickClock};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
