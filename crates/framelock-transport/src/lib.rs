//! Serial receive-side transport abstraction.
//!
//! Defines the capabilities the synchronization layer consumes from a
//! serial driver: arming single-byte and bulk reception, aborting the
//! outstanding request, and inspecting/clearing latched line errors.
//!
//! This is the lowest layer of framelock. The core state machine is
//! generic over the [`SerialRx`] trait provided here; real drivers (a
//! UART HAL, a USB CDC endpoint, a PTY in tests) implement it.

pub mod error;
pub mod scripted;
pub mod traits;

pub use error::LineError;
pub use scripted::ScriptedRx;
pub use traits::{RxRequest, SerialRx};
