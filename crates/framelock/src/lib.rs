//! Header synchronization for fixed-length framed serial streams.
//!
//! A serial link delivers frames of a fixed total length, each starting
//! with a known header pattern, but the start-of-frame offset within the
//! byte stream is unknown when the link comes up. This crate locates the
//! header one byte at a time, switches to bulk reception for the rest of
//! the frame, and hands each completed frame's payload to a
//! caller-supplied decoder. Payload validation (CRC and the like) is the
//! decoder's business, not this layer's.
//!
//! The core is [`FrameSync`], a state machine driven by two events
//! delivered by the transport driver:
//!
//! - [`FrameSync::on_reception_complete`] — the outstanding reception
//!   request finished, here are the bytes;
//! - [`FrameSync::on_hardware_error`] — the receiver latched a line
//!   error (parity, framing, noise, overrun).
//!
//! It moves through three states: `Searching` (hunting for the header
//! byte-by-byte), `FramePending` (header found, first frame's remainder
//! in flight) and `SteadyState` (locked, continuously receiving whole
//! frames and re-validating the header on each one). Any hardware error
//! or header mismatch in steady state drops back to `Searching`.
//!
//! # Timing contract
//!
//! To keep reception continuous with a single buffer and zero copies on
//! the hot path, the next frame's reception is armed *before* the current
//! frame's payload is decoded. The decoder therefore must return within
//! the transmission time of `header_len` bytes at the configured symbol
//! rate — that is the first region of the buffer the incoming frame
//! overwrites. At 115200 baud a byte takes roughly 87 µs, which leaves a
//! comfortable margin for typical checksum-and-copy decoders; at multi-
//! megabaud rates the budget shrinks to a few microseconds per header
//! byte. A decoder that cannot meet the budget needs double buffering in
//! front of this layer.

pub mod decoder;
pub mod error;
pub mod matcher;
pub mod stats;
pub mod sync;

pub use decoder::FrameDecoder;
pub use error::{ConfigError, Result};
pub use matcher::header_matches;
pub use stats::SyncStats;
pub use sync::{FrameSync, SyncConfig, SyncState, MAX_HEADER_LEN};
