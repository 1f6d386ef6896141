//! Drive the sync state machine over a simulated noisy byte stream.
//!
//! Run with:
//!   cargo run --example lock-on
//!
//! Uses the scripted in-memory transport; a real embedding would wire
//! the two notification methods to a serial driver's completion and
//! error callbacks instead.

use bytes::{Bytes, BytesMut};
use framelock::{FrameSync, SyncConfig};
use framelock_transport::ScriptedRx;

const HEADER: [u8; 2] = [0xAA, 0x55];
const FRAME_LEN: usize = 6;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = SyncConfig {
        header: Bytes::from_static(&HEADER),
        frame_len: FRAME_LEN,
        buffer: BytesMut::with_capacity(FRAME_LEN),
        stats: true,
    };

    let decoder = |payload: &[u8]| {
        eprintln!("decoded payload: {payload:02X?}");
        true
    };

    let mut sync = FrameSync::new(ScriptedRx::new(), decoder, config)?;

    // The link comes up mid-frame: garbage first, then a header.
    for byte in [0x13, 0x37, 0xAA, 0x55] {
        sync.on_reception_complete(&[byte]);
    }
    eprintln!("state after header search: {:?}", sync.state());

    // Remainder of the first frame, then two full frames back-to-back.
    sync.on_reception_complete(&[0x01, 0x02, 0x03, 0x04]);
    sync.on_reception_complete(&[0xAA, 0x55, 0x05, 0x06, 0x07, 0x08]);
    sync.on_reception_complete(&[0xAA, 0x55, 0x09, 0x0A, 0x0B, 0x0C]);

    eprintln!("connected: {}", sync.is_connected());
    eprintln!("stats: {:#?}", sync.stats().unwrap());
    eprintln!("requests issued: {:?}", sync.get_ref().requests());
    Ok(())
}
