//! Whole-lifecycle exercise of the public API: noisy link bring-up,
//! steady reception, desync recovery and hardware error recovery.

use std::sync::{Arc, Mutex};

use bytes::{Bytes, BytesMut};
use framelock::{FrameSync, SyncConfig, SyncState};
use framelock_transport::{LineError, RxRequest, ScriptedRx, SerialRx};

const HEADER: [u8; 2] = [0xAA, 0x55];
const FRAME_LEN: usize = 6;

fn new_link() -> (
    FrameSync<ScriptedRx, impl framelock::FrameDecoder>,
    Arc<Mutex<Vec<Vec<u8>>>>,
) {
    let payloads: Arc<Mutex<Vec<Vec<u8>>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&payloads);
    let decoder = move |payload: &[u8]| {
        log.lock().unwrap().push(payload.to_vec());
        // Reject frames whose first payload byte is 0xFF, as a stand-in
        // for a checksum failure.
        payload.first() != Some(&0xFF)
    };

    let config = SyncConfig {
        header: Bytes::from_static(&HEADER),
        frame_len: FRAME_LEN,
        buffer: BytesMut::with_capacity(FRAME_LEN),
        stats: true,
    };
    let sync = FrameSync::new(ScriptedRx::new(), decoder, config).unwrap();
    (sync, payloads)
}

#[test]
fn noisy_bring_up_then_steady_traffic() {
    let (mut sync, payloads) = new_link();

    // Mid-frame garbage before the first header, including bytes that
    // look like parts of it. The final 0x55 completes a rotation.
    for byte in [0x13, 0x55, 0xAA, 0xAA, 0x55] {
        sync.on_reception_complete(&[byte]);
    }
    assert_eq!(sync.state(), SyncState::FramePending);

    sync.on_reception_complete(&[0x01, 0x02, 0x03, 0x04]);
    assert!(sync.is_connected());

    for seq in [0x10u8, 0x20, 0x30] {
        sync.on_reception_complete(&[0xAA, 0x55, seq, seq + 1, seq + 2, seq + 3]);
        assert!(sync.is_connected());
    }

    let seen = payloads.lock().unwrap().clone();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], vec![0x01, 0x02, 0x03, 0x04]);
    assert_eq!(seen[3], vec![0x30, 0x31, 0x32, 0x33]);

    let stats = sync.stats().unwrap();
    assert_eq!(stats.frames_received, 4);
    assert_eq!(stats.decode_ok, 4);
    assert_eq!(stats.header_matches, 1);
}

#[test]
fn desync_recovery_round_trip() {
    let (mut sync, payloads) = new_link();

    for byte in HEADER {
        sync.on_reception_complete(&[byte]);
    }
    sync.on_reception_complete(&[0x01, 0x02, 0x03, 0x04]);
    assert!(sync.is_connected());

    // A frame slipped by one byte: its leading bytes no longer carry the
    // header, so the lock is dropped and the frame discarded.
    sync.on_reception_complete(&[0x04, 0xAA, 0x55, 0x05, 0x06, 0x07]);
    assert_eq!(sync.state(), SyncState::Searching);
    assert_eq!(payloads.lock().unwrap().len(), 1);

    // The stream continues; the next header re-locks the link.
    for byte in [0x08, 0xAA, 0x55] {
        sync.on_reception_complete(&[byte]);
    }
    assert_eq!(sync.state(), SyncState::FramePending);
    sync.on_reception_complete(&[0x09, 0x0A, 0x0B, 0x0C]);
    assert!(sync.is_connected());

    assert_eq!(
        payloads.lock().unwrap().last().unwrap(),
        &vec![0x09, 0x0A, 0x0B, 0x0C]
    );
    assert_eq!(sync.stats().unwrap().header_errors, 1);
    assert_eq!(sync.stats().unwrap().header_matches, 2);
}

#[test]
fn rejected_frames_do_not_break_the_lock() {
    let (mut sync, payloads) = new_link();

    for byte in HEADER {
        sync.on_reception_complete(&[byte]);
    }
    sync.on_reception_complete(&[0x01, 0x02, 0x03, 0x04]);

    // 0xFF payloads fail "checksum" in the decoder.
    sync.on_reception_complete(&[0xAA, 0x55, 0xFF, 0x00, 0x00, 0x00]);
    sync.on_reception_complete(&[0xAA, 0x55, 0x05, 0x06, 0x07, 0x08]);

    assert!(sync.is_connected());
    assert_eq!(payloads.lock().unwrap().len(), 3);

    let stats = sync.stats().unwrap();
    assert_eq!(stats.decode_ok, 2);
    assert_eq!(stats.decode_failed, 1);
    assert_eq!(stats.header_errors, 0);
}

#[test]
fn hardware_error_recovery_round_trip() {
    let (mut sync, payloads) = new_link();

    for byte in HEADER {
        sync.on_reception_complete(&[byte]);
    }
    sync.on_reception_complete(&[0x01, 0x02, 0x03, 0x04]);
    assert!(sync.is_connected());

    sync.get_mut().inject_line_error(LineError::Overrun);
    sync.get_mut().clear_requests();
    sync.on_hardware_error();

    assert_eq!(sync.state(), SyncState::Searching);
    assert_eq!(sync.get_ref().line_error(), None);
    assert_eq!(
        sync.get_ref().requests(),
        &[RxRequest::Abort, RxRequest::Single { offset: 0 }]
    );

    // Reception resumes as if freshly initialized.
    for byte in [0x00, 0xAA, 0x55] {
        sync.on_reception_complete(&[byte]);
    }
    sync.on_reception_complete(&[0x21, 0x22, 0x23, 0x24]);
    assert!(sync.is_connected());
    assert_eq!(
        payloads.lock().unwrap().last().unwrap(),
        &vec![0x21, 0x22, 0x23, 0x24]
    );
    assert_eq!(sync.stats().unwrap().line_errors, 1);
}
