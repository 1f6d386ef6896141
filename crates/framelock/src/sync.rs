use bytes::{Bytes, BytesMut};
use framelock_transport::SerialRx;
use tracing::{debug, trace, warn};

use crate::decoder::FrameDecoder;
use crate::error::{ConfigError, Result};
use crate::matcher::header_matches;
use crate::stats::SyncStats;

/// Maximum supported header pattern length in bytes.
pub const MAX_HEADER_LEN: usize = 16;

/// Synchronization state of a [`FrameSync`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No alignment established; hunting for the header byte-by-byte.
    Searching,
    /// Header just matched; the first frame's remainder is in flight.
    FramePending,
    /// Locked; whole frames are received continuously.
    SteadyState,
}

/// Configuration for a [`FrameSync`] instance.
#[derive(Debug)]
pub struct SyncConfig {
    /// Header pattern marking the start of each frame.
    /// Length must be in `1..=MAX_HEADER_LEN`.
    pub header: Bytes,
    /// Total frame length including the header. Must exceed the header
    /// length.
    pub frame_len: usize,
    /// Reception buffer, reused for every frame. Capacity must be at
    /// least `frame_len`.
    pub buffer: BytesMut,
    /// Maintain [`SyncStats`] counters.
    pub stats: bool,
}

/// Frame synchronization state machine for a fixed-length framed link.
///
/// Owns the transport collaborator and the reception buffer for the
/// lifetime of the link. Driven entirely by the two notification
/// methods; neither blocks, and every reception request issued to the
/// transport is fire-and-forget.
///
/// Both notification methods take `&mut self`, so an embedding whose
/// completion and error sources can fire concurrently must serialize
/// them before calling in — a single-consumer channel is enough.
pub struct FrameSync<T, D> {
    transport: T,
    decoder: D,
    header: Bytes,
    frame_len: usize,
    buffer: BytesMut,
    state: SyncState,
    search_index: usize,
    stats: Option<SyncStats>,
}

impl<T: SerialRx, D: FrameDecoder> FrameSync<T, D> {
    /// Validate the configuration, arm single-byte reception and enter
    /// the `Searching` state.
    pub fn new(transport: T, decoder: D, config: SyncConfig) -> Result<Self> {
        let header_len = config.header.len();
        if header_len == 0 {
            return Err(ConfigError::EmptyHeader);
        }
        if header_len > MAX_HEADER_LEN {
            return Err(ConfigError::HeaderTooLong {
                len: header_len,
                max: MAX_HEADER_LEN,
            });
        }
        if config.frame_len <= header_len {
            return Err(ConfigError::FrameTooShort {
                frame_len: config.frame_len,
                header_len,
            });
        }
        if config.buffer.capacity() < config.frame_len {
            return Err(ConfigError::BufferTooSmall {
                capacity: config.buffer.capacity(),
                frame_len: config.frame_len,
            });
        }

        let mut buffer = config.buffer;
        buffer.resize(config.frame_len, 0);

        let mut sync = Self {
            transport,
            decoder,
            header: config.header,
            frame_len: config.frame_len,
            buffer,
            state: SyncState::Searching,
            search_index: 0,
            stats: config.stats.then(SyncStats::default),
        };
        sync.transport.request_single(0);
        Ok(sync)
    }

    /// Handle completion of the outstanding reception request.
    ///
    /// `data` holds the received bytes: one byte while `Searching`, the
    /// frame remainder in `FramePending`, a whole frame in
    /// `SteadyState`. A length that does not match the outstanding
    /// request drops the link back to `Searching`.
    pub fn on_reception_complete(&mut self, data: &[u8]) {
        let expected = self.expected_len();
        if data.len() != expected {
            warn!(
                got = data.len(),
                expected,
                state = ?self.state,
                "reception length mismatch, resynchronizing"
            );
            self.resynchronize();
            return;
        }

        match self.state {
            SyncState::Searching => self.search_step(data[0]),
            SyncState::FramePending => self.first_frame_complete(data),
            SyncState::SteadyState => self.steady_frame_complete(data),
        }
    }

    /// Handle a hardware error notification from the transport.
    ///
    /// Unconditionally drops back to `Searching`, from any state. A
    /// notification with no latched error condition is a no-op, which
    /// filters spurious wakeups.
    pub fn on_hardware_error(&mut self) {
        let Some(error) = self.transport.line_error() else {
            return;
        };
        self.bump(|s| &mut s.line_errors);
        warn!(%error, state = ?self.state, "line error, resynchronizing");
        self.transport.clear_line_errors();
        self.resynchronize();
    }

    /// True once a full frame has been received and reception is locked.
    pub fn is_connected(&self) -> bool {
        self.state == SyncState::SteadyState
    }

    /// Current synchronization state.
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Observability counters, if enabled in the configuration.
    pub fn stats(&self) -> Option<&SyncStats> {
        self.stats.as_ref()
    }

    /// The header pattern this instance synchronizes on.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Total frame length including the header.
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the instance and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Bytes expected from the outstanding reception request.
    fn expected_len(&self) -> usize {
        match self.state {
            SyncState::Searching => 1,
            SyncState::FramePending => self.frame_len - self.header.len(),
            SyncState::SteadyState => self.frame_len,
        }
    }

    fn search_step(&mut self, byte: u8) {
        let header_len = self.header.len();
        self.buffer[self.search_index] = byte;
        let next = (self.search_index + 1) % header_len;

        // Only run the rotation test when the newest byte could be the
        // terminal header byte.
        if byte == self.header[header_len - 1]
            && header_matches(&self.buffer[..header_len], next, &self.header)
        {
            self.bump(|s| &mut s.header_matches);
            debug!(rotation = next, "header matched, receiving frame remainder");
            self.transport
                .request_block(header_len, self.frame_len - header_len);
            self.state = SyncState::FramePending;
            return;
        }

        self.transport.request_single(next);
        self.search_index = next;
    }

    fn first_frame_complete(&mut self, data: &[u8]) {
        self.bump(|s| &mut s.frames_received);
        let header_len = self.header.len();
        self.buffer[header_len..self.frame_len].copy_from_slice(data);

        // The next frame is armed before the current payload is decoded;
        // the decoder has until the line delivers `header_len` bytes
        // before its view is overwritten. See the crate-level timing
        // contract.
        self.transport.request_block(0, self.frame_len);
        self.state = SyncState::SteadyState;
        debug!("first frame complete, reception locked");
        self.dispatch();
    }

    fn steady_frame_complete(&mut self, data: &[u8]) {
        self.bump(|s| &mut s.frames_received);
        self.buffer[..self.frame_len].copy_from_slice(data);

        // Keep reception continuous: the next frame is armed before the
        // current one is validated or decoded.
        self.transport.request_block(0, self.frame_len);

        let header_len = self.header.len();
        if !header_matches(&self.buffer[..header_len], 0, &self.header) {
            self.bump(|s| &mut s.header_errors);
            warn!("header mismatch in steady state, resynchronizing");
            self.resynchronize();
            return;
        }
        self.dispatch();
    }

    /// Invoke the decoder on the payload of the frame in the buffer.
    fn dispatch(&mut self) {
        let start = self.header.len();
        if self.decoder.decode(&self.buffer[start..self.frame_len]) {
            self.bump(|s| &mut s.decode_ok);
        } else {
            // The frame is simply dropped; rejecting a payload is the
            // decoder's call and not a loss of alignment.
            self.bump(|s| &mut s.decode_failed);
            trace!("decoder rejected frame");
        }
    }

    /// Drop alignment and restart the header search from offset zero.
    fn resynchronize(&mut self) {
        self.transport.abort();
        self.state = SyncState::Searching;
        self.search_index = 0;
        self.transport.request_single(0);
    }

    fn bump(&mut self, counter: impl FnOnce(&mut SyncStats) -> &mut u64) {
        if let Some(stats) = &mut self.stats {
            *counter(stats) += 1;
        }
    }
}

impl<T: std::fmt::Debug, D> std::fmt::Debug for FrameSync<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSync")
            .field("transport", &self.transport)
            .field("state", &self.state)
            .field("header", &self.header)
            .field("frame_len", &self.frame_len)
            .field("search_index", &self.search_index)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
