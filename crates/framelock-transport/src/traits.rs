use crate::error::LineError;

/// Receive-side capabilities of a serial driver.
///
/// All request methods are fire-and-forget: they arm the hardware (or
/// queue the operation) and return immediately. The driver later signals
/// the caller out-of-band — completion with the received bytes, or a
/// hardware error — and the caller feeds that event back into the sync
/// state machine.
///
/// Offsets refer to positions within the caller's frame buffer. Drivers
/// that stage DMA transfers can use them to target the destination
/// region directly; purely byte-oriented drivers may ignore them.
pub trait SerialRx {
    /// Arm reception of a single byte destined for `offset`.
    fn request_single(&mut self, offset: usize);

    /// Arm bulk reception of `len` bytes destined for `offset`.
    fn request_block(&mut self, offset: usize, len: usize);

    /// Abort whichever reception request is currently outstanding.
    ///
    /// Must be safe to call with no request in flight.
    fn abort(&mut self);

    /// The currently latched hardware error condition, if any.
    fn line_error(&self) -> Option<LineError>;

    /// Clear all latched hardware error indications.
    fn clear_line_errors(&mut self);
}

/// Plain-data mirror of the [`SerialRx`] request vocabulary.
///
/// Recording transports such as [`ScriptedRx`](crate::ScriptedRx) log one
/// of these per call, letting tests assert the exact request stream the
/// sync layer issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxRequest {
    /// Single-byte reception destined for `offset`.
    Single { offset: usize },
    /// Bulk reception of `len` bytes destined for `offset`.
    Block { offset: usize, len: usize },
    /// Abort of the outstanding request.
    Abort,
}
