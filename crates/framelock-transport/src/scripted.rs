use tracing::trace;

use crate::error::LineError;
use crate::traits::{RxRequest, SerialRx};

/// In-memory [`SerialRx`] for tests and examples.
///
/// Records every request the sync layer issues and lets the caller
/// inject a latched line error. It performs no actual I/O: the test
/// drives the state machine directly by delivering completion events
/// with whatever bytes the scenario calls for.
#[derive(Debug, Default)]
pub struct ScriptedRx {
    requests: Vec<RxRequest>,
    line_error: Option<LineError>,
}

impl ScriptedRx {
    /// Create a scripted transport with no recorded requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests issued so far, in order.
    pub fn requests(&self) -> &[RxRequest] {
        &self.requests
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RxRequest> {
        self.requests.last().copied()
    }

    /// Forget recorded requests (keeps any latched error).
    pub fn clear_requests(&mut self) {
        self.requests.clear();
    }

    /// Latch a line error, as if the hardware had flagged one.
    pub fn inject_line_error(&mut self, error: LineError) {
        self.line_error = Some(error);
    }
}

impl SerialRx for ScriptedRx {
    fn request_single(&mut self, offset: usize) {
        trace!(offset, "scripted: single-byte request");
        self.requests.push(RxRequest::Single { offset });
    }

    fn request_block(&mut self, offset: usize, len: usize) {
        trace!(offset, len, "scripted: block request");
        self.requests.push(RxRequest::Block { offset, len });
    }

    fn abort(&mut self) {
        trace!("scripted: abort");
        self.requests.push(RxRequest::Abort);
    }

    fn line_error(&self) -> Option<LineError> {
        self.line_error
    }

    fn clear_line_errors(&mut self) {
        self.line_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_requests_in_order() {
        let mut rx = ScriptedRx::new();
        rx.request_single(0);
        rx.request_block(2, 4);
        rx.abort();

        assert_eq!(
            rx.requests(),
            &[
                RxRequest::Single { offset: 0 },
                RxRequest::Block { offset: 2, len: 4 },
                RxRequest::Abort,
            ]
        );
        assert_eq!(rx.last_request(), Some(RxRequest::Abort));
    }

    #[test]
    fn line_error_latches_until_cleared() {
        let mut rx = ScriptedRx::new();
        assert_eq!(rx.line_error(), None);

        rx.inject_line_error(LineError::Overrun);
        assert_eq!(rx.line_error(), Some(LineError::Overrun));
        assert_eq!(rx.line_error(), Some(LineError::Overrun));

        rx.clear_line_errors();
        assert_eq!(rx.line_error(), None);
    }

    #[test]
    fn clear_requests_keeps_latched_error() {
        let mut rx = ScriptedRx::new();
        rx.request_single(0);
        rx.inject_line_error(LineError::Framing);

        rx.clear_requests();
        assert!(rx.requests().is_empty());
        assert_eq!(rx.line_error(), Some(LineError::Framing));
    }
}
