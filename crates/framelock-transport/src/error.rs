/// Hardware error conditions a serial receiver can latch.
///
/// These correspond to the usual UART status flags. The sync layer does
/// not distinguish between them — any latched condition triggers a full
/// resynchronization — but drivers report the specific cause so it can
/// be logged and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Received byte failed the parity check.
    #[error("parity error")]
    Parity,

    /// Stop bit not found where expected.
    #[error("framing error")]
    Framing,

    /// Noise detected on the line during reception.
    #[error("noise detected")]
    Noise,

    /// A byte arrived before the previous one was consumed.
    #[error("receive overrun")]
    Overrun,
}
