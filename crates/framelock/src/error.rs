/// Errors detected while validating a [`SyncConfig`](crate::SyncConfig).
///
/// These are programming-contract violations: a caller that hits one has
/// constructed an impossible link description, and there is nothing to
/// recover at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The header pattern is empty.
    #[error("header must contain at least one byte")]
    EmptyHeader,

    /// The header pattern exceeds the supported maximum length.
    #[error("header too long ({len} bytes, max {max})")]
    HeaderTooLong { len: usize, max: usize },

    /// The frame length does not leave room for a payload.
    #[error("frame length {frame_len} must exceed header length {header_len}")]
    FrameTooShort { frame_len: usize, header_len: usize },

    /// The reception buffer cannot hold a full frame.
    #[error("buffer capacity {capacity} below frame length {frame_len}")]
    BufferTooSmall { capacity: usize, frame_len: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
