/// Observability counters for a sync instance.
///
/// Maintained only when enabled via [`SyncConfig`](crate::SyncConfig);
/// the hot path pays a single `Option` check when disabled. All counters
/// increase monotonically for the lifetime of the instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncStats {
    /// Header patterns matched during search.
    pub header_matches: u64,
    /// Header mismatches observed (steady-state desync).
    pub header_errors: u64,
    /// Completed frame receptions, first frame included.
    pub frames_received: u64,
    /// Frames accepted by the decoder.
    pub decode_ok: u64,
    /// Frames rejected by the decoder.
    pub decode_failed: u64,
    /// Hardware line error events handled.
    pub line_errors: u64,
}
