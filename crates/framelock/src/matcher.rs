//! Cyclic header matching.

/// Compare a circular window of bytes against a header pattern.
///
/// Reads `pattern.len()` bytes from `window` starting at `start`,
/// wrapping to `window[0]` past the end, and returns true iff the
/// rotated window equals `pattern` byte-for-byte.
///
/// `window` and `pattern` must have the same length and `start` must be
/// in range; both are the caller's responsibility (debug-asserted here).
/// O(L) comparisons, no allocation.
///
/// With `start == 0` this degenerates to plain slice equality, which is
/// exactly the steady-state header re-validation.
pub fn header_matches(window: &[u8], start: usize, pattern: &[u8]) -> bool {
    debug_assert_eq!(window.len(), pattern.len());
    debug_assert!(start < window.len());

    let (tail, head) = pattern.split_at(window.len() - start);
    window[start..] == *tail && window[..start] == *head
}
