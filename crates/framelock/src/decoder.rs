/// Caller-supplied frame decoder.
///
/// Invoked once per completed frame with the payload — the frame minus
/// its header. Returning `false` marks the frame as rejected; the sync
/// layer counts the rejection and keeps receiving, it does not retry or
/// resynchronize. Payload validation (CRC, sequence numbers, ...) lives
/// entirely on this side of the seam.
///
/// The payload view borrows the shared reception buffer and is only
/// valid for the duration of the call; see the crate-level timing
/// contract for how long the call itself may take.
pub trait FrameDecoder {
    /// Decode one frame payload. Returns whether the frame was accepted.
    fn decode(&mut self, payload: &[u8]) -> bool;
}

/// Closures are decoders.
impl<F> FrameDecoder for F
where
    F: FnMut(&[u8]) -> bool,
{
    fn decode(&mut self, payload: &[u8]) -> bool {
        self(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_implements_decoder() {
        let mut seen = Vec::new();
        let mut decoder = |payload: &[u8]| {
            seen.push(payload.to_vec());
            payload.first() == Some(&0x01)
        };

        assert!(decoder.decode(&[0x01, 0x02]));
        assert!(!decoder.decode(&[0xFF]));
        drop(decoder);
        assert_eq!(seen, vec![vec![0x01, 0x02], vec![0xFF]]);
    }

    #[test]
    fn struct_decoder() {
        struct CountingDecoder {
            calls: usize,
        }

        impl FrameDecoder for CountingDecoder {
            fn decode(&mut self, _payload: &[u8]) -> bool {
                self.calls += 1;
                true
            }
        }

        let mut decoder = CountingDecoder { calls: 0 };
        assert!(decoder.decode(b"abc"));
        assert!(decoder.decode(b"def"));
        assert_eq!(decoder.calls, 2);
    }
}
