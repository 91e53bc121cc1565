#[cfg(test)]
mod tests {
    use crate::snippets::buffers::{
        MARKER, REUSE_CAPACITY, fresh_span, next_span_len, reused_span, span_lengths,
    };

    #[test]
    fn test_reused_span_never_exceeds_capacity() {
        let mut shared = [0u8; REUSE_CAPACITY];
        let mut rng = span_lengths();
        for _ in 0..10_000 {
            let n = next_span_len(&mut rng);
            assert!(n < REUSE_CAPACITY);
            let span = reused_span(&mut shared, n);
            assert_eq!(span.len(), n);
            assert!(span.len() <= REUSE_CAPACITY);
        }
    }

    #[test]
    fn test_reused_span_clamps_oversized_request() {
        let mut shared = [0u8; REUSE_CAPACITY];
        let span = reused_span(&mut shared, REUSE_CAPACITY * 4);
        assert_eq!(span.len(), REUSE_CAPACITY);
        assert!(span.iter().all(|&b| b == MARKER));
    }

    #[test]
    fn test_reused_span_only_marks_prefix() {
        let mut shared = [0u8; REUSE_CAPACITY];
        reused_span(&mut shared, 10);
        assert!(shared[..10].iter().all(|&b| b == MARKER));
        assert!(shared[10..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fresh_and_reused_spans_match() {
        let mut shared = [0u8; REUSE_CAPACITY];
        let mut rng = span_lengths();
        for _ in 0..100 {
            let n = next_span_len(&mut rng);
            let fresh = fresh_span(n);
            assert_eq!(fresh.as_slice(), reused_span(&mut shared, n));
        }
    }

    #[test]
    fn test_span_lengths_are_deterministic() {
        let mut a = span_lengths();
        let mut b = span_lengths();
        let first: Vec<usize> = (0..32).map(|_| next_span_len(&mut a)).collect();
        let second: Vec<usize> = (0..32).map(|_| next_span_len(&mut b)).collect();
        assert_eq!(first, second);
    }
}
