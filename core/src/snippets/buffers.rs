//! Fresh allocation per iteration vs. slicing one caller-owned buffer.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use crate::runner::Bencher;

/// Size of the shared buffer; spans are always shorter.
pub const REUSE_CAPACITY: usize = 1024;
pub const MARKER: u8 = 1;

const SPAN_SEED: u64 = 0x5eed_b0ff;

/// Deterministic source of span lengths so both variants see the same ones.
pub fn span_lengths() -> StdRng {
    StdRng::seed_from_u64(SPAN_SEED)
}

pub fn next_span_len(rng: &mut StdRng) -> usize {
    rng.random_range(0..REUSE_CAPACITY)
}

pub fn fill_markers(buf: &mut [u8]) {
    buf.fill(MARKER);
}

pub fn fresh_span(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    fill_markers(&mut buf);
    buf
}

/// Mark the first `len` bytes of `shared` and return that span. `len` is
/// clamped to [`REUSE_CAPACITY`].
pub fn reused_span(shared: &mut [u8; REUSE_CAPACITY], len: usize) -> &mut [u8] {
    let span = &mut shared[..len.min(REUSE_CAPACITY)];
    fill_markers(span);
    span
}

pub fn new_buffers(b: &mut Bencher) -> Result<()> {
    let mut rng = span_lengths();
    b.iter(|_| {
        let n = next_span_len(&mut rng);
        black_box(fresh_span(n));
        Ok(())
    })
}

pub fn reuse_buffers(b: &mut Bencher) -> Result<()> {
    let mut shared = [0u8; REUSE_CAPACITY];
    let mut rng = span_lengths();
    b.iter(|_| {
        let n = next_span_len(&mut rng);
        black_box(reused_span(&mut shared, n));
        Ok(())
    })
}
