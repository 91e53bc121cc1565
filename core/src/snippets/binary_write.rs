//! Ten `int4` fields written through a generic big-endian writer vs. packed by
//! hand into a fresh 4-byte slice each and appended to a growing buffer.

use anyhow::Result;
use bytes::{BufMut, BytesMut};
use std::hint::black_box;

use crate::fixture::Expected;
use crate::runner::Bencher;

pub const FIELD_COUNT: i32 = 10;
pub const FIELD_WIDTH: usize = 4;
/// Initial capacity of the reused packing buffer.
pub const PACK_CAPACITY: usize = 1024;

pub fn fields() -> std::ops::Range<i32> {
    0..FIELD_COUNT
}

pub fn write_streaming<B, I>(out: &mut B, values: I)
where
    B: BufMut,
    I: IntoIterator<Item = i32>,
{
    for v in values {
        out.put_i32(v);
    }
}

pub fn pack_manual<I>(out: &mut Vec<u8>, values: I)
where
    I: IntoIterator<Item = i32>,
{
    for v in values {
        let mut field = vec![0u8; FIELD_WIDTH];
        field.copy_from_slice(&v.to_be_bytes());
        out.extend_from_slice(black_box(&field));
    }
}

/// The 40 bytes both paths must produce for [`fields`], built independently of
/// either writer.
pub fn expected_bytes() -> Vec<u8> {
    fields().flat_map(i32::to_be_bytes).collect()
}

/// Stream [`fields`] into a reused `BytesMut`, checking every pass against
/// `expected`.
pub fn stream_fields(b: &mut Bencher, expected: &Expected<Vec<u8>>) -> Result<()> {
    let mut buf = BytesMut::with_capacity(PACK_CAPACITY);
    b.iter(|_| {
        buf.clear();
        write_streaming(&mut buf, fields());
        expected.verify(black_box(&buf))
    })
}

/// Pack [`fields`] by hand into a reused `Vec`, checking every pass against
/// `expected`.
pub fn pack_fields(b: &mut Bencher, expected: &Expected<Vec<u8>>) -> Result<()> {
    let mut buf = Vec::with_capacity(PACK_CAPACITY);
    b.iter(|_| {
        buf.clear();
        pack_manual(&mut buf, fields());
        expected.verify(black_box(&buf))
    })
}

pub fn binary_write(b: &mut Bencher) -> Result<()> {
    stream_fields(b, &Expected::new(expected_bytes()))
}

pub fn binary_put(b: &mut Bencher) -> Result<()> {
    pack_fields(b, &Expected::new(expected_bytes()))
}
