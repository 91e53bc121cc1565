//! A 32-bit integer column read as decimal text vs. as four big-endian bytes.

use anyhow::{Context, Result, anyhow};
use std::hint::black_box;

use crate::fixture::Expected;
use crate::runner::Bencher;

pub const TEXT: &str = "12345678";
pub const VALUE: i32 = 12_345_678;

pub fn decode_text(text: &str) -> Result<i32> {
    text.parse::<i32>().with_context(|| format!("parse {:?} as i32", text))
}

pub fn encode_binary(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn decode_binary(buf: &[u8]) -> Result<i32> {
    let raw: [u8; 4] = buf
        .try_into()
        .map_err(|_| anyhow!("int4 needs 4 bytes, got {}", buf.len()))?;
    Ok(i32::from_be_bytes(raw))
}

pub fn parse_int32_text(b: &mut Bencher) -> Result<()> {
    let expected = Expected::new(VALUE);
    b.iter(|_| {
        let n = decode_text(black_box(TEXT))?;
        expected.verify(&n)
    })
}

pub fn parse_int32_binary(b: &mut Bencher) -> Result<()> {
    let buf = encode_binary(VALUE);
    let expected = Expected::new(VALUE);
    b.iter(|_| {
        let n = decode_binary(black_box(&buf))?;
        expected.verify(&n)
    })
}
