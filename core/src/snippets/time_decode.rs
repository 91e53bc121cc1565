//! A `timestamptz` read as formatted text vs. as its binary wire form: an
//! `i64` of microseconds since 2000-01-01T00:00:00Z, big-endian.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::hint::black_box;

use crate::fixture::Expected;
use crate::runner::Bencher;

pub const TEXT: &str = "2011-10-25 09:12:34.345921-05";
/// `%#z` accepts offsets with or without minutes (`-05`, `-05:30`).
pub const TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

pub const MICROS_PER_SECOND: i64 = 1_000_000;
/// Microseconds between the Unix epoch and the Y2K epoch.
pub const MICROS_UNIX_TO_Y2K: i64 = 946_684_800 * MICROS_PER_SECOND;

pub fn decode_text(text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, TEXT_FORMAT).with_context(|| format!("parse timestamp {:?}", text))
}

/// Microseconds since Y2K. Sub-microsecond precision is truncated.
pub fn micros_since_y2k<Tz: TimeZone>(at: &DateTime<Tz>) -> i64 {
    at.timestamp_micros() - MICROS_UNIX_TO_Y2K
}

pub fn encode_binary<Tz: TimeZone>(at: &DateTime<Tz>) -> [u8; 8] {
    micros_since_y2k(at).to_be_bytes()
}

pub fn decode_binary(buf: &[u8]) -> Result<DateTime<Utc>> {
    let raw: [u8; 8] = buf
        .try_into()
        .map_err(|_| anyhow!("timestamptz needs 8 bytes, got {}", buf.len()))?;
    from_micros_since_y2k(i64::from_be_bytes(raw))
}

pub fn from_micros_since_y2k(micros: i64) -> Result<DateTime<Utc>> {
    let since_unix = MICROS_UNIX_TO_Y2K
        .checked_add(micros)
        .ok_or_else(|| anyhow!("timestamp {}us since 2000-01-01 overflows", micros))?;
    let secs = since_unix.div_euclid(MICROS_PER_SECOND);
    let nanos = (since_unix.rem_euclid(MICROS_PER_SECOND) * 1_000) as u32;
    DateTime::from_timestamp(secs, nanos).ok_or_else(|| anyhow!("timestamp {}us since 2000-01-01 out of range", micros))
}

pub fn parse_time_text(b: &mut Bencher) -> Result<()> {
    let expected = Expected::new(decode_text(TEXT)?);
    b.iter(|_| {
        let at = decode_text(black_box(TEXT))?;
        expected.verify(&at)
    })
}

pub fn parse_time_binary(b: &mut Bencher) -> Result<()> {
    let expected = Expected::new(decode_text(TEXT)?);
    let buf = encode_binary(expected.value());
    b.iter(|_| {
        let at = decode_binary(black_box(&buf))?;
        expected.verify(&at)
    })
}
