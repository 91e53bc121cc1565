//! One `write` per line straight to the file vs. the same lines through a
//! `BufWriter` that is flushed once at the end.

use anyhow::{Context, Result};
use std::io::{BufWriter, Write};

use crate::runner::Bencher;
use crate::scratch::ScratchFile;

pub const LINE: &[u8] = b"Hello world\n";

pub fn write_line<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(LINE)
}

/// One `write` per iteration, straight to `out`.
pub fn unbuffered_lines<W: Write>(b: &mut Bencher, out: &mut W) -> Result<()> {
    b.iter(|_| write_line(out).context("write line to unbuffered file"))
}

/// One line per iteration through a `BufWriter` over `out`. The flush belongs
/// to the measured cost, so it happens on the last pass.
pub fn buffered_lines<W: Write>(b: &mut Bencher, out: &mut W) -> Result<()> {
    let mut writer = BufWriter::new(out);
    let last = b.iterations().saturating_sub(1);
    b.iter(|i| {
        write_line(&mut writer).context("write line through buffer")?;
        if i == last {
            writer.flush().context("flush buffered writer")?;
        }
        Ok(())
    })
}

pub fn unbuffered_file_write(b: &mut Bencher) -> Result<()> {
    let mut scratch = ScratchFile::create_in(b.scratch_dir(), "unbuffered")?;
    unbuffered_lines(b, scratch.file_mut())
}

pub fn buffered_file_write(b: &mut Bencher) -> Result<()> {
    let mut scratch = ScratchFile::create_in(b.scratch_dir(), "buffered")?;
    buffered_lines(b, scratch.file_mut())
}
