//! The measured snippets, each a pair of benchmarks comparing two ways of
//! doing the same job on a driver's hot path.
//!
//! Every snippet exposes its kernel as plain functions so the equivalence of
//! both variants can be tested without going through the runner.

pub mod binary_write;
pub mod buffers;
pub mod file_write;
pub mod int_decode;
pub mod time_decode;

#[cfg(test)]
mod buffers_test;
#[cfg(test)]
mod int_decode_test;

use crate::runner::Benchmark;

pub static SUITE: &[Benchmark] = &[
    Benchmark {
        name: "NewBuffers",
        run: buffers::new_buffers,
    },
    Benchmark {
        name: "ReuseBuffers",
        run: buffers::reuse_buffers,
    },
    Benchmark {
        name: "UnbufferedFileWrite",
        run: file_write::unbuffered_file_write,
    },
    Benchmark {
        name: "BufferedFileWrite",
        run: file_write::buffered_file_write,
    },
    Benchmark {
        name: "ParseInt32Text",
        run: int_decode::parse_int32_text,
    },
    Benchmark {
        name: "ParseInt32Binary",
        run: int_decode::parse_int32_binary,
    },
    Benchmark {
        name: "ParseTimeText",
        run: time_decode::parse_time_text,
    },
    Benchmark {
        name: "ParseTimeBinary",
        run: time_decode::parse_time_binary,
    },
    Benchmark {
        name: "BinaryWrite",
        run: binary_write::binary_write,
    },
    Benchmark {
        name: "BinaryPut",
        run: binary_write::binary_put,
    },
];
